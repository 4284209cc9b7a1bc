//! Recipe and ingredient editing.
//!
//! These operations mutate a [`Cookbook`] in memory. Persisting goes through
//! [`CookbookFile::edit`](crate::CookbookFile::edit), which re-validates the
//! result before adopting it.

use std::collections::BTreeSet;

use keks_core::{BakeSelection, IngredientLine, Unit};
use tracing::debug;

use crate::{Cookbook, Error, Recipe, Result, validate::validate_name};

impl Cookbook {
    /// Recipe names in sorted order.
    pub fn recipe_names(&self) -> Vec<&str> {
        self.recipes.keys().map(String::as_str).collect()
    }

    /// Look up a recipe by name.
    pub fn recipe(&self, name: &str) -> Result<&Recipe> {
        self.recipes
            .get(name.trim())
            .ok_or_else(|| Error::recipe_not_found(name.trim()))
    }

    fn recipe_mut(&mut self, name: &str) -> Result<&mut Recipe> {
        self.recipes
            .get_mut(name.trim())
            .ok_or_else(|| Error::recipe_not_found(name.trim()))
    }

    /// Add an empty recipe. Returns `false` if a recipe with that name exists.
    pub fn add_recipe(&mut self, name: &str) -> Result<bool> {
        let name = checked_name("recipe", name)?;
        if self.recipes.contains_key(name) {
            debug!(recipe = name, "recipe already present");
            return Ok(false);
        }
        self.recipes.insert(name.to_string(), Recipe::default());
        debug!(recipe = name, "added recipe");
        Ok(true)
    }

    /// Rename a recipe, keeping its ingredients.
    pub fn rename_recipe(&mut self, old: &str, new: &str) -> Result<()> {
        let new = checked_name("recipe", new)?;
        if new == old.trim() {
            return self.recipe(new).map(|_| ());
        }
        if self.recipes.contains_key(new) {
            return Err(Box::new(Error::RecipeExists {
                name: new.to_string(),
            }));
        }
        let recipe = self
            .recipes
            .remove(old.trim())
            .ok_or_else(|| Error::recipe_not_found(old.trim()))?;
        self.recipes.insert(new.to_string(), recipe);
        debug!(from = old.trim(), to = new, "renamed recipe");
        Ok(())
    }

    /// Remove a recipe together with all of its ingredient lines.
    pub fn remove_recipe(&mut self, name: &str) -> Result<Recipe> {
        let recipe = self
            .recipes
            .remove(name.trim())
            .ok_or_else(|| Error::recipe_not_found(name.trim()))?;
        debug!(recipe = name.trim(), lines = recipe.ingredients.len(), "removed recipe");
        Ok(recipe)
    }

    /// Insert an ingredient line, or replace the amount of the line with the
    /// same name and unit. Returns the previous amount when replacing.
    pub fn set_ingredient(
        &mut self,
        recipe: &str,
        name: &str,
        unit: Unit,
        amount: f64,
    ) -> Result<Option<f64>> {
        let name = checked_name("ingredient", name)?;
        if !amount.is_finite() {
            return Err(Box::new(Error::InvalidAmount {
                name: name.to_string(),
                amount,
            }));
        }

        let entry = self.recipe_mut(recipe)?;
        let existing = entry
            .ingredients
            .iter_mut()
            .find(|line| line.name == name && line.unit == unit);

        let previous = match existing {
            Some(line) => Some(std::mem::replace(&mut line.amount, amount)),
            None => {
                entry
                    .ingredients
                    .push(IngredientLine::new(name, unit.clone(), amount));
                None
            }
        };
        debug!(
            recipe = recipe.trim(),
            ingredient = name,
            unit = %unit,
            amount,
            replaced = previous.is_some(),
            "set ingredient"
        );
        Ok(previous)
    }

    /// Remove the line identified by name and unit from a recipe.
    pub fn remove_ingredient(
        &mut self,
        recipe: &str,
        name: &str,
        unit: &Unit,
    ) -> Result<IngredientLine> {
        let name = name.trim();
        let entry = self.recipe_mut(recipe)?;
        let index = entry
            .ingredients
            .iter()
            .position(|line| line.name == name && line.unit == *unit)
            .ok_or_else(|| {
                Box::new(Error::IngredientNotFound {
                    recipe: recipe.trim().to_string(),
                    name: name.to_string(),
                    unit: unit.to_string(),
                })
            })?;
        let removed = entry.ingredients.remove(index);
        debug!(
            recipe = recipe.trim(),
            ingredient = name,
            unit = %unit,
            "removed ingredient"
        );
        Ok(removed)
    }

    /// The lines of a recipe, ordered by ingredient name.
    pub fn ingredients(&self, recipe: &str) -> Result<Vec<&IngredientLine>> {
        let mut lines: Vec<&IngredientLine> = self.recipe(recipe)?.ingredients.iter().collect();
        lines.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(lines)
    }

    /// Every distinct ingredient name across all recipes, sorted.
    pub fn ingredient_names(&self) -> Vec<&str> {
        self.recipes
            .values()
            .flat_map(|recipe| recipe.ingredients.iter())
            .map(|line| line.name.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Known ingredient names starting with `prefix`, ignoring case.
    ///
    /// An empty prefix yields no suggestions.
    pub fn suggest_ingredients(&self, prefix: &str) -> Vec<&str> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let prefix = prefix.to_lowercase();
        self.ingredient_names()
            .into_iter()
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .collect()
    }

    /// Resolve `(recipe name, multiplier)` pairs into aggregation input.
    pub fn selection(&self, entries: &[(String, f64)]) -> Result<Vec<BakeSelection>> {
        entries
            .iter()
            .map(|(name, multiplier)| -> Result<BakeSelection> {
                let recipe = self.recipe(name)?;
                Ok(BakeSelection::new(recipe.ingredients.clone(), *multiplier))
            })
            .collect()
    }
}

fn checked_name<'a>(kind: &str, name: &'a str) -> Result<&'a str> {
    let trimmed = name.trim();
    match validate_name(trimmed) {
        Some(reason) => Err(Error::invalid_name(kind, name, reason)),
        None => Ok(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn sample() -> Cookbook {
        Cookbook::from_str(
            r#"
            [recipes.Vanillekipferl]
            ingredients = [
              { name = "Mehl", unit = "gram", amount = 280.0 },
              { name = "Butter", unit = "gram", amount = 210.0 },
              { name = "Vanillezucker", unit = "teaspoon-solid", amount = 2.0 },
            ]

            [recipes.Zimtsterne]
            ingredients = [
              { name = "Zucker", unit = "kilogram", amount = 0.25 },
              { name = "mandeln", unit = "gram", amount = 300.0 },
            ]
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_add_recipe_trims_and_ignores_duplicates() {
        let mut cookbook = sample();
        assert!(cookbook.add_recipe("  Spritzgebäck ").unwrap());
        assert!(!cookbook.add_recipe("Spritzgebäck").unwrap());
        assert!(cookbook.recipes.contains_key("Spritzgebäck"));
    }

    #[test]
    fn test_add_recipe_rejects_blank_name() {
        let mut cookbook = sample();
        let err = cookbook.add_recipe("   ").unwrap_err();
        assert!(matches!(*err, Error::InvalidName { .. }));
    }

    #[test]
    fn test_recipe_names_sorted() {
        let mut cookbook = sample();
        cookbook.add_recipe("Anisplätzchen").unwrap();
        assert_eq!(
            cookbook.recipe_names(),
            vec!["Anisplätzchen", "Vanillekipferl", "Zimtsterne"]
        );
    }

    #[test]
    fn test_rename_recipe() {
        let mut cookbook = sample();
        cookbook.rename_recipe("Zimtsterne", "Zimtsterne (glutenfrei)").unwrap();
        assert!(!cookbook.recipes.contains_key("Zimtsterne"));
        assert_eq!(
            cookbook.recipe("Zimtsterne (glutenfrei)").unwrap().ingredients.len(),
            2
        );
    }

    #[test]
    fn test_rename_recipe_to_same_name() {
        let mut cookbook = sample();
        cookbook.rename_recipe("Zimtsterne", " Zimtsterne ").unwrap();
        assert_eq!(cookbook.recipe("Zimtsterne").unwrap().ingredients.len(), 2);

        let err = cookbook.rename_recipe("Printen", "Printen").unwrap_err();
        assert!(matches!(*err, Error::RecipeNotFound { .. }));
    }

    #[test]
    fn test_rename_recipe_conflicts() {
        let mut cookbook = sample();
        let err = cookbook
            .rename_recipe("Zimtsterne", "Vanillekipferl")
            .unwrap_err();
        assert!(matches!(*err, Error::RecipeExists { .. }));

        let err = cookbook.rename_recipe("Lebkuchen", "Printen").unwrap_err();
        assert!(matches!(*err, Error::RecipeNotFound { .. }));
    }

    #[test]
    fn test_remove_recipe_drops_lines() {
        let mut cookbook = sample();
        let removed = cookbook.remove_recipe("Zimtsterne").unwrap();
        assert_eq!(removed.ingredients.len(), 2);
        assert!(!cookbook.ingredient_names().contains(&"mandeln"));
    }

    #[test]
    fn test_set_ingredient_inserts_then_replaces() {
        let mut cookbook = sample();
        let first = cookbook
            .set_ingredient("Zimtsterne", " Zimt ", Unit::TeaspoonSolid, 2.0)
            .unwrap();
        assert_eq!(first, None);

        let second = cookbook
            .set_ingredient("Zimtsterne", "Zimt", Unit::TeaspoonSolid, 3.0)
            .unwrap();
        assert_eq!(second, Some(2.0));

        let recipe = cookbook.recipe("Zimtsterne").unwrap();
        assert_eq!(recipe.find("Zimt", &Unit::TeaspoonSolid).unwrap().amount, 3.0);
        assert_eq!(recipe.ingredients.len(), 3);
    }

    #[test]
    fn test_set_ingredient_same_name_other_unit_adds_line() {
        let mut cookbook = sample();
        cookbook
            .set_ingredient("Zimtsterne", "Zucker", Unit::Gram, 50.0)
            .unwrap();
        assert_eq!(cookbook.recipe("Zimtsterne").unwrap().ingredients.len(), 3);
    }

    #[test]
    fn test_set_ingredient_errors() {
        let mut cookbook = sample();
        let err = cookbook
            .set_ingredient("Lebkuchen", "Honig", Unit::Gram, 1.0)
            .unwrap_err();
        assert!(matches!(*err, Error::RecipeNotFound { .. }));

        let err = cookbook
            .set_ingredient("Zimtsterne", "Honig", Unit::Gram, f64::NAN)
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidAmount { .. }));

        let err = cookbook
            .set_ingredient("Zimtsterne", "", Unit::Gram, 1.0)
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidName { .. }));
    }

    #[test]
    fn test_remove_ingredient() {
        let mut cookbook = sample();
        let removed = cookbook
            .remove_ingredient("Zimtsterne", "Zucker", &Unit::Kilogram)
            .unwrap();
        assert_eq!(removed.amount, 0.25);

        let err = cookbook
            .remove_ingredient("Zimtsterne", "Zucker", &Unit::Kilogram)
            .unwrap_err();
        assert!(matches!(*err, Error::IngredientNotFound { .. }));
    }

    #[test]
    fn test_ingredients_sorted_by_name() {
        let cookbook = sample();
        let names: Vec<&str> = cookbook
            .ingredients("Vanillekipferl")
            .unwrap()
            .iter()
            .map(|line| line.name.as_str())
            .collect();
        assert_eq!(names, vec!["Butter", "Mehl", "Vanillezucker"]);
    }

    #[test]
    fn test_ingredient_names_distinct() {
        let mut cookbook = sample();
        cookbook
            .set_ingredient("Zimtsterne", "Butter", Unit::Gram, 10.0)
            .unwrap();
        assert_eq!(
            cookbook.ingredient_names(),
            vec!["Butter", "Mehl", "Vanillezucker", "Zucker", "mandeln"]
        );
    }

    #[test]
    fn test_suggest_ingredients_case_insensitive() {
        let cookbook = sample();
        assert_eq!(cookbook.suggest_ingredients("m"), vec!["Mehl", "mandeln"]);
        assert_eq!(cookbook.suggest_ingredients("VAN"), vec!["Vanillezucker"]);
        assert!(cookbook.suggest_ingredients("").is_empty());
        assert!(cookbook.suggest_ingredients("x").is_empty());
    }

    #[test]
    fn test_selection() {
        let cookbook = sample();
        let selection = cookbook
            .selection(&[("Zimtsterne".to_string(), 2.0)])
            .unwrap();
        assert_eq!(selection.len(), 1);
        assert_eq!(selection[0].multiplier, 2.0);
        assert_eq!(selection[0].lines.len(), 2);

        let err = cookbook
            .selection(&[("Lebkuchen".to_string(), 1.0)])
            .unwrap_err();
        assert!(matches!(*err, Error::RecipeNotFound { .. }));
    }
}
