//! Recipe command reports.

use keks_cookbook::Cookbook;
use keks_core::IngredientLine;

use super::output::{Output, Report};

/// All recipes with their number of ingredient lines.
#[derive(Debug)]
pub struct RecipeListReport {
    pub recipes: Vec<(String, usize)>,
}

impl RecipeListReport {
    pub fn new(cookbook: &Cookbook) -> Self {
        let recipes = cookbook
            .recipes
            .iter()
            .map(|(name, recipe)| (name.clone(), recipe.ingredients.len()))
            .collect();
        Self { recipes }
    }
}

impl Report for RecipeListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.recipes.is_empty() {
            out.status("No recipes defined");
            return;
        }

        out.section("Recipes");
        for (name, lines) in &self.recipes {
            let noun = if *lines == 1 { "ingredient" } else { "ingredients" };
            out.list_item(&format!("{} ({} {})", name, lines, noun));
        }
    }
}

/// The ingredient lines of one recipe, ordered by name.
#[derive(Debug)]
pub struct RecipeReport<'a> {
    pub name: &'a str,
    pub lines: Vec<&'a IngredientLine>,
}

impl<'a> RecipeReport<'a> {
    pub fn new(name: &'a str, lines: Vec<&'a IngredientLine>) -> Self {
        Self { name, lines }
    }
}

impl Report for RecipeReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        out.section(self.name);
        if self.lines.is_empty() {
            out.status("No ingredients yet");
        }
        for line in &self.lines {
            out.preformatted(&format!(
                "  {} {} {}",
                keks_core::format_amount(line.amount),
                line.unit,
                line.name
            ));
        }
    }
}
