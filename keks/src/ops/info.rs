//! Info operation - cookbook statistics.

use std::{collections::BTreeMap, path::Path};

use keks_cookbook::Cookbook;

use crate::reports::{InfoReport, Stats};

/// Execute the info operation.
///
/// Collects statistics about the recipes and units in the cookbook.
pub fn info(cookbook: &Cookbook, path: &Path) -> InfoReport {
    let mut units: BTreeMap<String, usize> = BTreeMap::new();
    let mut stats = Stats {
        recipes: cookbook.recipes.len(),
        ..Stats::default()
    };

    for recipe in cookbook.recipes.values() {
        if recipe.ingredients.is_empty() {
            stats.empty_recipes += 1;
        }
        for line in &recipe.ingredients {
            stats.lines += 1;
            *units.entry(line.unit.to_string()).or_default() += 1;
            if !line.unit.is_known() {
                stats.free_form_lines += 1;
            }
        }
    }
    stats.ingredients = cookbook.ingredient_names().len();

    InfoReport {
        path: std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()),
        title: cookbook.export.title.clone(),
        stats,
        units: units.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_counts() {
        let cookbook: Cookbook = r#"
            [recipes.Hefezopf]
            ingredients = [
              { name = "Mehl", unit = "gram", amount = 500.0 },
              { name = "Hefe", unit = "Würfel", amount = 1.0 },
            ]

            [recipes."Spritzgebäck"]
            ingredients = [{ name = "Mehl", unit = "kilogram", amount = 0.375 }]

            [recipes.Leer]
            "#
        .parse()
        .unwrap();

        let report = info(&cookbook, Path::new("recipes.toml"));

        assert_eq!(report.title, "Einkaufsliste");
        assert_eq!(report.stats.recipes, 3);
        assert_eq!(report.stats.empty_recipes, 1);
        assert_eq!(report.stats.lines, 3);
        assert_eq!(report.stats.ingredients, 2);
        assert_eq!(report.stats.free_form_lines, 1);
        assert_eq!(
            report.units,
            vec![
                ("Würfel".to_string(), 1),
                ("gram".to_string(), 1),
                ("kilogram".to_string(), 1),
            ]
        );
    }
}
