//! Info command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from cookbook info.
#[derive(Debug)]
pub struct InfoReport {
    /// Cookbook file path.
    pub path: PathBuf,
    /// Heading of exported lists.
    pub title: String,
    /// Recipe and ingredient statistics.
    pub stats: Stats,
    /// Number of ingredient lines per unit label.
    pub units: Vec<(String, usize)>,
}

/// Cookbook statistics.
#[derive(Debug, Default)]
pub struct Stats {
    /// Number of recipes.
    pub recipes: usize,
    /// Recipes without any ingredient lines.
    pub empty_recipes: usize,
    /// Ingredient lines across all recipes.
    pub lines: usize,
    /// Distinct ingredient names.
    pub ingredients: usize,
    /// Lines whose unit is not in the conversion table.
    pub free_form_lines: usize,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();

        out.preformatted(&format!("  Cookbook    {}", self.path.display()));
        out.preformatted(&format!("  Title       {}", self.title));
        out.newline();

        out.preformatted("  Statistics");
        out.preformatted("  ──────────");
        let empty = if self.stats.empty_recipes > 0 {
            format!(" ({} empty)", self.stats.empty_recipes)
        } else {
            String::new()
        };
        out.preformatted(&format!("  Recipes     {}{}", self.stats.recipes, empty));
        out.preformatted(&format!("  Lines       {}", self.stats.lines));
        out.preformatted(&format!("  Ingredients {}", self.stats.ingredients));
        out.newline();

        if !self.units.is_empty() {
            out.preformatted("  Units");
            out.preformatted("  ─────");
            for (unit, count) in &self.units {
                out.preformatted(&format!("  {:<18} {}", unit, count));
            }
            out.newline();
        }

        if self.stats.free_form_lines > 0 {
            out.warning(&format!(
                "{} lines use units outside the conversion table",
                self.stats.free_form_lines
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let report = InfoReport {
            path: PathBuf::from("/home/keks/recipes.toml"),
            title: "Einkaufsliste".to_string(),
            stats: Stats {
                recipes: 2,
                empty_recipes: 1,
                lines: 3,
                ingredients: 2,
                free_form_lines: 1,
            },
            units: vec![("Würfel".to_string(), 1), ("gram".to_string(), 2)],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(out.lines.contains(&"  Recipes     2 (1 empty)".to_string()));
        assert!(out.lines.contains(&"  gram               2".to_string()));
        assert_eq!(
            out.lines.last().unwrap(),
            "[warning] 1 lines use units outside the conversion table"
        );
    }
}
