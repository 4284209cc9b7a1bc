//! Shop operation - aggregate selected recipes into a shopping list.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use keks_cookbook::Cookbook;
use keks_core::aggregate;
use keks_export::{ExportFormat, PageLayout, export_lines};
use tracing::debug;

use crate::reports::{ExportSummary, ShopReport};

/// A recipe picked on the command line, written as `NAME` or `NAME=MULTIPLIER`.
///
/// The multiplier follows the last `=`, so names containing `=` need an explicit
/// multiplier (`Kekse=Mix=1`).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionArg {
    pub recipe: String,
    pub multiplier: f64,
}

impl FromStr for SelectionArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (recipe, multiplier) = match s.rsplit_once('=') {
            Some((recipe, factor)) => (recipe.trim(), parse_multiplier(factor)?),
            None => (s.trim(), 1.0),
        };

        if recipe.is_empty() {
            return Err(format!("missing recipe name in '{}'", s));
        }

        Ok(Self {
            recipe: recipe.to_string(),
            multiplier,
        })
    }
}

/// Parse a multiplier. It has to be a positive, finite number.
fn parse_multiplier(s: &str) -> Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        Ok(_) => Err(format!("multiplier must be greater than zero, got '{}'", s.trim())),
        Err(_) => Err(format!("multiplier must be a number, got '{}'", s.trim())),
    }
}

/// Combine `--all` with explicit picks into `(recipe, multiplier)` pairs.
///
/// With `all`, every recipe starts at multiplier 1 in name order. Explicit picks
/// override the multiplier of a recipe already present and are appended otherwise;
/// a recipe named twice keeps the last multiplier.
pub fn resolve_selection(
    cookbook: &Cookbook,
    picks: &[SelectionArg],
    all: bool,
) -> Vec<(String, f64)> {
    let mut selection: IndexMap<String, f64> = IndexMap::new();

    if all {
        for name in cookbook.recipe_names() {
            selection.insert(name.to_string(), 1.0);
        }
    }
    for pick in picks {
        selection.insert(pick.recipe.clone(), pick.multiplier);
    }

    selection.into_iter().collect()
}

/// Execute the shop operation.
///
/// Unknown recipe names are reported as errors before anything is aggregated.
pub fn shop(
    cookbook: &Cookbook,
    picks: &[SelectionArg],
    all: bool,
) -> keks_cookbook::Result<ShopReport> {
    let recipes = resolve_selection(cookbook, picks, all);
    let selection = cookbook.selection(&recipes)?;
    let entries = aggregate(&selection);

    debug!(
        recipes = recipes.len(),
        entries = entries.len(),
        "aggregated shopping list"
    );

    Ok(ShopReport {
        recipes,
        entries,
        export: None,
    })
}

/// Write the shopping list of `report` to `path`, in the format its extension implies.
///
/// Returns `None` if the list is empty; nothing is written then.
pub fn export(
    report: &ShopReport,
    title: &str,
    path: &Path,
) -> keks_export::Result<Option<ExportSummary>> {
    let format = ExportFormat::from_path(path);
    let lines = report.entries.iter().map(|entry| entry.line());
    let document = export_lines(path, title, lines, format, &PageLayout::a4())?;

    Ok(document.map(|doc| ExportSummary {
        path: path.to_path_buf(),
        format,
        pages: doc.pages.len(),
        lines: doc.line_count(),
    }))
}
