//! Cookbook model as stored in recipes.toml.

use std::collections::BTreeMap;

use keks_core::IngredientLine;
use serde::Deserialize;

/// Default cookbook location, relative to the working directory.
pub const DEFAULT_FILE_NAME: &str = "recipes.toml";

/// Root of a recipes.toml file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cookbook {
    /// Settings for exported shopping lists
    #[serde(default)]
    pub export: ExportSettings,

    /// Recipes by name
    #[serde(default)]
    pub recipes: BTreeMap<String, Recipe>,
}

/// The `[export]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportSettings {
    /// Heading printed on the first page of an exported list
    #[serde(default = "default_title")]
    pub title: String,
}

pub(crate) fn default_title() -> String {
    "Einkaufsliste".to_string()
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

/// A single recipe.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
}

impl Recipe {
    /// Find the line for an ingredient, identified by name and unit.
    pub fn find(&self, name: &str, unit: &keks_core::Unit) -> Option<&IngredientLine> {
        self.ingredients
            .iter()
            .find(|line| line.name == name && line.unit == *unit)
    }
}
