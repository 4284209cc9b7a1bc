//! Serialization support for writing recipes.toml files.
//!
//! Every edit is written back through these types, so the file on disk is
//! always in canonical form: export settings first, recipes sorted by name,
//! ingredients sorted by name within a recipe.

use std::collections::BTreeMap;

use keks_core::{IngredientLine, Unit};
use serde::Serialize;

use crate::{Cookbook, Error, ExportSettings, Recipe, Result, cookbook::default_title};

/// Serializable cookbook for canonical TOML output.
#[derive(Debug, Serialize)]
pub struct SerializableCookbook<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<SerializableExport<'a>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub recipes: BTreeMap<&'a str, SerializableRecipe<'a>>,
}

#[derive(Debug, Serialize)]
pub struct SerializableExport<'a> {
    pub title: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SerializableRecipe<'a> {
    pub ingredients: Vec<SerializableIngredient<'a>>,
}

#[derive(Debug, Serialize)]
pub struct SerializableIngredient<'a> {
    pub name: &'a str,
    pub unit: &'a Unit,
    pub amount: f64,
}

impl<'a> From<&'a Cookbook> for SerializableCookbook<'a> {
    fn from(cookbook: &'a Cookbook) -> Self {
        Self {
            export: SerializableExport::from_settings(&cookbook.export),
            recipes: cookbook
                .recipes
                .iter()
                .map(|(name, recipe)| (name.as_str(), SerializableRecipe::from(recipe)))
                .collect(),
        }
    }
}

impl<'a> SerializableExport<'a> {
    /// Default settings are omitted from the file.
    fn from_settings(settings: &'a ExportSettings) -> Option<Self> {
        if settings.title == default_title() {
            None
        } else {
            Some(Self {
                title: &settings.title,
            })
        }
    }
}

impl<'a> From<&'a Recipe> for SerializableRecipe<'a> {
    fn from(recipe: &'a Recipe) -> Self {
        let mut ingredients: Vec<SerializableIngredient<'a>> = recipe
            .ingredients
            .iter()
            .map(SerializableIngredient::from)
            .collect();
        ingredients.sort_by(|a, b| a.name.cmp(b.name));
        Self { ingredients }
    }
}

impl<'a> From<&'a IngredientLine> for SerializableIngredient<'a> {
    fn from(line: &'a IngredientLine) -> Self {
        Self {
            name: &line.name,
            unit: &line.unit,
            amount: line.amount,
        }
    }
}

/// Convert a cookbook to a formatted TOML string.
pub fn to_formatted_string(cookbook: &Cookbook) -> Result<String> {
    let serializable = SerializableCookbook::from(cookbook);
    toml::to_string_pretty(&serializable).map_err(|source| Box::new(Error::Serialize { source }))
}
