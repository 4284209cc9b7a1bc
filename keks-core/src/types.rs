use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Unit, amount::format_amount};

/// One `(name, unit, amount)` row of a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    pub unit: Unit,
    pub amount: f64,
}

impl IngredientLine {
    pub fn new(name: impl Into<String>, unit: impl Into<Unit>, amount: f64) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            amount,
        }
    }
}

/// The ingredient lines of one recipe together with how many batches to make.
#[derive(Debug, Clone, PartialEq)]
pub struct BakeSelection {
    pub lines: Vec<IngredientLine>,
    pub multiplier: f64,
}

impl BakeSelection {
    pub fn new(lines: Vec<IngredientLine>, multiplier: f64) -> Self {
        Self { lines, multiplier }
    }
}

/// A consolidated shopping-list row: total amount in a canonical unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingListEntry {
    pub name: String,
    pub amount: f64,
    pub unit: Unit,
}

impl ShoppingListEntry {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<Unit>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }

    /// Render as a shopping-list line: `- {amount} {unit} {name}`.
    pub fn line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ShoppingListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} {} {}",
            format_amount(self.amount),
            self.unit,
            self.name
        )
    }
}
