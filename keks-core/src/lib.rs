//! Core types for keks.
//!
//! This crate holds the fixed unit table and the aggregation engine that turns
//! a selection of recipes into a consolidated shopping list. Everything here is
//! pure and synchronous; storage and presentation live in the other crates.

pub mod aggregate;
pub mod amount;
mod types;
pub mod unit;

pub use aggregate::{Aggregator, aggregate};
pub use amount::{format_amount, round_to};
pub use types::{BakeSelection, IngredientLine, ShoppingListEntry};
pub use unit::{BaseUnit, CONVERSIONS, ConversionRule, Unit, normalize};
