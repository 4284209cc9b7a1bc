//! Core operations.
//!
//! This module contains the business logic for keks commands,
//! separated from CLI argument parsing and output rendering.

pub mod info;
pub mod shop;

pub use info::info;
pub use shop::{SelectionArg, export, shop};
