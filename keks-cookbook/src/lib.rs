//! Recipe storage for keks.
//!
//! A cookbook is a TOML file (recipes.toml by default) mapping recipe names to
//! their ingredient lines. This crate parses and validates it with span-aware
//! diagnostics, edits it in memory and writes it back in canonical form.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod cookbook;
mod edit;
mod error;
mod file;
mod parse;
mod serialize;
mod validate;

pub use cookbook::{Cookbook, DEFAULT_FILE_NAME, ExportSettings, Recipe};
pub use error::{Error, Result, SourceContext};
pub use file::CookbookFile;
pub use parse::parse_cookbook;
pub use serialize::to_formatted_string;
pub use validate::ParseContext;
