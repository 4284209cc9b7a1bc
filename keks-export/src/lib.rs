//! Pagination and export of shopping lists.
//!
//! A shopping list is laid out on fixed-size pages with [`paginate`] and
//! written as plain text or JSON with [`export_lines`].

mod error;
mod file;
mod layout;
mod render;

pub use error::{Error, Result};
pub use file::{export_lines, write_document};
pub use layout::{Document, Page, PageLayout, PlacedLine, paginate};
pub use render::{ExportFormat, FORM_FEED};
