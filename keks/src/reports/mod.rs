//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod info;
mod output;
mod recipe;
mod shop;
mod units;

pub use info::{InfoReport, Stats};
pub use output::{Report, TerminalOutput};
pub use recipe::{RecipeListReport, RecipeReport};
pub use shop::{ExportSummary, ShopReport};
pub use units::UnitsReport;
