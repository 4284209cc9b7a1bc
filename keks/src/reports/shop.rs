//! Shop command report data structures.

use std::path::PathBuf;

use keks_core::ShoppingListEntry;
use keks_export::ExportFormat;

use super::output::{Output, Report};

/// Report data from the shop operation.
#[derive(Debug)]
pub struct ShopReport {
    /// Selected recipes with their multipliers, in selection order.
    pub recipes: Vec<(String, f64)>,
    /// The aggregated shopping list.
    pub entries: Vec<ShoppingListEntry>,
    /// Where the list was exported to, if it was.
    pub export: Option<ExportSummary>,
}

/// Result of exporting a shopping list.
#[derive(Debug)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub pages: usize,
    pub lines: usize,
}

impl Report for ShopReport {
    fn render(&self, out: &mut dyn Output) {
        if self.entries.is_empty() {
            out.warning("shopping list is empty");
        }
        for entry in &self.entries {
            out.preformatted(&entry.line());
        }

        if let Some(export) = &self.export {
            let pages = if export.pages == 1 { "page" } else { "pages" };
            out.status(&format!(
                "Exported {} lines ({} {}, {}) to {}",
                export.lines,
                export.pages,
                pages,
                export.format,
                export.path.display()
            ));
        }
    }
}
