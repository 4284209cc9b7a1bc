//! Rendering paginated documents to text or JSON.

use std::{fmt, path::Path, str::FromStr};

use crate::{Document, Error, Result};

/// Page separator in text output.
pub const FORM_FEED: &str = "\x0c";

/// Output format of an exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Plain text, pages separated by form feeds.
    #[default]
    Text,
    /// Pages with positioned lines as JSON.
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Json => "json",
        }
    }

    /// Pick the format from a file extension. Anything but `.json` is text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ExportFormat::Json,
            _ => ExportFormat::Text,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "unknown format '{}', expected 'text' or 'json'",
                s
            )),
        }
    }
}

impl Document {
    /// Render every page as plain text, one line per row.
    pub fn render_text(&self) -> String {
        let pages: Vec<String> = self
            .pages
            .iter()
            .map(|page| {
                page.lines
                    .iter()
                    .map(|line| format!("{}\n", line.text))
                    .collect()
            })
            .collect();
        pages.join(FORM_FEED)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Json)
    }

    /// Render in the given format.
    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Text => Ok(self.render_text()),
            ExportFormat::Json => self.to_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{PageLayout, paginate};

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("TEXT".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("liste.json")),
            ExportFormat::Json
        );
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("liste.JSON")),
            ExportFormat::Json
        );
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("liste.txt")),
            ExportFormat::Text
        );
        assert_eq!(
            ExportFormat::from_path(&PathBuf::from("liste")),
            ExportFormat::Text
        );
    }

    #[test]
    fn test_render_text_single_page() {
        let doc = paginate("Einkaufsliste", ["- 250.0 gram Mehl"], &PageLayout::a4());
        assert_eq!(doc.render_text(), "Einkaufsliste\n- 250.0 gram Mehl\n");
    }

    #[test]
    fn test_render_text_separates_pages() {
        let lines: Vec<String> = (1..=37).map(|i| format!("- {}.0 count Ei", i)).collect();
        let text = paginate("Einkaufsliste", lines, &PageLayout::a4()).render_text();

        let pages: Vec<&str> = text.split(FORM_FEED).collect();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].starts_with("Einkaufsliste\n"));
        assert_eq!(pages[1], "- 37.0 count Ei\n");
    }

    #[test]
    fn test_to_json_contains_positions() {
        let doc = paginate("Einkaufsliste", ["- 3.0 count Ei"], &PageLayout::a4());
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();

        assert_eq!(value["title"], "Einkaufsliste");
        assert_eq!(value["pages"][0]["number"], 1);
        assert_eq!(value["pages"][0]["lines"][1]["text"], "- 3.0 count Ei");
        assert_eq!(value["pages"][0]["lines"][1]["x"], 50.0);
    }
}
