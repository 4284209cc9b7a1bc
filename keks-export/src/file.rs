use std::path::Path;

use tracing::{debug, info};

use crate::{Document, Error, ExportFormat, PageLayout, Result, paginate};

/// Write `content` to `path`, creating parent directories and overwriting any existing file.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, content).map_err(io_error)?;
    debug!(path = %path.display(), bytes = content.len(), "wrote document");
    Ok(())
}

/// Paginate `lines` under `title` and write them to `path`.
///
/// Returns `None` without touching the file system when there are no lines.
pub fn export_lines<I, S>(
    path: &Path,
    title: &str,
    lines: I,
    format: ExportFormat,
    layout: &PageLayout,
) -> Result<Option<Document>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let document = paginate(title, lines, layout);
    if document.line_count() == 0 {
        debug!(path = %path.display(), "nothing to export");
        return Ok(None);
    }

    write_document(path, &document.render(format)?)?;
    info!(
        path = %path.display(),
        %format,
        pages = document.pages.len(),
        lines = document.line_count(),
        "exported shopping list"
    );
    Ok(Some(document))
}
