//! Cookbook parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{
    Cookbook, DEFAULT_FILE_NAME, Error, Result, error::SourceContext,
    validate::validate_cookbook,
};

impl FromStr for Cookbook {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_cookbook(s, DEFAULT_FILE_NAME)
    }
}

impl Cookbook {
    /// Parse a recipes.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_cookbook(&content, &path.display().to_string())
    }

    /// Parse cookbook content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_cookbook(content, filename)
    }
}

/// Parse and validate a cookbook.
pub fn parse_cookbook(content: &str, filename: &str) -> Result<Cookbook> {
    let source_ctx = SourceContext::new(content, filename);
    let cookbook: Cookbook = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_cookbook(&cookbook, content, filename)?;
    Ok(cookbook)
}
