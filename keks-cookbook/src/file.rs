use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Cookbook, Error, Result, serialize::to_formatted_string};

/// Represents a recipes.toml file with both raw content and parsed cookbook.
pub struct CookbookFile {
    path: PathBuf,
    content: String,
    cookbook: Cookbook,
}

impl CookbookFile {
    /// Open and parse a recipes.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let cookbook = Cookbook::from_str_with_filename(&content, &filename)?;
        debug!(
            path = %path.display(),
            recipes = cookbook.recipes.len(),
            "opened cookbook"
        );

        Ok(Self {
            path,
            content,
            cookbook,
        })
    }

    /// Create a new, empty cookbook at `path`. Fails if the file exists.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            return Err(Box::new(Error::AlreadyExists { path }));
        }

        let cookbook = Cookbook::default();
        let file = Self {
            content: to_formatted_string(&cookbook)?,
            path,
            cookbook,
        };
        file.save()?;
        Ok(file)
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed cookbook.
    pub fn cookbook(&self) -> &Cookbook {
        &self.cookbook
    }

    /// Update content and re-parse the cookbook.
    pub fn set_content(&mut self, content: String) -> Result<()> {
        let filename = self.path.display().to_string();
        let cookbook = Cookbook::from_str_with_filename(&content, &filename)?;
        self.content = content;
        self.cookbook = cookbook;
        Ok(())
    }

    /// Apply an edit to a copy of the cookbook and adopt it in canonical form.
    ///
    /// Nothing changes if the edit or the re-parse fails. Call [`save`](Self::save)
    /// to write the result to disk.
    pub fn edit<T>(&mut self, f: impl FnOnce(&mut Cookbook) -> Result<T>) -> Result<T> {
        let mut cookbook = self.cookbook.clone();
        let value = f(&mut cookbook)?;
        let content = to_formatted_string(&cookbook)?;
        self.set_content(content)?;
        Ok(value)
    }

    /// The content this file would have after `keks fmt`.
    pub fn to_formatted_string(&self) -> Result<String> {
        to_formatted_string(&self.cookbook)
    }

    /// Save the current content to disk.
    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, &self.content).map_err(|e| {
            Box::new(Error::Write {
                path: self.path.clone(),
                source: e,
            })
        })?;
        debug!(path = %self.path.display(), bytes = self.content.len(), "saved cookbook");
        Ok(())
    }
}
