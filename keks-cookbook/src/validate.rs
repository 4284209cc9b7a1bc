//! Validation context and utilities for cookbook parsing.

use std::{collections::HashSet, sync::Arc};

use keks_core::Unit;
use miette::SourceSpan;

use crate::{Cookbook, Recipe, Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the source content and filename, plus the path of the recipe
/// currently being validated, so nested checks can build precise diagnostics.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn src(&self) -> &str {
        self.source.src()
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path,
        }
    }

    /// Current path joined with dots, e.g. "recipes.Zimtsterne".
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe `kind` relative to the current path for error messages.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Validate a recipe name taken from a `[recipes.<name>]` key.
    pub fn validate_recipe_name(&self, name: &str) -> Result<()> {
        if let Some(reason) = validate_name(name) {
            return Err(self.source.validation_error(
                format!("{}: {}", self.context_for("recipe name"), reason),
                find_recipe_span(self.src(), name),
            ));
        }
        Ok(())
    }

    /// Validate the ingredient lines of one recipe.
    pub fn validate_recipe(&self, name: &str, recipe: &Recipe) -> Result<()> {
        let section = find_recipe_span(self.src(), name)
            .map(|span| span.offset())
            .unwrap_or(0);
        let mut seen: HashSet<(&str, &Unit)> = HashSet::new();

        for line in &recipe.ingredients {
            if let Some(reason) = validate_name(&line.name) {
                return Err(self.source.validation_error(
                    format!("{}: {}", self.context_for("ingredient name"), reason),
                    find_value_span(self.src(), section, &line.name, 0),
                ));
            }

            if !line.amount.is_finite() {
                return Err(self.source.validation_error(
                    format!(
                        "{}: amount of '{}' must be a finite number",
                        self.context_for("ingredient"),
                        line.name
                    ),
                    find_value_span(self.src(), section, &line.name, 0),
                ));
            }

            if !seen.insert((line.name.as_str(), &line.unit)) {
                return Err(self.source.duplicate_ingredient_error(
                    name,
                    &line.name,
                    line.unit.as_str(),
                    (
                        find_value_span(self.src(), section, &line.name, 0),
                        find_value_span(self.src(), section, &line.name, 1),
                    ),
                ));
            }
        }

        Ok(())
    }
}

/// Validate every recipe of a parsed cookbook.
pub(crate) fn validate_cookbook(cookbook: &Cookbook, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    for (name, recipe) in &cookbook.recipes {
        ctx.validate_recipe_name(name)?;

        let recipe_ctx = ctx.push("recipes").push(name);
        recipe_ctx.validate_recipe(name, recipe)?;
    }
    Ok(())
}

/// Check a recipe or ingredient name.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_name(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("name cannot be empty");
    }
    if name.trim() != name {
        return Some("name cannot start or end with whitespace");
    }
    if name.chars().any(char::is_control) {
        return Some("name cannot contain control characters");
    }
    None
}

/// Find the span of a recipe name in a `[recipes.<name>]` header.
pub(crate) fn find_recipe_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        (format!("[recipes.{}]", name), 9usize),
        (format!("[recipes.\"{}\"]", name), 10usize),
        (format!("[recipes.'{}']", name), 10usize),
        (format!("[recipes.{}.", name), 9usize),
        (format!("[recipes.\"{}\".", name), 10usize),
    ];

    for (pattern, skip) in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + skip, name.len())));
        }
    }

    None
}

/// Find the `nth` occurrence of `name = "<value>"` at or after `from`.
pub(crate) fn find_value_span(
    src: &str,
    from: usize,
    value: &str,
    nth: usize,
) -> Option<SourceSpan> {
    let tail = src.get(from..)?;
    let pattern = format!("name = \"{}\"", value);
    let (pos, _) = tail.match_indices(pattern.as_str()).nth(nth)?;
    // skip `name = "`
    Some(SourceSpan::from((from + pos + 8, value.len())))
}
