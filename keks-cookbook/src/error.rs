use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for cookbook operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the cookbook content and filename so diagnostics can point into
/// the file that produced them.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, optionally pointing at a span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create a duplicate ingredient error.
    pub fn duplicate_ingredient_error(
        &self,
        recipe: impl Into<String>,
        name: impl Into<String>,
        unit: impl Into<String>,
        spans: (Option<SourceSpan>, Option<SourceSpan>),
    ) -> Box<Error> {
        Box::new(Error::DuplicateIngredient {
            src: self.named_source(),
            first_span: spans.0,
            second_span: spans.1,
            recipe: recipe.into(),
            name: name.into(),
            unit: unit.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'keks init' to create a new cookbook"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' already exists")]
    #[diagnostic(help("pass a different path with --cookbook"))]
    AlreadyExists { path: PathBuf },

    #[error("failed to parse cookbook")]
    #[diagnostic(code(keks::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize cookbook")]
    Serialize {
        #[source]
        source: toml::ser::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(keks::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' ({unit}) is listed twice in recipe '{recipe}'")]
    #[diagnostic(
        code(keks::duplicate_ingredient),
        help("merge the two amounts into a single line")
    )]
    DuplicateIngredient {
        #[source_code]
        src: NamedSource<String>,
        #[label("first listed here")]
        first_span: Option<SourceSpan>,
        #[label("listed again here")]
        second_span: Option<SourceSpan>,
        recipe: String,
        name: String,
        unit: String,
    },

    #[error("invalid {kind} name '{name}'")]
    #[diagnostic(help("{reason}"))]
    InvalidName {
        kind: String,
        name: String,
        reason: String,
    },

    #[error("invalid amount {amount} for '{name}'")]
    #[diagnostic(help("amounts must be finite numbers"))]
    InvalidAmount { name: String, amount: f64 },

    #[error("recipe '{name}' does not exist")]
    #[diagnostic(help("run 'keks recipe list' to see the available recipes"))]
    RecipeNotFound { name: String },

    #[error("recipe '{name}' already exists")]
    RecipeExists { name: String },

    #[error("recipe '{recipe}' has no ingredient '{name}' measured in {unit}")]
    #[diagnostic(help("run 'keks recipe show {recipe}' to see its ingredients"))]
    IngredientNotFound {
        recipe: String,
        name: String,
        unit: String,
    },
}

impl Error {
    pub fn recipe_not_found(name: impl Into<String>) -> Box<Self> {
        Box::new(Error::RecipeNotFound { name: name.into() })
    }

    pub fn invalid_name(
        kind: impl Into<String>,
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::InvalidName {
            kind: kind.into(),
            name: name.into(),
            reason: reason.into(),
        })
    }
}
