//! Unified error types for hero-scaffold.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while gathering, rendering, or writing scaffolding.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // --- Splitting ---

    /// The literal anchor does not occur in the searched text.
    #[error("could not find anchor `{anchor}`")]
    AnchorNotFound { anchor: String },

    /// Split anchors must be non-empty literals.
    #[error("split anchor must not be empty")]
    EmptyAnchor,

    /// A matcher's anchors no longer line up with the file it edits.
    #[error("{path} does not match the expected layout")]
    Matcher {
        path: PathBuf,
        #[source]
        source: Box<ScaffoldError>,
    },

    // --- Templates ---

    /// The template references a variable that was never supplied.
    #[error("template placeholder `{0}` is not defined")]
    UndefinedPlaceholder(String),

    /// Handlebars template rendering failed for any other reason (e.g. malformed syntax).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    /// A segment name is bound twice, or collides with a naming or configured variable.
    #[error("variable `{0}` is defined more than once")]
    VariableConflict(String),

    // --- Naming ---

    /// A user-supplied naming variable failed validation.
    #[error("invalid {variable} `{value}`: {reason}")]
    InvalidInputVariable {
        variable: &'static str,
        value: String,
        reason: String,
    },

    // --- Catalog / project ---

    /// The requested pattern is not part of the catalog.
    #[error("unknown pattern: {0} (supported: {1})")]
    UnknownPattern(String, String),

    /// A file the pattern would create already exists.
    #[error("refusing to overwrite existing file: {0}")]
    FileExists(PathBuf),

    /// A new file would be created below something that is not a directory.
    #[error("cannot create files below {0}: not a directory")]
    NotADirectory(PathBuf),

    /// Writing a planned file failed; files created by the run were removed again.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file a matcher edits is missing from the workspace.
    #[error("matcher target not found: {0}")]
    TargetNotFound(PathBuf),

    // --- Configuration ---

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScaffoldError {
    /// The anchor literal behind this error, looking through [`ScaffoldError::Matcher`].
    pub fn missing_anchor(&self) -> Option<&str> {
        match self {
            Self::AnchorNotFound { anchor } => Some(anchor),
            Self::Matcher { source, .. } => source.missing_anchor(),
            _ => None,
        }
    }
}

/// Alias for `Result<T, ScaffoldError>`.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
