//! Error types
//!
//! Every fallible engine operation returns [`MorphologyError`]. Bulk operations
//! never propagate per-line failures; they collect them into an import report.

use axum::http::StatusCode;

/// Result type defaulting to [`MorphologyError`].
pub type Result<T, E = MorphologyError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MorphologyError {
    /// The input is not three symbols of the consonant alphabet.
    #[error("invalid root '{root}': {reason}")]
    InvalidRoot { root: String, reason: String },

    /// Malformed pattern name or rule template.
    #[error("invalid pattern '{name}': {reason}")]
    InvalidPattern { name: String, reason: String },

    #[error("invalid word: {0}")]
    InvalidWord(String),

    #[error("root '{0}' already exists")]
    DuplicateRoot(String),

    #[error("pattern '{0}' already exists")]
    DuplicatePattern(String),

    #[error("{kind} '{key}' not found")]
    NotFound { kind: &'static str, key: String },

    /// The clash table forbids this root letter in this pattern slot.
    #[error("root '{root}' cannot take pattern '{pattern}': {reason}")]
    PhonologicalClash {
        root: String,
        pattern: String,
        reason: String,
    },

    #[error("line {line}: {reason}")]
    MalformedImportLine { line: usize, reason: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl MorphologyError {
    pub fn invalid_root(root: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRoot {
            root: root.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_pattern(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub fn root_not_found(root: &str) -> Self {
        Self::NotFound {
            kind: "root",
            key: root.to_string(),
        }
    }

    pub fn pattern_not_found(name: &str) -> Self {
        Self::NotFound {
            kind: "pattern",
            key: name.to_string(),
        }
    }

    pub fn malformed_line(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedImportLine {
            line,
            reason: reason.into(),
        }
    }

    /// Misses and validation failures are expected outcomes; only
    /// [`MorphologyError::Internal`] signals a broken engine.
    pub fn is_expected(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }

    /// HTTP status used when this error reaches the transport layer.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRoot { .. }
            | Self::InvalidPattern { .. }
            | Self::InvalidWord(_)
            | Self::MalformedImportLine { .. } => StatusCode::BAD_REQUEST,
            Self::DuplicateRoot(_) | Self::DuplicatePattern(_) => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::PhonologicalClash { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
