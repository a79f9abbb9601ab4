use thiserror::Error;

/// Raised when a candidate theme does not satisfy the token schema.
///
/// Validation stops at the first offending token, so `path` always names
/// a single token (e.g. `colors.p500` or `spacings.bit`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("missing required theme token at `{path}` (expected {expected})")]
    Missing { path: String, expected: &'static str },

    #[error("malformed theme token at `{path}` (expected {expected})")]
    Malformed { path: String, expected: &'static str },

    #[error("theme is not valid JSON: {0}")]
    Json(String),
}

impl SchemaError {
    pub fn missing(path: impl Into<String>, expected: &'static str) -> Self {
        Self::Missing {
            path: path.into(),
            expected,
        }
    }

    pub fn malformed(path: impl Into<String>, expected: &'static str) -> Self {
        Self::Malformed {
            path: path.into(),
            expected,
        }
    }

    /// The dot-separated path of the token that failed, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Missing { path, .. } | Self::Malformed { path, .. } => Some(path),
            Self::Json(_) => None,
        }
    }
}
