use thiserror::Error;
use veneer_theme::SchemaError;

/// Errors surfaced while resolving a component's style.
///
/// Prop conflicts are caught at the prop-validation boundary, before any
/// layer runs; schema errors propagate from the token store when an active
/// layer needs a token the theme does not define.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("the `{first}` and `{second}` props cannot be used at the same time")]
    PropConflict {
        first: &'static str,
        second: &'static str,
    },
}
