//! The theme token store: an immutable, schema-validated mapping of design
//! tokens (colors, spacing scale, radii, typography) consumed by every style
//! computation.
//!
//! A theme is accepted exactly once, at startup, through the explicit
//! validation pass ([`Theme::from_value`] or [`Theme::from_str`]); required
//! tokens that are missing or malformed fail fast with a [`SchemaError`]
//! naming the offending path. The accepted [`Theme`] is then shared by
//! reference and never mutated, so style resolution stays a pure function of
//! `(theme, props)` and is safe to run from any number of render passes
//! without coordination.

mod schema;
pub use schema::*;

mod deserializers;

mod error;
pub use error::*;

mod px;
pub use px::*;

mod validate;
pub use validate::validate;
