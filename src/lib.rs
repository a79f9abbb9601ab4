//! Veneer: a presentational style-resolution library.
//!
//! Component rule sets turn `(theme, props)` into layered style
//! declarations; the theme token store lives in [`theme`] and is validated
//! once at startup. Rendering the resolved declarations is the hosting
//! application's concern.

pub mod components;

pub mod style;

mod error;
pub use error::*;

pub use veneer_theme as theme;
