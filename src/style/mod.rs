//! The variant style resolver core.
//!
//! A component's visual rules are an ordered list of layer producers, each a
//! pure function `(theme, props) -> Option<StyleLayer>`. Active layers are
//! collected into a [`StyleDeclaration`] and merged positionally: later
//! layers override earlier ones per property, both at the top level and
//! inside each pseudo-state block.

mod declaration;
pub use declaration::*;

mod kinds;
pub use kinds::*;

mod resolve;
pub use resolve::*;
