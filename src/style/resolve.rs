use veneer_theme::{SchemaError, Theme};

use super::declaration::{StyleDeclaration, StyleLayer};

/// One entry in a component's ordered rule set.
///
/// A producer is a pure function of `(theme, props)`. Returning `Ok(None)`
/// means the layer's activation predicate did not hold; that is a documented
/// no-op, never an error. Producers only fail when an *active* layer needs a
/// token the store cannot supply.
pub type LayerProducer<P> = fn(&Theme, &P) -> Result<Option<StyleLayer>, SchemaError>;

/// Runs a component's layer producers in their fixed order and collects the
/// active layers into a declaration.
///
/// Precedence lives entirely in the order of `producers`; the merge itself
/// is the positional last-wins rule of [`StyleDeclaration`].
pub fn compose<P>(
    theme: &Theme,
    props: &P,
    producers: &[LayerProducer<P>],
) -> Result<StyleDeclaration, SchemaError> {
    let mut declaration = StyleDeclaration::default();

    for produce in producers {
        if let Some(layer) = produce(theme, props)? {
            declaration.push(layer);
        }
    }

    Ok(declaration)
}
