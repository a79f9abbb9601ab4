use veneer_theme::Px;

use crate::style::{PseudoState, StyleLayer};

/// The final overlay applied to any disabled control: a fixed opacity
/// reduction plus interaction suppression. It only defines a disabled
/// pseudo-state block, so base properties of earlier layers survive.
pub(crate) fn disabled_overlay(label: impl Into<String>) -> StyleLayer {
    StyleLayer::new(label)
        .pseudo_prop(PseudoState::Disabled, "opacity", "0.4")
        .pseudo_prop(PseudoState::Disabled, "pointer-events", "none")
}

/// Formats a vertical/horizontal padding pair as a shorthand value.
pub(crate) fn padding_shorthand(vertical: Px, horizontal: Px) -> String {
    format!("{vertical} {horizontal}")
}
