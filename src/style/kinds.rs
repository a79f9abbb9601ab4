use enum_assoc::Assoc;
use veneer_theme::{Px, Theme, TypeScale};

/// Spacing-scale tokens that resolve to theme-defined px values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> Px)]
pub enum SpacingKind {
    #[assoc(resolve = theme.spacings.bit)]
    Bit,
    #[assoc(resolve = theme.spacings.byte)]
    Byte,
    #[assoc(resolve = theme.spacings.kilo)]
    Kilo,
    #[assoc(resolve = theme.spacings.mega)]
    Mega,
    #[assoc(resolve = theme.spacings.giga)]
    Giga,
    #[assoc(resolve = theme.spacings.tera)]
    Tera,
    #[assoc(resolve = theme.spacings.peta)]
    Peta,
    #[assoc(resolve = theme.spacings.exa)]
    Exa,
    #[assoc(resolve = theme.spacings.zetta)]
    Zetta,
}

/// Body-text scales that resolve to theme-defined font-size / line-height
/// pairs.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn resolve(&self, theme: &Theme) -> TypeScale)]
pub enum TextKind {
    #[assoc(resolve = theme.typography.text.kilo)]
    Kilo,
    #[assoc(resolve = theme.typography.text.mega)]
    Mega,
    #[assoc(resolve = theme.typography.text.giga)]
    Giga,
}
