use veneer_theme::{Px, SchemaError, Theme};

use crate::components::shared::{disabled_overlay, padding_shorthand};
use crate::error::StyleError;
use crate::style::{
    LayerProducer, PseudoState, SpacingKind, StyleDeclaration, StyleLayer, TextKind, compose,
};

/// The button's variant rules. Resolves to a layered declaration in the
/// fixed order base, size, flat, secondary, stretch, disabled.
///
/// Can be styled as a link by passing an `href`; the base layer then uses an
/// inline-level box instead of a block-level one.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    href: Option<String>,
    target: Option<String>,
    disabled: bool,
    flat: bool,
    secondary: bool,
    stretch: bool,
    size: String,
}

/// The explicit defaults table, merged before resolution.
impl Default for Button {
    fn default() -> Self {
        Self {
            href: None,
            target: None,
            disabled: false,
            flat: false,
            secondary: false,
            stretch: false,
            size: Self::MEGA.to_owned(),
        }
    }
}

impl Button {
    pub const KILO: &'static str = "kilo";
    pub const MEGA: &'static str = "mega";
    pub const GIGA: &'static str = "giga";

    pub fn new() -> Self {
        Self::default()
    }

    /// URL the button should lead to. Switches the base layer to an
    /// inline-level box.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Link target. Only meaningful together with `href`; passed through to
    /// the rendering collaborator untouched.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    /// Renders a secondary button. Secondary wins over flat: the two are not
    /// a compound variant.
    pub fn secondary(mut self, secondary: bool) -> Self {
        self.secondary = secondary;
        self
    }

    pub fn stretch(mut self, stretch: bool) -> Self {
        self.stretch = stretch;
        self
    }

    /// Size of the button. Use the [`KILO`](Self::KILO), [`MEGA`](Self::MEGA)
    /// or [`GIGA`](Self::GIGA) constants. An unrecognized size leaves the
    /// padding untouched rather than erroring.
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn resolve(&self, theme: &Theme) -> Result<StyleDeclaration, StyleError> {
        Ok(compose(theme, self, LAYERS)?)
    }
}

const LAYERS: &[LayerProducer<Button>] = &[
    base_layer,
    size_layer,
    flat_layer,
    secondary_layer,
    stretch_layer,
    disabled_layer,
];

/// Selects the padding pair for a size, optionally shrunk on every side.
///
/// The shrink argument carries the focus padding compensation: when a layer
/// grows its border on focus, its focus padding shrinks by the same delta so
/// the control's outer box stays visually stable. Unrecognized sizes yield
/// `None` and the caller drops the property.
fn calculate_padding(theme: &Theme, size: &str, shrink: Px) -> Option<(Px, Px)> {
    let (vertical, horizontal) = match size {
        Button::KILO => (SpacingKind::Bit, SpacingKind::Mega),
        Button::MEGA => (SpacingKind::Byte, SpacingKind::Giga),
        Button::GIGA => (SpacingKind::Kilo, SpacingKind::Tera),
        _ => return None,
    };

    Some((
        vertical.resolve(theme) - shrink,
        horizontal.resolve(theme) - shrink,
    ))
}

/// The border-width increase a layer gains on focus. Derived from the
/// layer's actual border widths so the compensation cannot drift if either
/// width changes.
fn focus_delta(resting: Px, focus: Px) -> Px {
    focus - resting
}

fn base_layer(theme: &Theme, button: &Button) -> Result<Option<StyleLayer>, SchemaError> {
    const RESTING_BORDER: Px = Px(1.);
    const FOCUS_BORDER: Px = Px(2.);

    let colors = &theme.colors;
    let radius = theme.radius("mega")?;
    let text = TextKind::Mega.resolve(theme);

    let display = if button.href.is_some() {
        "inline-block"
    } else {
        "block"
    };

    let mut layer = StyleLayer::new("button")
        .prop("background-color", &colors.p500)
        .prop("border-color", &colors.p700)
        .prop("border-radius", radius.to_string())
        .prop("border-style", "solid")
        .prop("border-width", RESTING_BORDER.to_string())
        .prop("box-shadow", "inset 0 1px 0 1px rgba(255, 255, 255, 0.06)")
        .prop("display", display)
        .prop("color", &colors.button_color)
        .prop("cursor", "pointer")
        .prop("font-weight", &theme.font_weight.bold)
        .prop("width", "auto")
        .prop("height", "auto")
        .prop("text-decoration", "none")
        .prop("font-size", text.font_size.to_string())
        .prop("line-height", text.line_height.to_string())
        .pseudo_prop(PseudoState::Active, "background-color", &colors.p700)
        .pseudo_prop(PseudoState::Active, "border-color", &colors.p900)
        .pseudo_prop(
            PseudoState::Active,
            "box-shadow",
            "inset 0 4px 8px 0 rgba(12, 15, 20, 0.3)",
        )
        .pseudo_prop(
            PseudoState::Active,
            "border-width",
            RESTING_BORDER.to_string(),
        )
        .pseudo_prop(PseudoState::Focus, "border-color", &colors.p700)
        .pseudo_prop(PseudoState::Focus, "border-width", FOCUS_BORDER.to_string())
        .pseudo_prop(PseudoState::Focus, "outline", "0")
        .pseudo_prop(PseudoState::Hover, "background-color", &colors.p700)
        .pseudo_prop(PseudoState::Hover, "border-color", &colors.p900)
        .pseudo_prop(
            PseudoState::Hover,
            "border-width",
            RESTING_BORDER.to_string(),
        );

    if let Some((vertical, horizontal)) = calculate_padding(
        theme,
        &button.size,
        focus_delta(RESTING_BORDER, FOCUS_BORDER),
    ) {
        layer = layer.pseudo_prop(
            PseudoState::Focus,
            "padding",
            padding_shorthand(vertical, horizontal),
        );
    }

    if let Some((vertical, horizontal)) = calculate_padding(theme, &button.size, Px::ZERO) {
        let padding = padding_shorthand(vertical, horizontal);
        layer = layer
            .pseudo_prop(PseudoState::Hover, "padding", padding.clone())
            .pseudo_prop(PseudoState::Active, "padding", padding);
    }

    Ok(Some(layer))
}

fn size_layer(theme: &Theme, button: &Button) -> Result<Option<StyleLayer>, SchemaError> {
    Ok(
        calculate_padding(theme, &button.size, Px::ZERO).map(|(vertical, horizontal)| {
            StyleLayer::new(format!("button--{}", button.size))
                .prop("padding", padding_shorthand(vertical, horizontal))
        }),
    )
}

fn flat_layer(theme: &Theme, button: &Button) -> Result<Option<StyleLayer>, SchemaError> {
    const RESTING_BORDER: Px = Px(0.);
    const FOCUS_BORDER: Px = Px(2.);

    // Flat and secondary are not a compound variant; secondary wins.
    if !button.flat || button.secondary {
        return Ok(None);
    }

    let mut layer = StyleLayer::new("button--flat")
        .prop("border-width", RESTING_BORDER.to_string())
        .prop(
            "box-shadow",
            "0 0 0 1px rgba(12, 15, 20, 0.02), 0 2px 2px 0 rgba(12, 15, 20, 0.06), \
             0 4px 4px 0 rgba(12, 15, 20, 0.06)",
        )
        .pseudo_prop(PseudoState::Active, "background-color", &theme.colors.p900)
        .pseudo_prop(
            PseudoState::Active,
            "box-shadow",
            "0 0 0 1px rgba(12, 15, 20, 0.02), 0 0 1px 0 rgba(12, 15, 20, 0.06), \
             0 2px 2px 0 rgba(12, 15, 20, 0.06)",
        )
        .pseudo_prop(PseudoState::Focus, "border-width", FOCUS_BORDER.to_string())
        .pseudo_prop(
            PseudoState::ActiveFocus,
            "border-width",
            RESTING_BORDER.to_string(),
        )
        .pseudo_prop(
            PseudoState::HoverFocus,
            "border-width",
            RESTING_BORDER.to_string(),
        );

    if let Some((vertical, horizontal)) = calculate_padding(
        theme,
        &button.size,
        focus_delta(RESTING_BORDER, FOCUS_BORDER),
    ) {
        layer = layer.pseudo_prop(
            PseudoState::Focus,
            "padding",
            padding_shorthand(vertical, horizontal),
        );
    }

    if let Some((vertical, horizontal)) = calculate_padding(theme, &button.size, Px::ZERO) {
        let padding = padding_shorthand(vertical, horizontal);
        layer = layer
            .pseudo_prop(PseudoState::ActiveFocus, "padding", padding.clone())
            .pseudo_prop(PseudoState::HoverFocus, "padding", padding);
    }

    Ok(Some(layer))
}

fn secondary_layer(theme: &Theme, button: &Button) -> Result<Option<StyleLayer>, SchemaError> {
    const RESTING_BORDER: Px = Px(0.);
    const FOCUS_BORDER: Px = Px(2.);

    if !button.secondary {
        return Ok(None);
    }

    let colors = &theme.colors;

    let mut layer = StyleLayer::new("button--secondary")
        .prop("background-color", "transparent")
        .prop("border-color", &colors.n900)
        .prop("border-width", RESTING_BORDER.to_string())
        .prop("box-shadow", "none")
        .prop("color", &colors.n700)
        .pseudo_prop(PseudoState::Active, "background-color", "transparent")
        .pseudo_prop(PseudoState::Active, "border-color", &colors.n900)
        .pseudo_prop(
            PseudoState::Active,
            "border-width",
            RESTING_BORDER.to_string(),
        )
        .pseudo_prop(PseudoState::Active, "box-shadow", "none")
        .pseudo_prop(PseudoState::Active, "color", &colors.n900)
        .pseudo_prop(PseudoState::Focus, "border-color", &colors.n900)
        .pseudo_prop(PseudoState::Focus, "border-width", FOCUS_BORDER.to_string())
        .pseudo_prop(PseudoState::Focus, "box-shadow", "none")
        .pseudo_prop(PseudoState::Focus, "color", &colors.n900)
        .pseudo_prop(PseudoState::Hover, "background-color", "transparent")
        .pseudo_prop(
            PseudoState::Hover,
            "border-width",
            RESTING_BORDER.to_string(),
        )
        .pseudo_prop(PseudoState::Hover, "border-color", &colors.n900)
        .pseudo_prop(PseudoState::Hover, "color", &colors.n900)
        .pseudo_prop(PseudoState::HoverFocus, "border-color", &colors.n900)
        .pseudo_prop(
            PseudoState::HoverFocus,
            "border-width",
            FOCUS_BORDER.to_string(),
        )
        .pseudo_prop(PseudoState::HoverFocus, "box-shadow", "none")
        .pseudo_prop(PseudoState::ActiveFocus, "border-color", &colors.n900)
        .pseudo_prop(
            PseudoState::ActiveFocus,
            "border-width",
            FOCUS_BORDER.to_string(),
        )
        .pseudo_prop(PseudoState::ActiveFocus, "box-shadow", "none");

    if let Some((vertical, horizontal)) = calculate_padding(
        theme,
        &button.size,
        focus_delta(RESTING_BORDER, FOCUS_BORDER),
    ) {
        let shrunk = padding_shorthand(vertical, horizontal);
        layer = layer
            .pseudo_prop(PseudoState::Focus, "padding", shrunk.clone())
            .pseudo_prop(PseudoState::HoverFocus, "padding", shrunk.clone())
            .pseudo_prop(PseudoState::ActiveFocus, "padding", shrunk);
    }

    if let Some((vertical, horizontal)) = calculate_padding(theme, &button.size, Px::ZERO) {
        let padding = padding_shorthand(vertical, horizontal);
        layer = layer
            .pseudo_prop(PseudoState::Active, "padding", padding.clone())
            .pseudo_prop(PseudoState::Hover, "padding", padding);
    }

    Ok(Some(layer))
}

fn stretch_layer(_theme: &Theme, button: &Button) -> Result<Option<StyleLayer>, SchemaError> {
    Ok(button.stretch.then(|| {
        StyleLayer::new("button--stretched")
            .prop("width", "100%")
            .prop("display", "block")
    }))
}

fn disabled_layer(_theme: &Theme, button: &Button) -> Result<Option<StyleLayer>, SchemaError> {
    Ok(button.disabled.then(|| disabled_overlay("button--disabled")))
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use super::*;

    fn theme() -> &'static Theme {
        // Theme::DEFAULT re-materializes per use, so tests share one copy.
        static THEME: LazyLock<Theme> = LazyLock::new(|| Theme::DEFAULT.clone());
        &THEME
    }

    fn padding_for(vertical: SpacingKind, horizontal: SpacingKind, shrink: Px) -> String {
        padding_shorthand(
            vertical.resolve(theme()) - shrink,
            horizontal.resolve(theme()) - shrink,
        )
    }

    #[test]
    fn test_size_layer_uses_the_documented_lookup_table() {
        let cases = [
            (Button::KILO, SpacingKind::Bit, SpacingKind::Mega),
            (Button::MEGA, SpacingKind::Byte, SpacingKind::Giga),
            (Button::GIGA, SpacingKind::Kilo, SpacingKind::Tera),
        ];

        for (size, vertical, horizontal) in cases {
            let declaration = Button::new()
                .size(size)
                .flat(true)
                .stretch(true)
                .resolve(theme())
                .unwrap();

            let layer = declaration
                .layer(&format!("button--{size}"))
                .unwrap_or_else(|| panic!("size layer for `{size}` should be active"));
            assert_eq!(
                layer.get("padding"),
                Some(padding_for(vertical, horizontal, Px::ZERO).as_str()),
                "Padding for `{size}` comes from the lookup table, independent of other props"
            );
        }
    }

    #[test]
    fn test_size_defaults_to_mega() {
        let declaration = Button::new().resolve(theme()).unwrap();
        assert_eq!(
            declaration.get("padding"),
            Some(padding_for(SpacingKind::Byte, SpacingKind::Giga, Px::ZERO)),
        );
    }

    #[test]
    fn test_unknown_size_contributes_no_padding() {
        let declaration = Button::new().size("yotta").resolve(theme()).unwrap();

        assert_eq!(
            declaration.get("padding"),
            None,
            "An unknown size is a no-op, not an error"
        );
        assert_eq!(
            declaration.pseudo_get(PseudoState::Focus, "padding"),
            None,
            "Focus compensation is dropped along with the padding"
        );
    }

    #[test]
    fn test_base_layer_display_depends_on_href() {
        let block = Button::new().resolve(theme()).unwrap();
        assert_eq!(block.get("display"), Some("block".to_owned()));

        let inline = Button::new()
            .href("https://example.com")
            .target("_blank")
            .resolve(theme())
            .unwrap();
        assert_eq!(inline.get("display"), Some("inline-block".to_owned()));
    }

    #[test]
    fn test_base_focus_padding_is_compensated_by_one_px() {
        let declaration = Button::new().size(Button::KILO).resolve(theme()).unwrap();
        let base = declaration.layer("button").unwrap();

        assert_eq!(
            base.pseudo_get(PseudoState::Focus, "padding"),
            Some(padding_for(SpacingKind::Bit, SpacingKind::Mega, Px(1.)).as_str()),
            "Base focus grows the border 1px -> 2px, so padding shrinks 1px per side"
        );
        assert_eq!(
            base.pseudo_get(PseudoState::Hover, "padding"),
            Some(padding_for(SpacingKind::Bit, SpacingKind::Mega, Px::ZERO).as_str()),
            "Hover keeps the resting border and the uncompensated padding"
        );
    }

    #[test]
    fn test_flat_giga_scenario() {
        let declaration = Button::new()
            .size(Button::GIGA)
            .flat(true)
            .resolve(theme())
            .unwrap();

        assert_eq!(
            declaration.get("padding"),
            Some(padding_for(SpacingKind::Kilo, SpacingKind::Tera, Px::ZERO)),
            "The giga padding pair should be present"
        );
        assert_eq!(
            declaration.get("border-width"),
            Some("0px".to_owned()),
            "Flat removes the border"
        );

        let box_shadow = declaration.get("box-shadow").unwrap();
        assert_eq!(
            box_shadow.matches("rgba").count(),
            3,
            "Flat has a three-layer box-shadow stack"
        );

        assert_eq!(
            declaration.pseudo_get(PseudoState::Focus, "padding"),
            Some(padding_for(SpacingKind::Kilo, SpacingKind::Tera, Px(2.))),
            "Flat focus grows the border 0px -> 2px, so padding shrinks 2px per side"
        );
    }

    #[test]
    fn test_secondary_dominates_flat() {
        let both = Button::new()
            .flat(true)
            .secondary(true)
            .resolve(theme())
            .unwrap();
        let secondary_only = Button::new().secondary(true).resolve(theme()).unwrap();

        assert_eq!(
            both, secondary_only,
            "flat+secondary should resolve exactly like secondary alone"
        );
        assert!(
            both.layer("button--flat").is_none(),
            "The flat layer should be suppressed by secondary"
        );
    }

    #[test]
    fn test_secondary_focus_padding_is_compensated_by_two_px() {
        let declaration = Button::new().secondary(true).resolve(theme()).unwrap();

        assert_eq!(
            declaration.pseudo_get(PseudoState::Focus, "padding"),
            Some(padding_for(SpacingKind::Byte, SpacingKind::Giga, Px(2.))),
            "Secondary focus grows the border 0px -> 2px"
        );
        assert_eq!(
            declaration.pseudo_get(PseudoState::HoverFocus, "border-width"),
            Some("2px".to_owned()),
            "Secondary keeps the focus border while hovered"
        );
    }

    #[test]
    fn test_stretch_layer() {
        let declaration = Button::new().stretch(true).resolve(theme()).unwrap();
        assert_eq!(declaration.get("width"), Some("100%".to_owned()));
        assert_eq!(declaration.get("display"), Some("block".to_owned()));
    }

    #[test]
    fn test_disabled_overlay_preserves_base_declarations() {
        let declaration = Button::new().disabled(true).resolve(theme()).unwrap();

        let disabled = declaration.merged_pseudo(PseudoState::Disabled);
        assert_eq!(disabled.get("opacity").map(String::as_str), Some("0.4"));
        assert_eq!(
            disabled.get("pointer-events").map(String::as_str),
            Some("none")
        );

        assert_eq!(
            declaration.get("background-color"),
            Some(theme().colors.p500.clone()),
            "The overlay must not erase base color declarations"
        );
        assert_eq!(
            declaration.get("border-color"),
            Some(theme().colors.p700.clone()),
            "The overlay must not erase base border declarations"
        );
    }

    #[test]
    fn test_missing_optional_radius_fails_with_its_path() {
        let mut value = serde_json::to_value(theme()).unwrap();
        value.as_object_mut().unwrap().remove("borderRadius");
        let radiusless = Theme::from_value(&value).unwrap();

        let error = Button::new().resolve(&radiusless).unwrap_err();
        assert_eq!(
            error,
            StyleError::Schema(SchemaError::missing("borderRadius.mega", "a px length")),
            "An active layer should surface the store's own error"
        );
    }

    #[test]
    fn test_layer_order_is_fixed() {
        let declaration = Button::new()
            .flat(true)
            .stretch(true)
            .disabled(true)
            .resolve(theme())
            .unwrap();

        let labels: Vec<&str> = declaration
            .layers()
            .iter()
            .map(|layer| layer.label())
            .collect();
        assert_eq!(
            labels,
            [
                "button",
                "button--mega",
                "button--flat",
                "button--stretched",
                "button--disabled"
            ],
            "Layers merge in the documented fixed order"
        );
    }
}
