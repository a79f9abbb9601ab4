use veneer_theme::{SchemaError, Theme};

use crate::components::shared::{disabled_overlay, padding_shorthand};
use crate::error::StyleError;
use crate::style::{
    LayerProducer, PseudoState, SpacingKind, StyleDeclaration, StyleLayer, TextKind, compose,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
}

impl TextAlign {
    fn value(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// The text field's variant rules.
///
/// `inline` and `stretch` are mutually exclusive; the conflict is caught by
/// the prop-validation pass before any layer runs, never silently resolved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Input {
    inline: bool,
    stretch: bool,
    invalid: bool,
    optional: bool,
    disabled: bool,
    text_align: TextAlign,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays the field out inline so several can share a row.
    pub fn inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }

    /// Stretches the field to the full width of its container.
    pub fn stretch(mut self, stretch: bool) -> Self {
        self.stretch = stretch;
        self
    }

    /// Marks the field's current value as failing validation.
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Visually de-emphasizes a field the user may skip.
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = text_align;
        self
    }

    /// Checks prop combinations before resolution.
    pub fn validate(&self) -> Result<(), StyleError> {
        if self.inline && self.stretch {
            return Err(StyleError::PropConflict {
                first: "inline",
                second: "stretch",
            });
        }

        Ok(())
    }

    pub fn resolve(&self, theme: &Theme) -> Result<StyleDeclaration, StyleError> {
        self.validate()?;
        Ok(compose(theme, self, LAYERS)?)
    }
}

const LAYERS: &[LayerProducer<Input>] = &[
    base_layer,
    inline_layer,
    stretch_layer,
    invalid_layer,
    optional_layer,
    disabled_layer,
];

fn base_layer(theme: &Theme, input: &Input) -> Result<Option<StyleLayer>, SchemaError> {
    let colors = &theme.colors;
    let radius = theme.radius("kilo")?;
    let text = TextKind::Mega.resolve(theme);
    let padding = padding_shorthand(
        SpacingKind::Byte.resolve(theme),
        SpacingKind::Kilo.resolve(theme),
    );

    Ok(Some(
        StyleLayer::new("input")
            .prop("background-color", &colors.white)
            .prop("border-color", &colors.n500)
            .prop("border-radius", radius.to_string())
            .prop("border-style", "solid")
            .prop("border-width", "1px")
            .prop("color", &colors.body_color)
            .prop("display", "block")
            .prop("padding", padding)
            .prop("font-size", text.font_size.to_string())
            .prop("line-height", text.line_height.to_string())
            .prop("text-align", input.text_align.value())
            .prop("width", "auto")
            .pseudo_prop(PseudoState::Hover, "border-color", &colors.n700)
            .pseudo_prop(PseudoState::Focus, "border-color", &colors.p500)
            .pseudo_prop(PseudoState::Focus, "outline", "0"),
    ))
}

fn inline_layer(theme: &Theme, input: &Input) -> Result<Option<StyleLayer>, SchemaError> {
    Ok(input.inline.then(|| {
        StyleLayer::new("input--inline")
            .prop("display", "inline-block")
            .prop(
                "margin-right",
                SpacingKind::Byte.resolve(theme).to_string(),
            )
    }))
}

fn stretch_layer(_theme: &Theme, input: &Input) -> Result<Option<StyleLayer>, SchemaError> {
    Ok(input.stretch.then(|| {
        StyleLayer::new("input--stretched")
            .prop("width", "100%")
            .prop("display", "block")
    }))
}

fn invalid_layer(theme: &Theme, input: &Input) -> Result<Option<StyleLayer>, SchemaError> {
    Ok(input.invalid.then(|| {
        StyleLayer::new("input--invalid")
            .prop("border-color", &theme.colors.r500)
            .pseudo_prop(PseudoState::Hover, "border-color", &theme.colors.r700)
            .pseudo_prop(PseudoState::Focus, "border-color", &theme.colors.r500)
    }))
}

fn optional_layer(theme: &Theme, input: &Input) -> Result<Option<StyleLayer>, SchemaError> {
    Ok(input.optional.then(|| {
        StyleLayer::new("input--optional")
            .prop("background-color", &theme.colors.n100)
            .prop("border-color", &theme.colors.n300)
    }))
}

fn disabled_layer(_theme: &Theme, input: &Input) -> Result<Option<StyleLayer>, SchemaError> {
    Ok(input.disabled.then(|| disabled_overlay("input--disabled")))
}
