use std::{
    ops::{Deref, DerefMut},
    sync::LazyLock,
};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::deserializers::{de_non_empty_string, de_opt_px, de_px, de_string_or_non_empty_list};
use crate::error::SchemaError;
use crate::px::Px;

/// The immutable design-token store shared by every style computation.
///
/// Constructed once via [`Theme::from_value`] / [`Theme::from_str`] (both run
/// the full schema validation) and injected by reference afterwards; nothing
/// mutates a theme after construction.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub colors: ThemeColors,
    pub spacings: ThemeSpacings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<ThemeBorderRadius>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_sizes: Option<ThemeIconSizes>,
    pub typography: ThemeTypography,
    pub font_weight: ThemeFontWeight,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_stack: Option<ThemeFontStack>,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| Theme::from_str(include_str!($path)).unwrap());
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl Theme {
    generate_builtin_themes!(["../themes/default.json", DEFAULT]);

    /// Parses and validates a theme from a JSON string.
    pub fn from_str<S: AsRef<str>>(str: S) -> Result<Theme, SchemaError> {
        let value: serde_json::Value =
            serde_json::from_str(str.as_ref()).map_err(|err| SchemaError::Json(err.to_string()))?;

        Self::from_value(&value)
    }

    /// Validates a candidate token mapping against the schema.
    ///
    /// Checks run in a fixed order (colors, spacings, font weights,
    /// typography) and stop at the first missing or malformed required
    /// token.
    pub fn from_value(value: &serde_json::Value) -> Result<Theme, SchemaError> {
        crate::validate::validate(value)
    }

    /// Looks up an optional border-radius token.
    ///
    /// Radii are not required at validation time, so a style rule that
    /// depends on one surfaces the store's own error when it is absent.
    pub fn radius(&self, name: &str) -> Result<Px, SchemaError> {
        self.border_radius
            .as_ref()
            .and_then(|radii| match name {
                "kilo" => radii.kilo,
                "mega" => radii.mega,
                "giga" => radii.giga,
                _ => None,
            })
            .ok_or_else(|| SchemaError::missing(format!("borderRadius.{name}"), "a px length"))
    }
}

/// Semantic color tokens.
///
/// Five-step neutral/blue/green/yellow/red/primary scales plus body and
/// button colors. All keys are required; values are non-empty color strings.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub white: String,
    pub black: String,
    // Neutrals
    pub n100: String,
    pub n300: String,
    pub n500: String,
    pub n700: String,
    pub n900: String,
    // Blues
    pub b100: String,
    pub b300: String,
    pub b500: String,
    pub b700: String,
    pub b900: String,
    // Greens
    pub g100: String,
    pub g300: String,
    pub g500: String,
    pub g700: String,
    pub g900: String,
    // Yellows
    pub y100: String,
    pub y300: String,
    pub y500: String,
    pub y700: String,
    pub y900: String,
    // Reds
    pub r100: String,
    pub r300: String,
    pub r500: String,
    pub r700: String,
    pub r900: String,
    // Primary
    pub p100: String,
    pub p300: String,
    pub p500: String,
    pub p700: String,
    pub p900: String,
    // Misc
    pub shadow: String,
    pub body_bg: String,
    pub body_color: String,
    pub button_color: String,
}

/// The nine-step spacing scale, smallest to largest.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ThemeSpacings {
    #[serde(deserialize_with = "de_px")]
    pub bit: Px,
    #[serde(deserialize_with = "de_px")]
    pub byte: Px,
    #[serde(deserialize_with = "de_px")]
    pub kilo: Px,
    #[serde(deserialize_with = "de_px")]
    pub mega: Px,
    #[serde(deserialize_with = "de_px")]
    pub giga: Px,
    #[serde(deserialize_with = "de_px")]
    pub tera: Px,
    #[serde(deserialize_with = "de_px")]
    pub peta: Px,
    #[serde(deserialize_with = "de_px")]
    pub exa: Px,
    #[serde(deserialize_with = "de_px")]
    pub zetta: Px,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct ThemeBorderRadius {
    #[serde(default, deserialize_with = "de_opt_px")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kilo: Option<Px>,
    #[serde(default, deserialize_with = "de_opt_px")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mega: Option<Px>,
    #[serde(default, deserialize_with = "de_opt_px")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub giga: Option<Px>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ThemeIconSizes {
    #[serde(deserialize_with = "de_px")]
    pub kilo: Px,
    #[serde(deserialize_with = "de_px")]
    pub mega: Px,
}

/// Heading, sub-heading, and body-text scales.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTypography {
    pub headings: ThemeHeadings,
    pub sub_headings: ThemeSubHeadings,
    pub text: ThemeTextScales,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ThemeHeadings {
    pub kilo: TypeScale,
    pub mega: TypeScale,
    pub giga: TypeScale,
    pub tera: TypeScale,
    pub peta: TypeScale,
    pub exa: TypeScale,
    pub zetta: TypeScale,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ThemeSubHeadings {
    pub kilo: TypeScale,
    pub mega: TypeScale,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct ThemeTextScales {
    pub kilo: TypeScale,
    pub mega: TypeScale,
    pub giga: TypeScale,
}

/// A font-size / line-height pair.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct TypeScale {
    #[serde(deserialize_with = "de_px")]
    pub font_size: Px,
    #[serde(deserialize_with = "de_px")]
    pub line_height: Px,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFontWeight {
    #[serde(deserialize_with = "de_non_empty_string")]
    pub regular: String,
    #[serde(deserialize_with = "de_non_empty_string")]
    pub bold: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeFontStack {
    #[serde(default, deserialize_with = "de_opt_font_family")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<SmallVec<[String; 1]>>,
    #[serde(default, deserialize_with = "de_opt_font_family")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mono: Option<SmallVec<[String; 1]>>,
}

fn de_opt_font_family<'de, D>(deserializer: D) -> Result<Option<SmallVec<[String; 1]>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    de_string_or_non_empty_list(deserializer).map(Some)
}
