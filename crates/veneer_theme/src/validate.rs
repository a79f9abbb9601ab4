//! The explicit schema-validation pass run before a candidate mapping is
//! accepted as a [`Theme`](crate::Theme).
//!
//! Required groups are checked in a fixed order (colors, spacings, font
//! weights, typography); the first missing or malformed token aborts with a
//! [`SchemaError`] naming its full path. Optional groups are only checked
//! for shape when present.

use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::px::parse_px;
use crate::schema::Theme;

#[rustfmt::skip]
pub(crate) const REQUIRED_COLORS: [&str; 36] = [
    "white", "black",
    // Neutrals
    "n100", "n300", "n500", "n700", "n900",
    // Blues
    "b100", "b300", "b500", "b700", "b900",
    // Greens
    "g100", "g300", "g500", "g700", "g900",
    // Yellows
    "y100", "y300", "y500", "y700", "y900",
    // Reds
    "r100", "r300", "r500", "r700", "r900",
    // Primary
    "p100", "p300", "p500", "p700", "p900",
    // Misc
    "shadow", "bodyBg", "bodyColor", "buttonColor",
];

pub(crate) const SPACING_KEYS: [&str; 9] = [
    "bit", "byte", "kilo", "mega", "giga", "tera", "peta", "exa", "zetta",
];

const HEADING_KEYS: [&str; 7] = ["kilo", "mega", "giga", "tera", "peta", "exa", "zetta"];
const SUB_HEADING_KEYS: [&str; 2] = ["kilo", "mega"];
const TEXT_KEYS: [&str; 3] = ["kilo", "mega", "giga"];
const RADIUS_KEYS: [&str; 3] = ["kilo", "mega", "giga"];

/// Validates a candidate token mapping and returns the accepted theme.
pub fn validate(candidate: &Value) -> Result<Theme, SchemaError> {
    let root = candidate
        .as_object()
        .ok_or_else(|| SchemaError::malformed("", "an object"))?;

    let colors = require_object(root, "", "colors")?;
    for key in REQUIRED_COLORS {
        require_non_empty_string(colors, "colors", key)?;
    }

    let spacings = require_object(root, "", "spacings")?;
    for key in SPACING_KEYS {
        require_px(spacings, "spacings", key)?;
    }

    let font_weight = require_object(root, "", "fontWeight")?;
    require_non_empty_string(font_weight, "fontWeight", "regular")?;
    require_non_empty_string(font_weight, "fontWeight", "bold")?;

    let typography = require_object(root, "", "typography")?;
    let headings = require_object(typography, "typography", "headings")?;
    for key in HEADING_KEYS {
        require_type_scale(headings, "typography.headings", key)?;
    }
    let sub_headings = require_object(typography, "typography", "subHeadings")?;
    for key in SUB_HEADING_KEYS {
        require_type_scale(sub_headings, "typography.subHeadings", key)?;
    }
    let text = require_object(typography, "typography", "text")?;
    for key in TEXT_KEYS {
        require_type_scale(text, "typography.text", key)?;
    }

    if let Some(radii) = root.get("borderRadius") {
        let radii = radii
            .as_object()
            .ok_or_else(|| SchemaError::malformed("borderRadius", "an object"))?;
        for key in RADIUS_KEYS {
            if radii.contains_key(key) {
                require_px(radii, "borderRadius", key)?;
            }
        }
    }

    if let Some(icon_sizes) = root.get("iconSizes") {
        let icon_sizes = icon_sizes
            .as_object()
            .ok_or_else(|| SchemaError::malformed("iconSizes", "an object"))?;
        require_px(icon_sizes, "iconSizes", "kilo")?;
        require_px(icon_sizes, "iconSizes", "mega")?;
    }

    // The walk above covers everything with a required shape; the typed
    // parse can still reject stray malformed optional fields.
    serde_json::from_value(candidate.clone())
        .map_err(|err| SchemaError::Json(err.to_string()))
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}

fn require_object<'a>(
    object: &'a Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<&'a Map<String, Value>, SchemaError> {
    match object.get(key) {
        None => Err(SchemaError::missing(join(parent, key), "an object")),
        Some(value) => value
            .as_object()
            .ok_or_else(|| SchemaError::malformed(join(parent, key), "an object")),
    }
}

fn require_non_empty_string(
    object: &Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<(), SchemaError> {
    match object.get(key) {
        None => Err(SchemaError::missing(
            join(parent, key),
            "a non-empty string",
        )),
        Some(Value::String(string)) if !string.is_empty() => Ok(()),
        Some(_) => Err(SchemaError::malformed(
            join(parent, key),
            "a non-empty string",
        )),
    }
}

fn require_px(object: &Map<String, Value>, parent: &str, key: &str) -> Result<(), SchemaError> {
    match object.get(key) {
        None => Err(SchemaError::missing(join(parent, key), "a px length")),
        Some(Value::String(string)) if parse_px(string).is_some() => Ok(()),
        Some(Value::Number(_)) => Ok(()),
        Some(_) => Err(SchemaError::malformed(join(parent, key), "a px length")),
    }
}

fn require_type_scale(
    object: &Map<String, Value>,
    parent: &str,
    key: &str,
) -> Result<(), SchemaError> {
    let path = join(parent, key);
    let scale = match object.get(key) {
        None => return Err(SchemaError::missing(path, "a type scale")),
        Some(value) => value
            .as_object()
            .ok_or_else(|| SchemaError::malformed(path.clone(), "a type scale"))?,
    };

    require_px(scale, &path, "fontSize")?;
    require_px(scale, &path, "lineHeight")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn default_value() -> Value {
        serde_json::from_str(include_str!("../themes/default.json")).unwrap()
    }

    #[test]
    fn test_conforming_theme_is_accepted() {
        let theme = validate(&default_value());
        assert!(theme.is_ok(), "The built-in theme should pass validation");
    }

    #[test]
    fn test_each_missing_color_is_reported_by_path() {
        for key in REQUIRED_COLORS {
            let mut value = default_value();
            value["colors"].as_object_mut().unwrap().remove(key);

            let error = validate(&value).unwrap_err();
            assert_eq!(
                error.path(),
                Some(format!("colors.{key}").as_str()),
                "Removing `{key}` should fail at its own path"
            );
        }
    }

    #[test]
    fn test_empty_color_string_is_malformed() {
        let mut value = default_value();
        value["colors"]["p500"] = json!("");

        let error = validate(&value).unwrap_err();
        assert!(
            matches!(error, SchemaError::Malformed { .. }),
            "An empty color should be malformed, not missing"
        );
        assert_eq!(error.path(), Some("colors.p500"));
    }

    #[test]
    fn test_missing_spacing_is_reported() {
        let mut value = default_value();
        value["spacings"].as_object_mut().unwrap().remove("bit");

        let error = validate(&value).unwrap_err();
        assert_eq!(error.path(), Some("spacings.bit"));
    }

    #[test]
    fn test_unitless_spacing_string_is_malformed() {
        let mut value = default_value();
        value["spacings"]["giga"] = json!("24");

        let error = validate(&value).unwrap_err();
        assert_eq!(error.path(), Some("spacings.giga"));
    }

    #[test]
    fn test_numeric_spacing_is_accepted() {
        let mut value = default_value();
        value["spacings"]["giga"] = json!(24);

        assert!(
            validate(&value).is_ok(),
            "Bare numbers are valid px lengths"
        );
    }

    #[test]
    fn test_missing_font_weight_is_reported() {
        let mut value = default_value();
        value["fontWeight"].as_object_mut().unwrap().remove("bold");

        let error = validate(&value).unwrap_err();
        assert_eq!(error.path(), Some("fontWeight.bold"));
    }

    #[test]
    fn test_missing_typography_scale_is_reported() {
        let mut value = default_value();
        value["typography"]["text"]
            .as_object_mut()
            .unwrap()
            .remove("mega");

        let error = validate(&value).unwrap_err();
        assert_eq!(error.path(), Some("typography.text.mega"));
    }

    #[test]
    fn test_type_scale_without_line_height_is_reported() {
        let mut value = default_value();
        value["typography"]["headings"]["kilo"]
            .as_object_mut()
            .unwrap()
            .remove("lineHeight");

        let error = validate(&value).unwrap_err();
        assert_eq!(error.path(), Some("typography.headings.kilo.lineHeight"));
    }

    #[test]
    fn test_missing_optional_groups_are_fine() {
        let mut value = default_value();
        value.as_object_mut().unwrap().remove("borderRadius");
        value.as_object_mut().unwrap().remove("fontStack");
        value.as_object_mut().unwrap().remove("iconSizes");

        let theme = validate(&value).unwrap();
        assert!(
            theme.border_radius.is_none(),
            "Radii are optional and should simply be absent"
        );
    }

    #[test]
    fn test_malformed_optional_radius_is_reported() {
        let mut value = default_value();
        value["borderRadius"]["mega"] = json!(true);

        let error = validate(&value).unwrap_err();
        assert_eq!(error.path(), Some("borderRadius.mega"));
    }

    #[test]
    fn test_checks_run_in_documented_order() {
        // Break both a color and a spacing; the color must win.
        let mut value = default_value();
        value["colors"].as_object_mut().unwrap().remove("n500");
        value["spacings"].as_object_mut().unwrap().remove("bit");

        let error = validate(&value).unwrap_err();
        assert_eq!(
            error.path(),
            Some("colors.n500"),
            "Colors are checked before spacings"
        );
    }

    #[test]
    fn test_non_object_candidate_is_rejected() {
        let error = validate(&json!([])).unwrap_err();
        assert!(matches!(error, SchemaError::Malformed { .. }));
    }
}
