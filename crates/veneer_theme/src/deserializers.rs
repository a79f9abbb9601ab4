use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use crate::px::{Px, parse_px};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

pub fn de_px<'de, D>(deserializer: D) -> Result<Px, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => match parse_px(&string) {
            Some(px) => Ok(px),
            None => Err(D::Error::custom("expected a 'px'-suffixed length string")),
        },

        StringOrFloat::Float(pixels) => Ok(Px(pixels)),
    }
}

pub fn de_opt_px<'de, D>(deserializer: D) -> Result<Option<Px>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrFloat>::deserialize(deserializer)? {
        None => Ok(None),

        Some(StringOrFloat::Float(pixels)) => Ok(Some(Px(pixels))),

        Some(StringOrFloat::String(string)) => match parse_px(&string) {
            Some(px) => Ok(Some(px)),
            None => Err(D::Error::custom("expected a 'px'-suffixed length string")),
        },
    }
}

pub fn de_non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let string = String::deserialize(deserializer)?;

    if string.is_empty() {
        return Err(D::Error::custom("string can't be empty."));
    }

    Ok(string)
}

pub fn de_string_or_non_empty_list<'de, D>(
    deserializer: D,
) -> Result<SmallVec<[String; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrVec {
        One(String),
        Many(SmallVec<[String; 1]>),
    }

    let value = StringOrVec::deserialize(deserializer)?;

    match value {
        StringOrVec::One(string) => Ok(SmallVec::from_buf([string])),
        StringOrVec::Many(vec) => {
            if vec.is_empty() {
                return Err(D::Error::custom("list can't be empty."));
            }

            Ok(vec)
        }
    }
}
