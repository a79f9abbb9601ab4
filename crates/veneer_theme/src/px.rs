use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Serialize, Serializer};

/// A pixel length as used by spacing, radius, and typography tokens.
///
/// Serializes as a `px`-suffixed string (`"12px"`); deserialized from either
/// that form or a bare number (see `deserializers::de_px`).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.);

    pub fn value(self) -> f32 {
        self.0
    }
}

/// Parses a `px`-suffixed length string, e.g. `"12px"`.
pub fn parse_px(string: &str) -> Option<Px> {
    string.strip_suffix("px")?.trim().parse::<f32>().ok().map(Px)
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

impl Serialize for Px {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Px) -> Px {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Px) -> Px {
        Px(self.0 - rhs.0)
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl Neg for Px {
    type Output = Px;

    fn neg(self) -> Px {
        Px(-self.0)
    }
}
