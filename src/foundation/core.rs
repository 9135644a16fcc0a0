use crate::foundation::error::{VistulaError, VistulaResult};

pub use kurbo::BezPath;

/// Horizontal placement expressed as a percentage of canvas width.
///
/// Serializes as the string form (`"2%"`); accepts either `"2%"` or a bare
/// number in JSON. The string form is the identity key of a decoration, so
/// two descriptors with equal numeric value are the same element.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Percent(pub f64);

impl Percent {
    /// Resolve against a width in canvas units.
    pub fn resolve(self, width: f64) -> f64 {
        width * self.0 / 100.0
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl serde::Serialize for Percent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Percent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            Num(f64),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(v) => Ok(Self(v)),
            Repr::Str(s) => {
                let trimmed = s.trim();
                let body = trimmed.strip_suffix('%').unwrap_or(trimmed);
                body.trim()
                    .parse::<f64>()
                    .map(Self)
                    .map_err(|_| serde::de::Error::custom(format!("invalid percent \"{s}\"")))
            }
        }
    }
}

/// Scene canvas dimensions in abstract user units (the SVG viewBox).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in user units.
    pub width: u32,
    /// Height in user units.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> VistulaResult<Self> {
        if width == 0 || height == 0 {
            return Err(VistulaError::validation("Canvas dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }
}
