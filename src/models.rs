// src/models.rs
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use utoipa::ToSchema;

/// Which character classes a password may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PasswordOptions {
    /// Include `A-Z`
    #[serde(default)]
    pub uppercase: bool,
    /// Include `a-z`
    #[serde(default)]
    pub lowercase: bool,
    /// Include `0-9`
    #[serde(default)]
    pub numbers: bool,
    /// Include punctuation
    #[serde(default)]
    pub special: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            special: true,
        }
    }
}

impl PasswordOptions {
    pub fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            numbers: false,
            special: false,
        }
    }

    pub fn any_enabled(&self) -> bool {
        self.uppercase || self.lowercase || self.numbers || self.special
    }
}

// Password generation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationRequest {
    /// Requested password length (an integer or a numeric string)
    #[serde(deserialize_with = "deserialize_length")]
    #[schema(example = 12)]
    pub length: i64,
    /// Enabled character classes
    pub options: PasswordOptions,
}

// Password generation result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationResult {
    /// The generated password
    pub password: String,
}

struct LengthVisitor;

// Browser forms post the raw input value, so "12" is as valid as 12. Integers
// beyond i64 saturate so they fail the length bounds check, not parsing.
impl<'de> Visitor<'de> for LengthVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer length")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        Ok(i64::try_from(v).unwrap_or(i64::MAX))
    }

    // serde_json hands integers wider than u64 over as floats
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        if v.is_finite() && v.fract() == 0.0 {
            Ok(v as i64)
        } else {
            Err(E::custom(format!("length must be an integer, got {}", v)))
        }
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<i64, E> {
        match s.trim().parse::<i64>() {
            Ok(n) => Ok(n),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(E::custom(format!("length must be an integer, got \"{}\"", s))),
            },
        }
    }
}

fn deserialize_length<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LengthVisitor)
}
