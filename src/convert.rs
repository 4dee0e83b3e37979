//! Pure conversion between the Celsius and Fahrenheit scales. No I/O and no
//! rounding here — display rounding belongs to the report module.

use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// Freezing point of water on the Fahrenheit scale, the offset between the
/// two scales' zero points.
const FAHRENHEIT_FREEZING: f64 = 32.0;

/// One of the two supported temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
}

impl Scale {
    /// The scale a conversion lands on.
    pub fn opposite(self) -> Scale {
        match self {
            Scale::Celsius => Scale::Fahrenheit,
            Scale::Fahrenheit => Scale::Celsius,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scale::Celsius => write!(f, "C"),
            Scale::Fahrenheit => write!(f, "F"),
        }
    }
}

impl FromStr for Scale {
    type Err = ConvertError;

    /// Parse a unit token. Only `c`/`C` and `f`/`F` are scales this tool
    /// knows; anything else is `InvalidUnit`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" | "C" => Ok(Scale::Celsius),
            "f" | "F" => Ok(Scale::Fahrenheit),
            other => Err(ConvertError::InvalidUnit(other.to_string())),
        }
    }
}

/// A temperature value paired with the scale it was measured on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub value: f64,
    pub scale: Scale,
}

impl Reading {
    pub fn new(value: f64, scale: Scale) -> Self {
        Self { value, scale }
    }
}

/// Convert Celsius to Fahrenheit.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + FAHRENHEIT_FREEZING
}

/// Convert Fahrenheit to Celsius.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - FAHRENHEIT_FREEZING) * 5.0 / 9.0
}

/// Convert a reading to the opposite scale. The result's scale is the
/// complement of the input's by construction.
pub fn convert(reading: Reading) -> Reading {
    let value = match reading.scale {
        Scale::Celsius => celsius_to_fahrenheit(reading.value),
        Scale::Fahrenheit => fahrenheit_to_celsius(reading.value),
    };
    Reading::new(value, reading.scale.opposite())
}
