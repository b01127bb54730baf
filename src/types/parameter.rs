//! The seven soil and climate inputs.
//!
//! These types describe what each input measures and the range an input
//! surface offers for it. The ranges are presentation hints; only
//! [`SoilReading::validate`](crate::SoilReading::validate) rejects values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DemeterError;

/// One of the seven readings that make up a [`SoilReading`](crate::SoilReading).
///
/// Serializes as the snake_case field name used on the wire
/// (e.g. `"nitrogen"`, `"ph"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Nitrogen,
    Phosphorus,
    Potassium,
    Temperature,
    Humidity,
    Ph,
    Rainfall,
}

/// Slider range and step for a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterRange {
    /// Whether `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Parameter {
    /// All parameters in wire order.
    pub const ALL: [Parameter; 7] = [
        Parameter::Nitrogen,
        Parameter::Phosphorus,
        Parameter::Potassium,
        Parameter::Temperature,
        Parameter::Humidity,
        Parameter::Ph,
        Parameter::Rainfall,
    ];

    /// Canonical field name, matching the JSON keys of `SoilReading`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nitrogen => "nitrogen",
            Self::Phosphorus => "phosphorus",
            Self::Potassium => "potassium",
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Ph => "ph",
            Self::Rainfall => "rainfall",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Nitrogen => "Nitrogen (N)",
            Self::Phosphorus => "Phosphorus (P)",
            Self::Potassium => "Potassium (K)",
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::Ph => "pH",
            Self::Rainfall => "Rainfall",
        }
    }

    /// Unit of measurement. pH is dimensionless.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Nitrogen | Self::Phosphorus | Self::Potassium => "mg/kg",
            Self::Temperature => "°C",
            Self::Humidity => "%",
            Self::Ph => "",
            Self::Rainfall => "mm",
        }
    }

    /// Slider range offered by the recommendation tool.
    pub fn slider_range(&self) -> ParameterRange {
        let (min, max, step) = match self {
            Self::Nitrogen | Self::Phosphorus | Self::Potassium => (0.0, 140.0, 1.0),
            Self::Temperature => (0.0, 45.0, 0.5),
            Self::Humidity => (0.0, 100.0, 1.0),
            Self::Ph => (0.0, 14.0, 0.1),
            Self::Rainfall => (0.0, 300.0, 1.0),
        };
        ParameterRange { min, max, step }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parameter {
    type Err = DemeterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Parameter::ALL
            .into_iter()
            .find(|p| p.as_str() == needle)
            .ok_or_else(|| DemeterError::Configuration(format!("unknown parameter: {s}")))
    }
}
