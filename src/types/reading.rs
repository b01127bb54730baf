//! Soil and climate readings.

use serde::{Deserialize, Serialize};

use super::Parameter;
use crate::{DemeterError, Result};

/// Seven soil and climate readings for one field.
///
/// The field names double as the JSON keys the remote model expects.
/// Nothing here is enforced on construction; the rule table accepts any
/// `f64`, and callers that take user input run [`SoilReading::validate`]
/// before recommending.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilReading {
    /// Nitrogen, mg/kg.
    pub nitrogen: f64,
    /// Phosphorus, mg/kg.
    pub phosphorus: f64,
    /// Potassium, mg/kg.
    pub potassium: f64,
    /// Air temperature, °C.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Soil pH.
    pub ph: f64,
    /// Rainfall, mm.
    pub rainfall: f64,
}

impl SoilReading {
    /// Starting positions of the recommendation tool's sliders.
    pub fn slider_defaults() -> Self {
        Self {
            nitrogen: 50.0,
            phosphorus: 50.0,
            potassium: 50.0,
            temperature: 25.0,
            humidity: 50.0,
            ph: 7.0,
            rainfall: 150.0,
        }
    }

    /// Value of a single parameter.
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Nitrogen => self.nitrogen,
            Parameter::Phosphorus => self.phosphorus,
            Parameter::Potassium => self.potassium,
            Parameter::Temperature => self.temperature,
            Parameter::Humidity => self.humidity,
            Parameter::Ph => self.ph,
            Parameter::Rainfall => self.rainfall,
        }
    }

    /// Set a single parameter.
    pub fn set(&mut self, parameter: Parameter, value: f64) {
        let slot = match parameter {
            Parameter::Nitrogen => &mut self.nitrogen,
            Parameter::Phosphorus => &mut self.phosphorus,
            Parameter::Potassium => &mut self.potassium,
            Parameter::Temperature => &mut self.temperature,
            Parameter::Humidity => &mut self.humidity,
            Parameter::Ph => &mut self.ph,
            Parameter::Rainfall => &mut self.rainfall,
        };
        *slot = value;
    }

    /// Reject readings an input form should never submit.
    ///
    /// Checks, in parameter order:
    /// - every value is finite
    /// - nitrogen, phosphorus, potassium and rainfall are not negative
    /// - pH lies in `[0, 14]`
    /// - humidity lies in `[0, 100]`
    ///
    /// Temperature has no bound beyond being finite.
    pub fn validate(&self) -> Result<()> {
        for parameter in Parameter::ALL {
            let value = self.get(parameter);
            if !value.is_finite() {
                return Err(invalid(parameter, value, "must be a finite number"));
            }
        }

        for parameter in [
            Parameter::Nitrogen,
            Parameter::Phosphorus,
            Parameter::Potassium,
            Parameter::Rainfall,
        ] {
            let value = self.get(parameter);
            if value < 0.0 {
                return Err(invalid(parameter, value, "must not be negative"));
            }
        }

        if !(0.0..=14.0).contains(&self.ph) {
            return Err(invalid(Parameter::Ph, self.ph, "pH must be between 0 and 14"));
        }

        if !(0.0..=100.0).contains(&self.humidity) {
            return Err(invalid(
                Parameter::Humidity,
                self.humidity,
                "humidity must be between 0 and 100",
            ));
        }

        Ok(())
    }
}

fn invalid(parameter: Parameter, value: f64, reason: &'static str) -> DemeterError {
    DemeterError::InvalidReading {
        parameter: parameter.as_str(),
        value,
        reason,
    }
}
