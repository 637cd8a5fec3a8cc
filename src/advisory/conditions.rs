//! Temperature and humidity comfort classification
//!
//! The same thresholds drive the crop temperature and humidity rules.

use crate::Result;
use crate::models::reading::{validate_humidity, validate_temperature};
use serde::{Deserialize, Serialize};

/// Above this temperature (°C) heat stress applies
pub const HEAT_STRESS_CELSIUS: f64 = 35.0;
/// Below this temperature (°C) cold protection applies
pub const COLD_CELSIUS: f64 = 10.0;
/// Above this relative humidity (%) fungal risk applies
pub const HIGH_HUMIDITY_PERCENT: f64 = 70.0;
/// Below this relative humidity (%) conditions are dry
pub const LOW_HUMIDITY_PERCENT: f64 = 30.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TemperatureImpact {
    HeatStress,
    Cold,
    Comfortable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HumidityLevel {
    High,
    Dry,
    Comfortable,
}

impl TemperatureImpact {
    #[must_use]
    pub fn classify(temperature_celsius: f64) -> Self {
        if temperature_celsius > HEAT_STRESS_CELSIUS {
            TemperatureImpact::HeatStress
        } else if temperature_celsius < COLD_CELSIUS {
            TemperatureImpact::Cold
        } else {
            TemperatureImpact::Comfortable
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TemperatureImpact::HeatStress => "High heat stress",
            TemperatureImpact::Cold => "Cold conditions",
            TemperatureImpact::Comfortable => "Comfortable",
        }
    }
}

impl HumidityLevel {
    #[must_use]
    pub fn classify(humidity_percent: f64) -> Self {
        if humidity_percent > HIGH_HUMIDITY_PERCENT {
            HumidityLevel::High
        } else if humidity_percent < LOW_HUMIDITY_PERCENT {
            HumidityLevel::Dry
        } else {
            HumidityLevel::Comfortable
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            HumidityLevel::High => "High humidity",
            HumidityLevel::Dry => "Dry conditions",
            HumidityLevel::Comfortable => "Comfortable",
        }
    }
}

/// Comfort labels shown next to a health advisory
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConditionsAssessment {
    pub temperature: TemperatureImpact,
    pub humidity: HumidityLevel,
}

pub fn assess_conditions(
    temperature_celsius: f64,
    humidity_percent: f64,
) -> Result<ConditionsAssessment> {
    validate_temperature(temperature_celsius)?;
    validate_humidity(humidity_percent)?;
    Ok(ConditionsAssessment {
        temperature: TemperatureImpact::classify(temperature_celsius),
        humidity: HumidityLevel::classify(humidity_percent),
    })
}
