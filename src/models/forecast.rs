//! Daily forecast model

use super::reading::{validate_aqi, validate_humidity, validate_temperature};
use crate::{AirScanError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// AQI movement relative to the previous day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Stable => write!(f, "stable"),
        }
    }
}

/// Temperature range for a day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

/// One forecast day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// Display name ("Today", "Monday", ...)
    pub day_name: String,
    pub aqi: f64,
    pub temperature: TemperatureRange,
    /// Sky condition ("sunny", "cloudy", "rainy")
    pub condition: String,
    pub humidity: f64,
    pub wind_speed_kmh: f64,
    /// Provided trend; derived from the previous day when absent
    #[serde(default)]
    pub trend: Option<Trend>,
}

impl ForecastDay {
    pub fn validate(&self) -> Result<()> {
        validate_aqi(self.aqi)?;
        validate_temperature(self.temperature.min)?;
        validate_temperature(self.temperature.max)?;
        if self.temperature.min > self.temperature.max {
            return Err(AirScanError::invalid_input(format!(
                "{}: minimum temperature {} exceeds maximum {}",
                self.date, self.temperature.min, self.temperature.max
            )));
        }
        validate_humidity(self.humidity)?;
        if !self.wind_speed_kmh.is_finite() || self.wind_speed_kmh < 0.0 {
            return Err(AirScanError::invalid_input(format!(
                "{}: wind speed must be a non-negative number, got {}",
                self.date, self.wind_speed_kmh
            )));
        }
        Ok(())
    }

    /// Format temperature range with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.0}-{:.0}°C", self.temperature.min, self.temperature.max)
    }
}
