//! Environmental reading model and season handling

use crate::{AirScanError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Agricultural season
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Monsoon,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::Winter,
        Season::Spring,
        Season::Summer,
        Season::Monsoon,
    ];

    /// Season for a calendar month (1-12)
    ///
    /// Nov-Feb winter, Mar spring, Apr-Jun summer, Jul-Oct monsoon.
    pub fn from_month(month: u32) -> Result<Self> {
        match month {
            11 | 12 | 1 | 2 => Ok(Season::Winter),
            3 => Ok(Season::Spring),
            4..=6 => Ok(Season::Summer),
            7..=10 => Ok(Season::Monsoon),
            _ => Err(AirScanError::invalid_input(format!(
                "month must be within 1-12, got {month}"
            ))),
        }
    }

    /// Season a date falls in
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        // month() is always 1-12
        Self::from_month(date.month()).unwrap_or(Season::Winter)
    }
}

impl FromStr for Season {
    type Err = AirScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "monsoon" => Ok(Season::Monsoon),
            _ => Err(AirScanError::unknown_season(s.trim())),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Winter => write!(f, "Winter"),
            Season::Spring => write!(f, "Spring"),
            Season::Summer => write!(f, "Summer"),
            Season::Monsoon => write!(f, "Monsoon"),
        }
    }
}

/// A set of environmental measurements supplied per advisory request
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct EnvironmentalReading {
    /// Air Quality Index
    pub aqi: f64,
    /// Temperature in Celsius
    pub temperature_celsius: f64,
    /// Relative humidity (0-100)
    pub humidity_percent: f64,
    pub season: Season,
}

impl EnvironmentalReading {
    /// Create a validated reading
    pub fn new(
        aqi: f64,
        temperature_celsius: f64,
        humidity_percent: f64,
        season: Season,
    ) -> Result<Self> {
        let reading = Self {
            aqi,
            temperature_celsius,
            humidity_percent,
            season,
        };
        reading.validate()?;
        Ok(reading)
    }

    pub fn validate(&self) -> Result<()> {
        validate_aqi(self.aqi)?;
        validate_temperature(self.temperature_celsius)?;
        validate_humidity(self.humidity_percent)
    }
}

pub(crate) fn validate_aqi(aqi: f64) -> Result<()> {
    if !aqi.is_finite() || aqi < 0.0 {
        return Err(AirScanError::invalid_input(format!(
            "AQI must be a non-negative number, got {aqi}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_temperature(temperature_celsius: f64) -> Result<()> {
    if !temperature_celsius.is_finite() {
        return Err(AirScanError::invalid_input(format!(
            "temperature must be finite, got {temperature_celsius}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_humidity(humidity_percent: f64) -> Result<()> {
    if !humidity_percent.is_finite() || !(0.0..=100.0).contains(&humidity_percent) {
        return Err(AirScanError::invalid_input(format!(
            "humidity must be within [0, 100], got {humidity_percent}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("winter", Season::Winter)]
    #[case("Spring", Season::Spring)]
    #[case(" SUMMER ", Season::Summer)]
    #[case("monsoon", Season::Monsoon)]
    fn test_season_parsing(#[case] input: &str, #[case] expected: Season) {
        assert_eq!(input.parse::<Season>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_season() {
        let err = "autumn".parse::<Season>().unwrap_err();
        assert!(matches!(err, AirScanError::UnknownSeason { ref season } if season == "autumn"));
    }

    #[rstest]
    #[case(1, Season::Winter)]
    #[case(3, Season::Spring)]
    #[case(5, Season::Summer)]
    #[case(8, Season::Monsoon)]
    #[case(11, Season::Winter)]
    fn test_season_from_month(#[case] month: u32, #[case] expected: Season) {
        assert_eq!(Season::from_month(month).unwrap(), expected);
    }

    #[test]
    fn test_season_from_invalid_month() {
        assert!(Season::from_month(0).is_err());
        assert!(Season::from_month(13).is_err());
    }

    #[test]
    fn test_reading_validation() {
        assert!(EnvironmentalReading::new(89.0, 24.0, 65.0, Season::Winter).is_ok());
        assert!(EnvironmentalReading::new(-1.0, 24.0, 65.0, Season::Winter).is_err());
        assert!(EnvironmentalReading::new(f64::NAN, 24.0, 65.0, Season::Winter).is_err());
        assert!(EnvironmentalReading::new(89.0, f64::INFINITY, 65.0, Season::Winter).is_err());
        assert!(EnvironmentalReading::new(89.0, 24.0, 100.5, Season::Winter).is_err());
        assert!(EnvironmentalReading::new(0.0, -5.0, 0.0, Season::Monsoon).is_ok());
    }
}
