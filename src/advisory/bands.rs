//! Ordered AQI band table
//!
//! Every AQI lookup in the crate goes through [`AQI_BANDS`]: display
//! categories directly, health severity by collapsing the upper tiers, and
//! the crop air-quality rules through severity.

use crate::models::SeverityLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A band with an inclusive upper bound
#[derive(Debug, Clone, Copy)]
pub struct Band<T> {
    pub upper: f64,
    pub value: T,
}

/// Ascending bands plus the value for everything above the last bound
///
/// Bands are contiguous: each one starts right after the previous upper
/// bound, the first starts at negative infinity.
#[derive(Debug, Clone, Copy)]
pub struct BandTable<T: 'static> {
    bands: &'static [Band<T>],
    overflow: T,
}

impl<T: Copy + 'static> BandTable<T> {
    #[must_use]
    pub const fn new(bands: &'static [Band<T>], overflow: T) -> Self {
        Self { bands, overflow }
    }

    /// First band whose upper bound is >= `value`
    #[must_use]
    pub fn lookup(&self, value: f64) -> T {
        self.bands
            .iter()
            .find(|band| value <= band.upper)
            .map_or(self.overflow, |band| band.value)
    }

    /// Upper bounds in ascending order
    pub fn boundaries(&self) -> impl Iterator<Item = f64> + '_ {
        self.bands.iter().map(|band| band.upper)
    }
}

/// Display category for an AQI value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

pub const AQI_BANDS: BandTable<AqiCategory> = BandTable::new(
    &[
        Band { upper: 50.0, value: AqiCategory::Good },
        Band { upper: 100.0, value: AqiCategory::Moderate },
        Band { upper: 150.0, value: AqiCategory::UnhealthyForSensitive },
        Band { upper: 200.0, value: AqiCategory::Unhealthy },
        Band { upper: 300.0, value: AqiCategory::VeryUnhealthy },
    ],
    AqiCategory::Hazardous,
);

impl AqiCategory {
    #[must_use]
    pub fn from_aqi(aqi: f64) -> Self {
        AQI_BANDS.lookup(aqi)
    }

    /// Health severity tier this category belongs to
    #[must_use]
    pub fn severity(self) -> SeverityLevel {
        match self {
            AqiCategory::Good => SeverityLevel::Safe,
            AqiCategory::Moderate => SeverityLevel::Moderate,
            AqiCategory::UnhealthyForSensitive => SeverityLevel::UnhealthySensitive,
            AqiCategory::Unhealthy | AqiCategory::VeryUnhealthy | AqiCategory::Hazardous => {
                SeverityLevel::Unhealthy
            }
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitive => "Unhealthy for Sensitive",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl SeverityLevel {
    /// Severity band for an AQI value: <=50, <=100, <=150, above
    #[must_use]
    pub fn from_aqi(aqi: f64) -> Self {
        AqiCategory::from_aqi(aqi).severity()
    }
}
