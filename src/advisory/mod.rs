//! Advisory engine
//!
//! Turns environmental readings into health and agricultural advisories
//! through ordered threshold rule tables:
//! - bands: the shared AQI band table
//! - health: per-band health guidance
//! - crop: air quality, temperature, humidity and season rules for farming
//! - conditions: temperature and humidity comfort thresholds

pub mod bands;
pub mod conditions;
pub mod crop;
pub mod health;

pub use bands::{AQI_BANDS, AqiCategory, Band, BandTable};
pub use conditions::{ConditionsAssessment, HumidityLevel, TemperatureImpact, assess_conditions};
pub use crop::{evaluate_crop, evaluate_crop_reading};
pub use health::evaluate_health;

use crate::models::{Advisory, CropAdvisory, Season};
use crate::{AirScanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// What to do with a season name that is not one of the four known seasons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSeasonPolicy {
    /// Fail with `UnknownSeason`
    #[default]
    Reject,
    /// Evaluate the other rules and leave season advice empty
    Ignore,
}

impl FromStr for UnknownSeasonPolicy {
    type Err = AirScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(UnknownSeasonPolicy::Reject),
            "ignore" => Ok(UnknownSeasonPolicy::Ignore),
            other => Err(AirScanError::config(format!(
                "Invalid unknown-season policy '{other}'. Must be one of: reject, ignore"
            ))),
        }
    }
}

impl fmt::Display for UnknownSeasonPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownSeasonPolicy::Reject => write!(f, "reject"),
            UnknownSeasonPolicy::Ignore => write!(f, "ignore"),
        }
    }
}

/// Advisory evaluation with a configured season policy
///
/// Holds no mutable state; one engine can be shared between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvisoryEngine {
    unknown_season: UnknownSeasonPolicy,
}

impl AdvisoryEngine {
    #[must_use]
    pub fn new(unknown_season: UnknownSeasonPolicy) -> Self {
        Self { unknown_season }
    }

    #[must_use]
    pub fn unknown_season_policy(&self) -> UnknownSeasonPolicy {
        self.unknown_season
    }

    pub fn health(&self, aqi: f64) -> Result<Advisory> {
        debug!("Evaluating health advisory for AQI {}", aqi);
        evaluate_health(aqi)
    }

    /// Crop advisory with the season given by name
    pub fn crop(
        &self,
        aqi: f64,
        temperature_celsius: f64,
        humidity_percent: f64,
        season: &str,
    ) -> Result<CropAdvisory> {
        debug!(
            "Evaluating crop advisory: aqi={} temp={} humidity={} season={}",
            aqi, temperature_celsius, humidity_percent, season
        );

        let season = match season.parse::<Season>() {
            Ok(season) => Some(season),
            Err(err) => match self.unknown_season {
                UnknownSeasonPolicy::Reject => return Err(err),
                UnknownSeasonPolicy::Ignore => {
                    warn!("Ignoring unknown season '{}'", season);
                    None
                }
            },
        };

        crop::evaluate_rules(aqi, temperature_celsius, humidity_percent, season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_unknown_season() {
        let engine = AdvisoryEngine::default();
        let err = engine.crop(50.0, 20.0, 50.0, "autumn").unwrap_err();
        assert!(matches!(err, AirScanError::UnknownSeason { .. }));
    }

    #[test]
    fn test_ignore_unknown_season() {
        let engine = AdvisoryEngine::new(UnknownSeasonPolicy::Ignore);
        let advice = engine.crop(50.0, 20.0, 50.0, "autumn").unwrap();
        assert!(advice.planting.is_empty());
        assert!(advice.fertilization.is_empty());
        assert_eq!(advice.recommendations.len(), 3);
    }

    #[test]
    fn test_invalid_reading_with_ignored_season() {
        let engine = AdvisoryEngine::new(UnknownSeasonPolicy::Ignore);
        let err = engine.crop(f64::NAN, 20.0, 50.0, "autumn").unwrap_err();
        assert!(matches!(err, AirScanError::InvalidInput { .. }));
    }

    #[test]
    fn test_named_season_matches_typed_evaluation() {
        let engine = AdvisoryEngine::default();
        assert_eq!(
            engine.crop(160.0, 36.0, 75.0, "Summer").unwrap(),
            evaluate_crop(160.0, 36.0, 75.0, Season::Summer).unwrap()
        );
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            "IGNORE".parse::<UnknownSeasonPolicy>().unwrap(),
            UnknownSeasonPolicy::Ignore
        );
        assert!("skip".parse::<UnknownSeasonPolicy>().is_err());
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AdvisoryEngine>();

        let engine = AdvisoryEngine::default();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || engine.health(f64::from(i) * 60.0).unwrap())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().is_ok());
        }
    }
}
