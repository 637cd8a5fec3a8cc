//! Multi-day air quality outlook
//!
//! Summarizes a run of forecast days: per-day AQI category and trend, how
//! many days fall in each broad bucket, and which day has the cleanest air.

use crate::advisory::AqiCategory;
use crate::models::{ForecastDay, Trend};
use crate::{AirScanError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A forecast day with its derived display values
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutlookDay {
    #[serde(flatten)]
    pub day: ForecastDay,
    pub category: AqiCategory,
    /// Provided trend, or the movement against the previous day
    pub resolved_trend: Trend,
}

/// Summary over a sequence of forecast days
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastOutlook {
    pub days: Vec<OutlookDay>,
    pub good_days: usize,
    pub moderate_days: usize,
    /// Days in any category above Moderate
    pub unhealthy_days: usize,
    /// Index into `days` of the lowest AQI (first wins)
    pub cleanest_day: Option<usize>,
}

fn trend_between(previous: Option<f64>, current: f64) -> Trend {
    match previous {
        Some(previous) if current > previous => Trend::Up,
        Some(previous) if current < previous => Trend::Down,
        _ => Trend::Stable,
    }
}

impl ForecastOutlook {
    pub fn summarize(days: Vec<ForecastDay>) -> Result<Self> {
        for day in &days {
            day.validate()?;
        }

        let mut outlook = ForecastOutlook {
            days: Vec::with_capacity(days.len()),
            good_days: 0,
            moderate_days: 0,
            unhealthy_days: 0,
            cleanest_day: None,
        };

        let mut previous_aqi = None;
        for (index, day) in days.into_iter().enumerate() {
            let category = AqiCategory::from_aqi(day.aqi);
            match category {
                AqiCategory::Good => outlook.good_days += 1,
                AqiCategory::Moderate => outlook.moderate_days += 1,
                _ => outlook.unhealthy_days += 1,
            }

            let is_cleaner = outlook
                .cleanest_day
                .is_none_or(|best: usize| day.aqi < outlook.days[best].day.aqi);
            if is_cleaner {
                outlook.cleanest_day = Some(index);
            }

            let resolved_trend = day
                .trend
                .unwrap_or_else(|| trend_between(previous_aqi, day.aqi));
            previous_aqi = Some(day.aqi);

            outlook.days.push(OutlookDay {
                day,
                category,
                resolved_trend,
            });
        }

        debug!(
            "Summarized {} forecast days: {} good, {} moderate, {} unhealthy",
            outlook.days.len(),
            outlook.good_days,
            outlook.moderate_days,
            outlook.unhealthy_days
        );
        Ok(outlook)
    }

    /// Read a JSON array of forecast days and summarize it
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let days: Vec<ForecastDay> = serde_json::from_str(&contents).map_err(|e| {
            AirScanError::invalid_input(format!(
                "Failed to parse forecast file {}: {e}",
                path.display()
            ))
        })?;
        Self::summarize(days)
    }

    #[must_use]
    pub fn cleanest(&self) -> Option<&OutlookDay> {
        self.cleanest_day.map(|index| &self.days[index])
    }
}
