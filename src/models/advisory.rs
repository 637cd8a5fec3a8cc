//! Advisory output models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health severity derived from the AQI bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeverityLevel {
    /// AQI 0-50
    Safe,
    /// AQI 51-100
    Moderate,
    /// AQI 101-150
    UnhealthySensitive,
    /// AQI above 150
    Unhealthy,
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityLevel::Safe => write!(f, "Safe"),
            SeverityLevel::Moderate => write!(f, "Moderate"),
            SeverityLevel::UnhealthySensitive => write!(f, "Unhealthy for Sensitive Groups"),
            SeverityLevel::Unhealthy => write!(f, "Unhealthy"),
        }
    }
}

/// Health advisory for one AQI value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advisory {
    pub severity_level: SeverityLevel,
    pub title: String,
    /// Guidance lines in display order
    pub guidance_lines: Vec<String>,
    /// Short action tags, distinct
    pub action_tags: Vec<String>,
    pub alerts: Vec<String>,
}

/// Agricultural advisory for one reading
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CropAdvisory {
    pub air_quality_impact: String,
    pub irrigation: String,
    pub fertilization: String,
    pub pest_control: String,
    pub planting: String,
    pub harvesting: String,
    /// Appended in rule order: air quality, temperature, humidity, season
    pub recommendations: Vec<String>,
    /// Urgent lines, same ordering as recommendations
    pub alerts: Vec<String>,
}

impl CropAdvisory {
    #[must_use]
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }
}
