//! Health advisory rules

use crate::Result;
use crate::models::reading::validate_aqi;
use crate::models::{Advisory, SeverityLevel};

/// Above this AQI a precaution alert is raised
pub const HEALTH_ALERT_AQI: f64 = 100.0;
/// Above this AQI an emergency shelter alert is raised
pub const EMERGENCY_ALERT_AQI: f64 = 200.0;

struct HealthTemplate {
    title: &'static str,
    guidance: &'static [&'static str],
    actions: &'static [&'static str],
}

const SAFE: HealthTemplate = HealthTemplate {
    title: "Air Quality is Good",
    guidance: &[
        "Perfect for outdoor activities",
        "Great time for jogging and exercise",
        "All age groups can enjoy outdoors",
        "Windows can be kept open",
    ],
    actions: &["Go for a walk", "Outdoor exercise", "Fresh air activities"],
};

const MODERATE: HealthTemplate = HealthTemplate {
    title: "Moderate Air Quality",
    guidance: &[
        "Sensitive individuals may experience minor symptoms",
        "Generally safe for most people",
        "Consider reducing prolonged outdoor exertion",
        "Moderate outdoor activities are fine",
    ],
    actions: &["Light exercise", "Shorter outdoor duration", "Monitor symptoms"],
};

const UNHEALTHY_SENSITIVE: HealthTemplate = HealthTemplate {
    title: "Unhealthy for Sensitive Groups",
    guidance: &[
        "Children, elderly, and people with respiratory conditions should limit outdoor activities",
        "Reduce prolonged or heavy outdoor exertion",
        "General public can still enjoy outdoor activities with moderation",
        "Keep windows closed",
    ],
    actions: &["Indoor activities", "Wear mask outdoors", "Use air purifier"],
};

const UNHEALTHY: HealthTemplate = HealthTemplate {
    title: "Unhealthy Air Quality",
    guidance: &[
        "Avoid outdoor jogging and exercise",
        "Stay indoors as much as possible",
        "Wear N95 mask when going outside",
        "Keep all windows and doors closed",
        "Use air purifiers indoors",
    ],
    actions: &[
        "Stay indoors",
        "Use N95 masks",
        "Air purification",
        "Avoid exercise",
    ],
};

fn template(severity: SeverityLevel) -> &'static HealthTemplate {
    match severity {
        SeverityLevel::Safe => &SAFE,
        SeverityLevel::Moderate => &MODERATE,
        SeverityLevel::UnhealthySensitive => &UNHEALTHY_SENSITIVE,
        SeverityLevel::Unhealthy => &UNHEALTHY,
    }
}

/// Health advisory for an AQI value
pub fn evaluate_health(aqi: f64) -> Result<Advisory> {
    validate_aqi(aqi)?;

    let severity_level = SeverityLevel::from_aqi(aqi);
    let template = template(severity_level);

    let mut alerts = Vec::new();
    if aqi > HEALTH_ALERT_AQI {
        alerts.push("Health Alert: Take precautions outdoors".to_string());
    }
    if aqi > EMERGENCY_ALERT_AQI {
        alerts.push("Emergency Health Alert - Seek Indoor Shelter".to_string());
    }

    Ok(Advisory {
        severity_level,
        title: template.title.to_string(),
        guidance_lines: template.guidance.iter().map(|s| (*s).to_string()).collect(),
        action_tags: template.actions.iter().map(|s| (*s).to_string()).collect(),
        alerts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AirScanError;
    use rstest::rstest;

    #[rstest]
    #[case(50.0, SeverityLevel::Safe)]
    #[case(51.0, SeverityLevel::Moderate)]
    #[case(100.0, SeverityLevel::Moderate)]
    #[case(101.0, SeverityLevel::UnhealthySensitive)]
    #[case(150.0, SeverityLevel::UnhealthySensitive)]
    #[case(151.0, SeverityLevel::Unhealthy)]
    fn test_band_boundaries(#[case] aqi: f64, #[case] expected: SeverityLevel) {
        assert_eq!(evaluate_health(aqi).unwrap().severity_level, expected);
    }

    #[test]
    fn test_safe_advisory_content() {
        let advisory = evaluate_health(30.0).unwrap();
        assert_eq!(advisory.title, "Air Quality is Good");
        assert_eq!(advisory.guidance_lines.len(), 4);
        assert_eq!(advisory.guidance_lines[0], "Perfect for outdoor activities");
        assert_eq!(
            advisory.action_tags,
            vec!["Go for a walk", "Outdoor exercise", "Fresh air activities"]
        );
        assert!(advisory.alerts.is_empty());
    }

    #[test]
    fn test_unhealthy_advisory_content() {
        let advisory = evaluate_health(180.0).unwrap();
        assert_eq!(advisory.title, "Unhealthy Air Quality");
        assert_eq!(advisory.guidance_lines.len(), 5);
        assert!(advisory.action_tags.contains(&"Use N95 masks".to_string()));
        assert_eq!(advisory.alerts, vec!["Health Alert: Take precautions outdoors"]);
    }

    #[test]
    fn test_alert_thresholds() {
        assert!(evaluate_health(100.0).unwrap().alerts.is_empty());
        assert_eq!(evaluate_health(101.0).unwrap().alerts.len(), 1);
        assert_eq!(evaluate_health(200.0).unwrap().alerts.len(), 1);

        let severe = evaluate_health(201.0).unwrap();
        assert_eq!(severe.alerts.len(), 2);
        assert_eq!(severe.alerts[1], "Emergency Health Alert - Seek Indoor Shelter");
    }

    #[test]
    fn test_action_tags_are_distinct() {
        for severity in [0.0, 75.0, 125.0, 400.0] {
            let tags = evaluate_health(severity).unwrap().action_tags;
            let mut deduped = tags.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), tags.len());
        }
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_invalid_aqi(#[case] aqi: f64) {
        assert!(matches!(
            evaluate_health(aqi).unwrap_err(),
            AirScanError::InvalidInput { .. }
        ));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(evaluate_health(89.0).unwrap(), evaluate_health(89.0).unwrap());
    }
}
