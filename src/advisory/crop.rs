//! Agricultural advisory rules
//!
//! Four independent rule groups run in a fixed order (air quality,
//! temperature, humidity, season) and append to one [`CropAdvisory`].

use super::conditions::{HumidityLevel, TemperatureImpact};
use crate::Result;
use crate::models::reading::{validate_aqi, validate_humidity, validate_temperature};
use crate::models::{CropAdvisory, EnvironmentalReading, Season, SeverityLevel};

struct AirQualityRule {
    impact: &'static str,
    recommendations: &'static [&'static str],
    alerts: &'static [&'static str],
}

fn air_quality_rule(severity: SeverityLevel) -> AirQualityRule {
    match severity {
        SeverityLevel::Safe => AirQualityRule {
            impact: "Excellent conditions for photosynthesis and crop growth",
            recommendations: &[
                "Optimal time for field operations",
                "Safe for outdoor farm work",
            ],
            alerts: &[],
        },
        SeverityLevel::Moderate => AirQualityRule {
            impact: "Good conditions with minor air quality concerns",
            recommendations: &["Consider timing field work during cleaner air periods"],
            alerts: &[],
        },
        SeverityLevel::UnhealthySensitive => AirQualityRule {
            impact: "Moderate pollution may affect sensitive crops",
            recommendations: &["Avoid spraying operations during high pollution"],
            alerts: &["Monitor crop stress indicators"],
        },
        SeverityLevel::Unhealthy => AirQualityRule {
            impact: "Poor air quality may significantly impact crop health",
            recommendations: &["Postpone non-essential field work until air quality improves"],
            alerts: &[
                "High pollution levels detected - crops may show stress",
                "Consider protective measures for sensitive varieties",
            ],
        },
    }
}

/// Season lookup entry; empty strings mean "no advice"
struct SeasonRule {
    planting: &'static str,
    fertilization: &'static str,
    harvesting: &'static str,
}

fn season_rule(season: Season) -> SeasonRule {
    match season {
        Season::Winter => SeasonRule {
            planting: "Ideal time for wheat, mustard, and winter vegetables",
            fertilization: "Apply organic compost and nitrogen fertilizers",
            harvesting: "",
        },
        Season::Spring => SeasonRule {
            planting: "Prepare for summer crops - cotton, rice, sugarcane",
            fertilization: "Focus on phosphorus and potassium for root development",
            harvesting: "",
        },
        Season::Summer => SeasonRule {
            planting: "",
            fertilization: "Light fertilization with focus on stress tolerance",
            harvesting: "Harvest early morning to avoid heat stress",
        },
        Season::Monsoon => SeasonRule {
            planting: "Perfect time for rice and other kharif crops",
            fertilization: "Balanced NPK fertilizers with good drainage",
            harvesting: "",
        },
    }
}

fn push_all(target: &mut Vec<String>, lines: &[&str]) {
    target.extend(lines.iter().map(|s| (*s).to_string()));
}

fn apply_air_quality(advice: &mut CropAdvisory, aqi: f64) {
    let rule = air_quality_rule(SeverityLevel::from_aqi(aqi));
    advice.air_quality_impact = rule.impact.to_string();
    push_all(&mut advice.recommendations, rule.recommendations);
    push_all(&mut advice.alerts, rule.alerts);
}

fn apply_temperature(advice: &mut CropAdvisory, temperature_celsius: f64) {
    let (irrigation, recommendation, alert) = match TemperatureImpact::classify(temperature_celsius)
    {
        TemperatureImpact::HeatStress => (
            "Increase watering frequency due to high temperatures",
            "Schedule watering during early morning or evening",
            Some("Heat stress risk - provide shade protection if possible"),
        ),
        TemperatureImpact::Cold => (
            "Reduce watering frequency in cool conditions",
            "Protect crops from frost damage",
            Some("Cold weather - monitor for frost formation"),
        ),
        TemperatureImpact::Comfortable => (
            "Maintain regular watering schedule",
            "Optimal temperature range for most crops",
            None,
        ),
    };
    advice.irrigation = irrigation.to_string();
    advice.recommendations.push(recommendation.to_string());
    if let Some(alert) = alert {
        advice.alerts.push(alert.to_string());
    }
}

fn apply_humidity(advice: &mut CropAdvisory, humidity_percent: f64) {
    match HumidityLevel::classify(humidity_percent) {
        HumidityLevel::High => {
            advice.pest_control = "High humidity increases fungal disease risk".to_string();
            push_all(
                &mut advice.recommendations,
                &[
                    "Ensure proper ventilation in greenhouses",
                    "Monitor for early signs of fungal infections",
                ],
            );
            advice
                .alerts
                .push("Fungal disease risk - inspect crops for early infection".to_string());
        }
        HumidityLevel::Dry => {
            advice.pest_control =
                "Low humidity - increase watering and consider mulching".to_string();
            advice
                .recommendations
                .push("Protect crops from excessive water loss".to_string());
        }
        HumidityLevel::Comfortable => {
            advice.pest_control = "Humidity levels are optimal for crop health".to_string();
        }
    }
}

fn apply_season(advice: &mut CropAdvisory, season: Season) {
    let rule = season_rule(season);
    advice.planting = rule.planting.to_string();
    advice.fertilization = rule.fertilization.to_string();
    advice.harvesting = rule.harvesting.to_string();
}

/// Run every rule group; a missing season leaves the season fields empty
pub(crate) fn evaluate_rules(
    aqi: f64,
    temperature_celsius: f64,
    humidity_percent: f64,
    season: Option<Season>,
) -> Result<CropAdvisory> {
    validate_aqi(aqi)?;
    validate_temperature(temperature_celsius)?;
    validate_humidity(humidity_percent)?;

    let mut advice = CropAdvisory::default();
    apply_air_quality(&mut advice, aqi);
    apply_temperature(&mut advice, temperature_celsius);
    apply_humidity(&mut advice, humidity_percent);
    if let Some(season) = season {
        apply_season(&mut advice, season);
    }
    Ok(advice)
}

/// Agricultural advisory for one set of readings
pub fn evaluate_crop(
    aqi: f64,
    temperature_celsius: f64,
    humidity_percent: f64,
    season: Season,
) -> Result<CropAdvisory> {
    evaluate_rules(aqi, temperature_celsius, humidity_percent, Some(season))
}

/// Agricultural advisory for a reading
pub fn evaluate_crop_reading(reading: &EnvironmentalReading) -> Result<CropAdvisory> {
    evaluate_crop(
        reading.aqi,
        reading.temperature_celsius,
        reading.humidity_percent,
        reading.season,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AirScanError;
    use rstest::rstest;

    #[test]
    fn test_clean_winter_day() {
        let advice = evaluate_crop(30.0, 25.0, 50.0, Season::Winter).unwrap();

        assert_eq!(
            advice.air_quality_impact,
            "Excellent conditions for photosynthesis and crop growth"
        );
        assert!(advice.recommendations.contains(&"Optimal time for field operations".to_string()));
        assert!(advice.recommendations.contains(&"Safe for outdoor farm work".to_string()));
        assert!(advice.alerts.is_empty());
        assert_eq!(
            advice.planting,
            "Ideal time for wheat, mustard, and winter vegetables"
        );
        assert_eq!(
            advice.fertilization,
            "Apply organic compost and nitrogen fertilizers"
        );
        assert_eq!(advice.irrigation, "Maintain regular watering schedule");
        assert_eq!(advice.pest_control, "Humidity levels are optimal for crop health");
    }

    #[test]
    fn test_polluted_hot_humid_summer_day() {
        let advice = evaluate_crop(160.0, 36.0, 75.0, Season::Summer).unwrap();

        assert_eq!(
            advice.alerts,
            vec![
                "High pollution levels detected - crops may show stress",
                "Consider protective measures for sensitive varieties",
                "Heat stress risk - provide shade protection if possible",
                "Fungal disease risk - inspect crops for early infection",
            ]
        );
        assert!(!advice.recommendations.is_empty());
        assert_eq!(
            advice.irrigation,
            "Increase watering frequency due to high temperatures"
        );
        assert_eq!(advice.harvesting, "Harvest early morning to avoid heat stress");
        assert!(advice.planting.is_empty());
    }

    #[test]
    fn test_recommendation_order_follows_rule_order() {
        let advice = evaluate_crop(75.0, 5.0, 20.0, Season::Spring).unwrap();
        assert_eq!(
            advice.recommendations,
            vec![
                "Consider timing field work during cleaner air periods",
                "Protect crops from frost damage",
                "Protect crops from excessive water loss",
            ]
        );
        assert_eq!(advice.alerts, vec!["Cold weather - monitor for frost formation"]);
    }

    #[rstest]
    #[case(40.0, 0, 2)]
    #[case(80.0, 0, 1)]
    #[case(120.0, 1, 1)]
    #[case(400.0, 2, 1)]
    fn test_air_quality_band_output(
        #[case] aqi: f64,
        #[case] alerts: usize,
        #[case] recommendations: usize,
    ) {
        // neutral temperature adds one recommendation, neutral humidity none
        let advice = evaluate_crop(aqi, 20.0, 50.0, Season::Monsoon).unwrap();
        assert_eq!(advice.alerts.len(), alerts);
        assert_eq!(advice.recommendations.len(), recommendations + 1);
    }

    #[test]
    fn test_all_seasons_fill_fertilization() {
        for season in Season::ALL {
            let advice = evaluate_crop(50.0, 20.0, 50.0, season).unwrap();
            assert!(!advice.fertilization.is_empty(), "{season} has no fertilization advice");
            assert!(!advice.planting.is_empty() || !advice.harvesting.is_empty());
        }
    }

    #[test]
    fn test_missing_season_leaves_fields_empty() {
        let advice = evaluate_rules(50.0, 20.0, 50.0, None).unwrap();
        assert!(advice.planting.is_empty());
        assert!(advice.fertilization.is_empty());
        assert!(advice.harvesting.is_empty());
        assert!(!advice.air_quality_impact.is_empty());
    }

    #[rstest]
    #[case(-5.0, 20.0, 50.0)]
    #[case(50.0, f64::NAN, 50.0)]
    #[case(50.0, 20.0, 101.0)]
    #[case(50.0, 20.0, -0.1)]
    fn test_invalid_readings(#[case] aqi: f64, #[case] temp: f64, #[case] humidity: f64) {
        assert!(matches!(
            evaluate_crop(aqi, temp, humidity, Season::Winter).unwrap_err(),
            AirScanError::InvalidInput { .. }
        ));
    }

    #[test]
    fn test_reading_and_direct_evaluation_agree() {
        let reading = EnvironmentalReading::new(89.0, 24.0, 65.0, Season::Winter).unwrap();
        assert_eq!(
            evaluate_crop_reading(&reading).unwrap(),
            evaluate_crop(89.0, 24.0, 65.0, Season::Winter).unwrap()
        );
    }
}
