//! `AirScan` - Air quality, health and crop advisories for Indian locations
//!
//! This library provides nearest-city resolution for coordinates, rule-based
//! health and agricultural advisories, and a persisted current location.

pub mod advisory;
pub mod cities;
pub mod config;
pub mod context;
pub mod error;
pub mod forecast;
pub mod location_resolver;
pub mod models;
pub mod store;

// Re-export core types for public API
pub use advisory::{AdvisoryEngine, AqiCategory, UnknownSeasonPolicy, evaluate_crop, evaluate_health};
pub use config::AirScanConfig;
pub use context::{GeolocationError, LocationContext, ManualSelection};
pub use error::AirScanError;
pub use forecast::ForecastOutlook;
pub use location_resolver::{LocationResolver, resolve_nearest};
pub use models::{
    Advisory, Coordinate, CropAdvisory, EnvironmentalReading, LocationRecord, ReferencePoint,
    ResolvedLocation, Season, SeverityLevel,
};
pub use store::LocationStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AirScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
