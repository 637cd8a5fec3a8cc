//! Data models for `AirScan`
//!
//! - Location: coordinates, reference points and the persisted record
//! - Reading: environmental measurements and seasons
//! - Advisory: health and crop advisory output
//! - Forecast: daily forecast entries

pub mod advisory;
pub mod forecast;
pub mod location;
pub mod reading;

pub use advisory::{Advisory, CropAdvisory, SeverityLevel};
pub use forecast::{ForecastDay, TemperatureRange, Trend};
pub use location::{Coordinate, LocationRecord, ReferencePoint, ResolvedLocation};
pub use reading::{EnvironmentalReading, Season};
