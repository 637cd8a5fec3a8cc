//! Location models: raw coordinates, reference points and the persisted record

use crate::{AirScanError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Country attached to every record produced by this crate
pub const DEFAULT_COUNTRY: &str = "India";

/// Raw coordinate from a location capability or a manual selection
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Reported accuracy radius in meters
    pub precision_meters: Option<f64>,
}

impl Coordinate {
    /// Create a coordinate without precision information
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            precision_meters: None,
        }
    }

    /// Attach a precision radius in meters
    #[must_use]
    pub fn with_precision(mut self, precision_meters: f64) -> Self {
        self.precision_meters = Some(precision_meters);
        self
    }

    /// Check that latitude and longitude are finite and within range
    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(AirScanError::invalid_input(format!(
                "latitude must be within [-90, 90], got {}",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(AirScanError::invalid_input(format!(
                "longitude must be within [-180, 180], got {}",
                self.longitude
            )));
        }
        if let Some(precision) = self.precision_meters {
            if !precision.is_finite() || precision < 0.0 {
                return Err(AirScanError::invalid_input(format!(
                    "precision must be a non-negative number of meters, got {precision}"
                )));
            }
        }
        Ok(())
    }

    /// Format coordinate as a short string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A known settlement in the reference set
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReferencePoint {
    /// Settlement name
    pub name: String,
    /// State or territory
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ReferencePoint {
    #[must_use]
    pub fn new(name: &str, region: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.to_string(),
            region: region.to_string(),
            latitude,
            longitude,
        }
    }

    /// Planar squared distance in degrees to a coordinate
    #[must_use]
    pub fn squared_distance(&self, coordinate: &Coordinate) -> f64 {
        let d_lat = self.latitude - coordinate.latitude;
        let d_lng = self.longitude - coordinate.longitude;
        d_lat * d_lat + d_lng * d_lng
    }

    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// "City, State" label
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.region)
    }
}

/// Outcome of a nearest-point lookup
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResolvedLocation {
    /// The selected reference point
    pub point: ReferencePoint,
    /// Great-circle distance from the query to the point, display only
    pub distance_km: f64,
}

/// The single persisted "current location"
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LocationRecord {
    pub coordinate: Coordinate,
    pub city: String,
    pub state: String,
    pub country: String,
    /// When this record was written
    pub saved_at: DateTime<Utc>,
}

impl LocationRecord {
    /// Build a record for a coordinate labelled with a resolved place
    #[must_use]
    pub fn from_resolution(coordinate: Coordinate, resolved: &ResolvedLocation) -> Self {
        Self {
            coordinate,
            city: resolved.point.name.clone(),
            state: resolved.point.region.clone(),
            country: DEFAULT_COUNTRY.to_string(),
            saved_at: Utc::now(),
        }
    }

    /// "City, State, Country" label
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}, {}, {}", self.city, self.state, self.country)
    }
}
