//! Current-location context
//!
//! Owns the "current location" that callers read and update. The record is
//! loaded from the store on startup and replaced in full on every successful
//! change; a failed change leaves both memory and store untouched.

use crate::location_resolver::LocationResolver;
use crate::models::location::DEFAULT_COUNTRY;
use crate::models::{Coordinate, LocationRecord, ResolvedLocation};
use crate::store::LocationStore;
use crate::Result;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Fallback used for fields missing from a manual selection (Delhi)
pub const DEFAULT_LATITUDE: f64 = 28.6139;
pub const DEFAULT_LONGITUDE: f64 = 77.2090;
pub const DEFAULT_CITY: &str = "Delhi";
pub const DEFAULT_STATE: &str = "Delhi";

/// Failure reported by a device location capability
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeolocationError {
    #[error("Geolocation is not supported by this browser")]
    Unsupported,
    #[error("Location access denied by user")]
    PermissionDenied,
    #[error("Location information unavailable")]
    Unavailable,
    #[error("Location request timeout")]
    Timeout,
    #[error("An unknown error occurred")]
    Unknown,
}

impl GeolocationError {
    /// Map a capability error code (1 denied, 2 unavailable, 3 timeout)
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            2 => GeolocationError::Unavailable,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::Unknown,
        }
    }

    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            GeolocationError::Unsupported => 0,
            GeolocationError::PermissionDenied => 1,
            GeolocationError::Unavailable => 2,
            GeolocationError::Timeout => 3,
            GeolocationError::Unknown => -1,
        }
    }
}

/// A manual location pick; missing fields fall back to Delhi
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualSelection {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl ManualSelection {
    fn into_record(self) -> Result<LocationRecord> {
        let coordinate = Coordinate::new(
            self.latitude.unwrap_or(DEFAULT_LATITUDE),
            self.longitude.unwrap_or(DEFAULT_LONGITUDE),
        );
        coordinate.validate()?;
        Ok(LocationRecord {
            coordinate,
            city: self.city.unwrap_or_else(|| DEFAULT_CITY.to_string()),
            state: self.state.unwrap_or_else(|| DEFAULT_STATE.to_string()),
            country: DEFAULT_COUNTRY.to_string(),
            saved_at: Utc::now(),
        })
    }
}

/// The single current location with its backing store
pub struct LocationContext {
    resolver: LocationResolver,
    store: LocationStore,
    current: Option<LocationRecord>,
}

impl LocationContext {
    /// Build the context, reading whatever record the store holds
    pub async fn startup(store: LocationStore, resolver: LocationResolver) -> Result<Self> {
        let current = store.load().await?;
        match &current {
            Some(record) => debug!("Starting with saved location {}", record.label()),
            None => debug!("Starting without a saved location"),
        }
        Ok(Self {
            resolver,
            store,
            current,
        })
    }

    #[must_use]
    pub fn current(&self) -> Option<&LocationRecord> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn resolver(&self) -> &LocationResolver {
        &self.resolver
    }

    /// Label a coordinate with its nearest city and make it current
    pub async fn locate(&mut self, coordinate: Coordinate) -> Result<ResolvedLocation> {
        let resolved = self.resolver.resolve(&coordinate)?;
        let record = LocationRecord::from_resolution(coordinate, &resolved);
        self.replace(record).await?;
        Ok(resolved)
    }

    /// Make a manual selection current
    pub async fn set_manual(&mut self, selection: ManualSelection) -> Result<&LocationRecord> {
        let record = selection.into_record()?;
        self.store.save(&record).await?;
        info!("Current location manually set to {}", record.label());
        Ok(self.current.insert(record))
    }

    /// Forget the current location
    pub async fn clear(&mut self) -> Result<()> {
        self.store.clear().await?;
        self.current = None;
        info!("Cleared saved location");
        Ok(())
    }

    async fn replace(&mut self, record: LocationRecord) -> Result<()> {
        self.store.save(&record).await?;
        info!("Current location set to {}", record.label());
        self.current = Some(record);
        Ok(())
    }
}
