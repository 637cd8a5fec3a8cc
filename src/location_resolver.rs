//! Location Resolution Module
//!
//! Labels a raw coordinate with the nearest known settlement. Selection uses
//! planar squared distance in degrees, which only has to order points within
//! a bounded region. The reported kilometre distance is for display.

use crate::cities;
use crate::models::{Coordinate, ReferencePoint, ResolvedLocation};
use crate::{AirScanError, Result};
use haversine::{Location as HaversineLocation, Units, distance};
use tracing::debug;

/// Return the reference point closest to `coordinate`
///
/// Exact ties go to the point that appears first in `reference_set`.
pub fn resolve_nearest<'a>(
    coordinate: &Coordinate,
    reference_set: &'a [ReferencePoint],
) -> Result<&'a ReferencePoint> {
    if reference_set.is_empty() {
        return Err(AirScanError::EmptyReferenceSet);
    }
    coordinate.validate()?;

    let mut best = &reference_set[0];
    let mut best_distance = best.squared_distance(coordinate);
    for point in &reference_set[1..] {
        let d = point.squared_distance(coordinate);
        // strict comparison keeps the earliest point on ties
        if d < best_distance {
            best = point;
            best_distance = d;
        }
    }
    Ok(best)
}

/// Nearest-settlement resolver over a fixed reference set
#[derive(Debug, Clone)]
pub struct LocationResolver {
    points: Vec<ReferencePoint>,
}

impl LocationResolver {
    /// Build a resolver; the set must not be empty
    pub fn new(points: Vec<ReferencePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(AirScanError::EmptyReferenceSet);
        }
        Ok(Self { points })
    }

    /// Resolver over the built-in Indian city table
    pub fn india() -> Result<Self> {
        Self::new(cities::reference_set())
    }

    #[must_use]
    pub fn points(&self) -> &[ReferencePoint] {
        &self.points
    }

    /// Resolve a coordinate to its nearest reference point
    pub fn resolve(&self, coordinate: &Coordinate) -> Result<ResolvedLocation> {
        debug!("Resolving coordinate: {}", coordinate.format_coordinates());

        let point = resolve_nearest(coordinate, &self.points)?;
        let distance_km = distance(
            HaversineLocation {
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
            },
            HaversineLocation {
                latitude: point.latitude,
                longitude: point.longitude,
            },
            Units::Kilometers,
        );

        debug!(
            "Resolved location: {} ({:.1} km away)",
            point.label(),
            distance_km
        );

        Ok(ResolvedLocation {
            point: point.clone(),
            distance_km,
        })
    }
}
