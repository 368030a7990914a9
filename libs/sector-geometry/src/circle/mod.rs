//! # Circle Boundary
//!
//! Generates the boundary ring of the circle, one vertex per integer degree
//! of bearing.
//!
//! ## Formula
//!
//! For bearing `θ` (0° = north, increasing clockwise):
//!
//! ```text
//! k     = radius_km / EARTH_RADIUS_KM
//! dlat  = k * degrees(cos(θ))
//! dlon  = k * degrees(sin(θ)) / cos(lat)
//! ```
//!
//! Operations are applied in exactly this order so coordinates are
//! reproducible to the last bit.

use config::constants::{CIRCLE_VERTEX_COUNT, EARTH_RADIUS_KM};
use glam::DVec2;
use tracing::debug;

use crate::point::GeoPoint;

/// Angular radius of the circle in radians.
pub(crate) fn angular_radius(radius_km: f64) -> f64 {
    radius_km / EARTH_RADIUS_KM
}

/// Cosine of the center latitude; longitude offsets are divided by it.
pub(crate) fn latitude_cos(latitude: f64) -> f64 {
    latitude.to_radians().cos()
}

/// Returns the boundary point at `bearing_degrees` from `center`.
///
/// ## Example
///
/// ```rust
/// use sector_geometry::{boundary_point, GeoPoint};
///
/// // Bearing 0 is due north: longitude unchanged
/// let p = boundary_point(GeoPoint::new(0.0, 0.0), 100.0, 0.0);
/// assert_eq!(p.lon, 0.0);
/// assert!(p.lat > 0.0);
/// ```
pub fn boundary_point(center: GeoPoint, radius_km: f64, bearing_degrees: f64) -> GeoPoint {
    let k = angular_radius(radius_km);
    let theta = bearing_degrees.to_radians();
    let offset = DVec2::new(
        k * theta.sin().to_degrees() / latitude_cos(center.lat),
        k * theta.cos().to_degrees(),
    );
    center.offset(offset)
}

/// Generates the circle boundary as exactly [`CIRCLE_VERTEX_COUNT`] points.
///
/// The ring is not closed: the first vertex is not repeated at the end.
pub fn circle_points(center: GeoPoint, radius_km: f64) -> Vec<GeoPoint> {
    let points: Vec<GeoPoint> = (0..CIRCLE_VERTEX_COUNT)
        .map(|i| boundary_point(center, radius_km, i as f64))
        .collect();
    debug!(count = points.len(), radius_km, "generated circle boundary");
    points
}

#[cfg(test)]
mod tests;
