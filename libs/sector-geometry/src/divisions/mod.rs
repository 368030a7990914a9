//! # Division Lines
//!
//! Radial segments from the center to the circle edge, evenly spaced over a
//! full turn.
//!
//! The angle here is measured from east, counter-clockwise: `sin` drives the
//! latitude offset and `cos` the longitude offset, the opposite of the
//! bearing convention in [`crate::circle`]. Both conventions are kept as-is.

use glam::DVec2;
use tracing::debug;

use crate::circle::{angular_radius, latitude_cos};
use crate::params::Divisions;
use crate::point::GeoPoint;

/// A two-point segment: the center followed by a point on the circle edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivisionLine {
    /// Start of the segment, always the circle center.
    pub start: GeoPoint,
    /// End of the segment, on the circle edge.
    pub end: GeoPoint,
}

impl DivisionLine {
    /// Returns both endpoints in drawing order.
    pub fn points(&self) -> [GeoPoint; 2] {
        [self.start, self.end]
    }
}

/// Generates one line per division at angles `i * 360 / divisions`.
///
/// ## Example
///
/// ```rust
/// use sector_geometry::{division_lines, Divisions, GeoPoint};
///
/// let center = GeoPoint::new(5.0, 45.0);
/// let lines = division_lines(center, 10.0, Divisions::new(8).unwrap());
/// assert_eq!(lines.len(), 8);
/// assert!(lines.iter().all(|l| l.start == center));
/// ```
pub fn division_lines(center: GeoPoint, radius_km: f64, divisions: Divisions) -> Vec<DivisionLine> {
    let k = angular_radius(radius_km);
    let lat_cos = latitude_cos(center.lat);
    let count = divisions.get();

    let lines: Vec<DivisionLine> = (0..count)
        .map(|i| {
            let theta = (f64::from(i * 360) / f64::from(count)).to_radians();
            let offset = DVec2::new(
                k * theta.cos().to_degrees() / lat_cos,
                k * theta.sin().to_degrees(),
            );
            DivisionLine {
                start: center,
                end: center.offset(offset),
            }
        })
        .collect();
    debug!(count = lines.len(), "generated division lines");
    lines
}
