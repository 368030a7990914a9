//! Geographic point in degrees.

use glam::DVec2;

/// A `(longitude, latitude)` pair in degrees.
///
/// Longitude comes first, matching KML coordinate order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl GeoPoint {
    /// Creates a point from longitude and latitude.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Returns the point as a planar vector `(lon, lat)`.
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.lon, self.lat)
    }

    /// Returns this point moved by `offset` degrees of `(lon, lat)`.
    pub fn offset(self, offset: DVec2) -> Self {
        (self.to_dvec2() + offset).into()
    }
}

impl From<DVec2> for GeoPoint {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}
