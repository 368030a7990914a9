//! # Sector Parameters
//!
//! Parses the four raw inputs of the generator (latitude, longitude, radius
//! token and division count) into a validated, immutable [`SectorParams`].
//!
//! ## Token Rules
//!
//! ```text
//! latitude   -> f64, finite, cos(latitude) not ~0 (no poles)
//! longitude  -> f64, finite
//! radius     -> "R" + f64, finite, > 0        e.g. R100, R2.5
//! divisions  -> integer in {4, 8, 16, 32, 64}
//! ```

use std::fmt;

use config::constants::{is_allowed_division, MIN_LATITUDE_COS, RADIUS_PREFIX};
use tracing::debug;

use crate::circle::latitude_cos;
use crate::error::{ParamError, ParamResult};
use crate::point::GeoPoint;

// =============================================================================
// DIVISIONS
// =============================================================================

/// A division count that is guaranteed to be one of the accepted values.
///
/// ## Example
///
/// ```rust
/// use sector_geometry::Divisions;
///
/// assert_eq!(Divisions::new(8).unwrap().get(), 8);
/// assert!(Divisions::new(10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divisions(u32);

impl Divisions {
    /// Validates `count` against the accepted division counts.
    pub fn new(count: i64) -> ParamResult<Self> {
        if !is_allowed_division(count) {
            return Err(ParamError::Divisions(count));
        }
        u32::try_from(count)
            .map(Self)
            .map_err(|_| ParamError::Divisions(count))
    }

    /// Returns the division count.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Divisions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// SECTOR PARAMS
// =============================================================================

/// Validated inputs for one sectored circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorParams {
    /// Center latitude in degrees.
    pub latitude: f64,
    /// Center longitude in degrees.
    pub longitude: f64,
    /// Circle radius in kilometers.
    pub radius_km: f64,
    /// Number of radial division lines.
    pub divisions: Divisions,
}

impl SectorParams {
    /// Builds parameters from already-typed values, applying the same
    /// validation as [`SectorParams::parse`].
    pub fn new(latitude: f64, longitude: f64, radius_km: f64, divisions: Divisions) -> ParamResult<Self> {
        let latitude = finite("latitude", latitude)?;
        let longitude = finite("longitude", longitude)?;
        let radius_km = finite("radius", radius_km)?;

        if latitude_cos(latitude).abs() < MIN_LATITUDE_COS {
            return Err(ParamError::Latitude(latitude));
        }
        if radius_km <= 0.0 {
            return Err(ParamError::Radius(radius_km));
        }

        Ok(Self {
            latitude,
            longitude,
            radius_km,
            divisions,
        })
    }

    /// Parses the four raw command-line tokens.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use sector_geometry::SectorParams;
    ///
    /// let p = SectorParams::parse("-33.5", "151.25", "R12.5", "16").unwrap();
    /// assert_eq!(p.latitude, -33.5);
    /// assert_eq!(p.radius_km, 12.5);
    /// assert_eq!(p.divisions.get(), 16);
    /// ```
    pub fn parse(latitude: &str, longitude: &str, radius: &str, divisions: &str) -> ParamResult<Self> {
        let lat = parse_f64("latitude", latitude)?;
        let lon = parse_f64("longitude", longitude)?;
        let radius_km = parse_radius(radius)?;
        let count = divisions
            .trim()
            .parse::<i64>()
            .map_err(|_| ParamError::Numeric {
                field: "divisions",
                value: divisions.to_string(),
            })?;
        let divisions = Divisions::new(count)?;

        let params = Self::new(lat, lon, radius_km, divisions)?;
        debug!(
            latitude = params.latitude,
            longitude = params.longitude,
            radius_km = params.radius_km,
            divisions = params.divisions.get(),
            "parsed sector parameters"
        );
        Ok(params)
    }

    /// The circle center as a geographic point.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.longitude, self.latitude)
    }
}

// =============================================================================
// TOKEN HELPERS
// =============================================================================

fn parse_f64(field: &'static str, token: &str) -> ParamResult<f64> {
    token.trim().parse::<f64>().map_err(|_| ParamError::Numeric {
        field,
        value: token.to_string(),
    })
}

fn finite(field: &'static str, value: f64) -> ParamResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParamError::Numeric {
            field,
            value: value.to_string(),
        })
    }
}

/// Strips the radius marker and parses the remainder.
fn parse_radius(token: &str) -> ParamResult<f64> {
    let Some(number) = token.strip_prefix(RADIUS_PREFIX) else {
        return Err(ParamError::RadiusFormat {
            token: token.to_string(),
        });
    };
    parse_f64("radius", number)
}
