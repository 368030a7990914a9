//! # Sector Geometry
//!
//! Turns a center, a radius and a division count into the two point sets of a
//! sectored circle: the boundary ring and the radial division lines.
//!
//! ## Pipeline
//!
//! ```text
//! raw tokens → SectorParams::parse → circle_points / division_lines
//! ```
//!
//! ## Approximation
//!
//! Displacements are planar: the radius is turned into an angle by dividing
//! by the mean Earth radius, and longitude offsets are stretched by
//! `1 / cos(latitude)`. No ellipsoid, no geodesics, no pole handling.
//!
//! ## Example
//!
//! ```rust
//! use sector_geometry::{circle_points, division_lines, SectorParams};
//!
//! let params = SectorParams::parse("0", "0", "R100", "4").unwrap();
//! let ring = circle_points(params.center(), params.radius_km);
//! let lines = division_lines(params.center(), params.radius_km, params.divisions);
//!
//! assert_eq!(ring.len(), 360);
//! assert_eq!(lines.len(), 4);
//! ```

pub mod circle;
pub mod divisions;
pub mod error;
pub mod params;
pub mod point;

pub use circle::{boundary_point, circle_points};
pub use divisions::{division_lines, DivisionLine};
pub use error::{ParamError, ParamResult};
pub use params::{Divisions, SectorParams};
pub use point::GeoPoint;
