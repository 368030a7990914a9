//! # Config Crate
//!
//! Centralized constants for the sectored circle KML generator. Every magic
//! number used by the geometry, the KML writer and the CLI is defined here so
//! the crates downstream stay declarative.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ALLOWED_DIVISIONS, CIRCLE_VERTEX_COUNT, EARTH_RADIUS_KM};
//!
//! // Angular radius (radians) of a 100 km circle
//! let angular = 100.0 / EARTH_RADIUS_KM;
//! assert!(angular < 0.02);
//!
//! assert_eq!(CIRCLE_VERTEX_COUNT, 360);
//! assert!(ALLOWED_DIVISIONS.contains(&16));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Deterministic Output**: Nothing here depends on time or environment
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
