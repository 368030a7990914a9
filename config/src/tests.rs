//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// GEOMETRY TESTS
// =============================================================================

#[test]
fn test_earth_radius_is_mean_radius() {
    assert_eq!(EARTH_RADIUS_KM, 6371.0);
}

#[test]
fn test_circle_has_one_vertex_per_degree() {
    assert_eq!(CIRCLE_VERTEX_COUNT, 360);
}

// =============================================================================
// INPUT TESTS
// =============================================================================

#[test]
fn test_allowed_divisions_are_powers_of_two() {
    for d in ALLOWED_DIVISIONS {
        assert!(d.is_power_of_two(), "{} should be a power of two", d);
    }
}

#[test]
fn test_allowed_divisions_are_sorted() {
    assert!(ALLOWED_DIVISIONS.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_is_allowed_division() {
    assert!(is_allowed_division(4));
    assert!(is_allowed_division(64));
    assert!(!is_allowed_division(0));
    assert!(!is_allowed_division(10));
    assert!(!is_allowed_division(-4));
    assert!(!is_allowed_division(128));
}

// =============================================================================
// STYLING TESTS
// =============================================================================

#[test]
fn test_stroke_is_green() {
    assert_eq!(STROKE_RGB, (0, 255, 0));
    assert_eq!(STROKE_WIDTH, 2.0);
    assert!(!POLYGON_FILL);
}
