//! # Configuration Constants
//!
//! Constants for the sectored circle generator. Geometry parameters, accepted
//! input values and the fixed KML styling are all defined here.
//!
//! ## Categories
//!
//! - **Geometry**: Earth model and tessellation of the circle
//! - **Input**: Accepted division counts and the radius token marker
//! - **Styling**: Stroke color, stroke width and polygon fill
//! - **Output**: Placemark names, file extension and KML namespace

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Mean Earth radius in kilometers.
///
/// The flat-earth approximation converts a radius in kilometers to an angular
/// offset by dividing by this value.
///
/// # Example
///
/// ```rust
/// use config::constants::EARTH_RADIUS_KM;
///
/// let angular_degrees = (100.0 / EARTH_RADIUS_KM).to_degrees();
/// assert!((angular_degrees - 0.8993).abs() < 1e-4);
/// ```
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Number of vertices on the circle boundary.
///
/// One vertex per integer degree of bearing. Independent of the radius and of
/// the division count.
///
/// # Example
///
/// ```rust
/// use config::constants::CIRCLE_VERTEX_COUNT;
///
/// let step_degrees = 360.0 / CIRCLE_VERTEX_COUNT as f64;
/// assert_eq!(step_degrees, 1.0);
/// ```
pub const CIRCLE_VERTEX_COUNT: usize = 360;

/// Smallest `|cos(latitude)|` accepted for a circle center.
///
/// Longitude offsets are divided by `cos(latitude)`, which vanishes at the
/// poles (±90°, 270°, ...). Centers inside that band are rejected; every other
/// latitude is taken as given.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_LATITUDE_COS;
///
/// assert!(90.0_f64.to_radians().cos().abs() < MIN_LATITUDE_COS);
/// assert!(89.999_f64.to_radians().cos().abs() > MIN_LATITUDE_COS);
/// ```
pub const MIN_LATITUDE_COS: f64 = 1e-12;

// =============================================================================
// INPUT CONSTANTS
// =============================================================================

/// Division counts accepted on the command line.
///
/// # Example
///
/// ```rust
/// use config::constants::ALLOWED_DIVISIONS;
///
/// assert!(ALLOWED_DIVISIONS.contains(&8));
/// assert!(!ALLOWED_DIVISIONS.contains(&10));
/// ```
pub const ALLOWED_DIVISIONS: [u32; 5] = [4, 8, 16, 32, 64];

/// Literal marker that must prefix the radius argument (`R100`).
pub const RADIUS_PREFIX: char = 'R';

// =============================================================================
// STYLING CONSTANTS
// =============================================================================

/// Outline color of every entity as `(red, green, blue)`.
///
/// Pure green; alpha is always fully opaque.
pub const STROKE_RGB: (u8, u8, u8) = (0, 255, 0);

/// Outline width of every entity, in KML pixels.
pub const STROKE_WIDTH: f64 = 2.0;

/// Whether the circle polygon is filled.
pub const POLYGON_FILL: bool = false;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Name of the circle placemark.
pub const CIRCLE_PLACEMARK_NAME: &str = "Circular Polygon";

/// Prefix of each division placemark name, followed by a 1-based index.
///
/// # Example
///
/// ```rust
/// use config::constants::DIVISION_PLACEMARK_PREFIX;
///
/// let name = format!("{} {}", DIVISION_PLACEMARK_PREFIX, 1);
/// assert_eq!(name, "Division Line 1");
/// ```
pub const DIVISION_PLACEMARK_PREFIX: &str = "Division Line";

/// File extension of the generated document.
pub const KML_EXTENSION: &str = "kml";

/// XML namespace of KML 2.2 documents.
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks whether `divisions` is one of [`ALLOWED_DIVISIONS`].
///
/// # Example
///
/// ```rust
/// use config::constants::is_allowed_division;
///
/// assert!(is_allowed_division(64));
/// assert!(!is_allowed_division(3));
/// ```
#[inline]
pub fn is_allowed_division(divisions: i64) -> bool {
    ALLOWED_DIVISIONS.iter().any(|&d| i64::from(d) == divisions)
}
