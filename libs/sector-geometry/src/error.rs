//! # Error Types
//!
//! Errors raised while parsing and validating the generator's inputs. Every
//! rejected input produces one of these; nothing is silently clamped.

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while parsing sector parameters.
///
/// ## Example
///
/// ```rust
/// use sector_geometry::{ParamError, SectorParams};
///
/// match SectorParams::parse("0", "0", "50", "4") {
///     Err(ParamError::RadiusFormat { token }) => assert_eq!(token, "50"),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    /// A value that should be a number could not be parsed as one, or is
    /// not finite.
    #[error("invalid {field} '{value}': expected a finite number")]
    Numeric {
        /// Which input was malformed (latitude, longitude, radius, divisions)
        field: &'static str,
        /// The raw token
        value: String,
    },

    /// The radius token does not start with the required marker.
    #[error("invalid radius format '{token}': use R<number> for radius")]
    RadiusFormat {
        /// The raw token
        token: String,
    },

    /// The radius parsed but is not strictly positive.
    #[error("radius must be positive, got {0}")]
    Radius(f64),

    /// The center latitude sits on a pole, where longitude scaling is undefined.
    #[error("latitude {0} is at a pole: longitude scaling is undefined")]
    Latitude(f64),

    /// The division count is not one of the accepted values.
    #[error("divisions must be one of the following: 4, 8, 16, 32, 64 (got {0})")]
    Divisions(i64),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for parameter parsing.
pub type ParamResult<T> = Result<T, ParamError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParamError::Divisions(10);
        assert!(err.to_string().contains("4, 8, 16, 32, 64"));
        assert!(err.to_string().contains("10"));

        let err = ParamError::Numeric {
            field: "latitude",
            value: "north".to_string(),
        };
        assert!(err.to_string().contains("latitude"));
        assert!(err.to_string().contains("north"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ParamError>();
    }
}
