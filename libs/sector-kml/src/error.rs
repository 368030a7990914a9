//! # Error Types
//!
//! Errors raised while persisting a KML document.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing a KML document.
#[derive(Error, Debug)]
pub enum KmlError {
    /// The document could not be rendered to text.
    #[error("failed to render KML: {0}")]
    Format(#[from] std::fmt::Error),

    /// The output file could not be created or written.
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        /// Target path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for KML operations.
pub type KmlResult<T> = Result<T, KmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_path() {
        let err = KmlError::Io {
            path: PathBuf::from("/nowhere/out.kml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/nowhere/out.kml"));
        assert!(msg.contains("no such directory"));
    }
}
