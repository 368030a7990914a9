//! # Sector KML
//!
//! Assembles a sectored circle into a KML 2.2 document and writes it to disk.
//!
//! ## Architecture
//!
//! ```text
//! SectorParams
//!       ↓
//! KmlDocument::sectored_circle (styles + placemarks)
//!       ↓
//! KmlDocument::to_kml (deterministic XML text)
//!       ↓
//! KmlDocument::save (<lat>_<lon>_R<radius>_D<divisions>.kml)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sector_geometry::SectorParams;
//! use sector_kml::{output_file_name, KmlDocument};
//!
//! let params = SectorParams::parse("0", "0", "R100", "4").unwrap();
//! let doc = KmlDocument::sectored_circle(&params);
//!
//! assert_eq!(doc.placemarks.len(), 5);
//! assert_eq!(output_file_name(&params), "0.0_0.0_R100.0_D4.kml");
//! assert!(doc.to_kml().unwrap().contains("<name>Division Line 4</name>"));
//! ```

pub mod color;
pub mod document;
pub mod error;
pub mod naming;
mod writer;

pub use color::KmlColor;
pub use document::{Geometry, KmlDocument, LineStyle, Placemark, PolyStyle, Style};
pub use error::{KmlError, KmlResult};
pub use naming::output_file_name;
