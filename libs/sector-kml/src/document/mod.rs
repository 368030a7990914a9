//! # KML Document Model
//!
//! A minimal subset of KML: shared styles referenced by id, and placemarks
//! holding either a polygon or a line string.
//!
//! ## Sectored Circle Layout
//!
//! ```text
//! Document
//! ├── Style "circle"    (green outline, width 2, no fill)
//! ├── Style "division"  (green outline, width 2)
//! ├── Placemark "Circular Polygon"   → Polygon (360 vertices)
//! └── Placemark "Division Line i"    → LineString (center, edge)   × N
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use config::constants::{
    CIRCLE_PLACEMARK_NAME, DIVISION_PLACEMARK_PREFIX, POLYGON_FILL, STROKE_RGB, STROKE_WIDTH,
};
use sector_geometry::{circle_points, division_lines, GeoPoint, SectorParams};
use tracing::info;

use crate::color::KmlColor;
use crate::error::{KmlError, KmlResult};

/// Style id shared by the circle polygon.
pub const CIRCLE_STYLE_ID: &str = "circle";

/// Style id shared by every division line.
pub const DIVISION_STYLE_ID: &str = "division";

// =============================================================================
// STYLES
// =============================================================================

/// Outline style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: KmlColor,
    pub width: f64,
}

/// Polygon interior style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyStyle {
    pub fill: bool,
}

/// A named style that placemarks reference through `styleUrl`.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub id: String,
    pub line: LineStyle,
    pub poly: Option<PolyStyle>,
}

impl Style {
    /// The fixed outline used by every entity of a sectored circle.
    fn stroke() -> LineStyle {
        LineStyle {
            color: KmlColor::from(STROKE_RGB),
            width: STROKE_WIDTH,
        }
    }
}

// =============================================================================
// PLACEMARKS
// =============================================================================

/// Placemark geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Outer boundary ring, written as given.
    Polygon(Vec<GeoPoint>),
    /// Open polyline.
    LineString(Vec<GeoPoint>),
}

impl Geometry {
    /// Number of coordinates carried by the geometry.
    pub fn vertex_count(&self) -> usize {
        match self {
            Geometry::Polygon(ring) => ring.len(),
            Geometry::LineString(points) => points.len(),
        }
    }
}

/// A named, styled geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    pub name: String,
    pub style_id: String,
    pub geometry: Geometry,
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// An in-memory KML document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KmlDocument {
    pub styles: Vec<Style>,
    pub placemarks: Vec<Placemark>,
}

impl KmlDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the circle polygon and its division lines for `params`.
    pub fn sectored_circle(params: &SectorParams) -> Self {
        let center = params.center();
        let mut doc = Self::new();

        doc.styles.push(Style {
            id: CIRCLE_STYLE_ID.to_string(),
            line: Style::stroke(),
            poly: Some(PolyStyle { fill: POLYGON_FILL }),
        });
        doc.styles.push(Style {
            id: DIVISION_STYLE_ID.to_string(),
            line: Style::stroke(),
            poly: None,
        });

        doc.placemarks.push(Placemark {
            name: CIRCLE_PLACEMARK_NAME.to_string(),
            style_id: CIRCLE_STYLE_ID.to_string(),
            geometry: Geometry::Polygon(circle_points(center, params.radius_km)),
        });

        let lines = division_lines(center, params.radius_km, params.divisions);
        for (idx, line) in lines.iter().enumerate() {
            doc.placemarks.push(Placemark {
                name: format!("{} {}", DIVISION_PLACEMARK_PREFIX, idx + 1),
                style_id: DIVISION_STYLE_ID.to_string(),
                geometry: Geometry::LineString(line.points().to_vec()),
            });
        }

        doc
    }

    /// Placemarks holding a polygon.
    pub fn polygons(&self) -> impl Iterator<Item = &Placemark> {
        self.placemarks
            .iter()
            .filter(|p| matches!(p.geometry, Geometry::Polygon(_)))
    }

    /// Placemarks holding a line string.
    pub fn line_strings(&self) -> impl Iterator<Item = &Placemark> {
        self.placemarks
            .iter()
            .filter(|p| matches!(p.geometry, Geometry::LineString(_)))
    }

    /// Serializes the document to KML text.
    ///
    /// Output depends only on the document contents.
    pub fn to_kml(&self) -> KmlResult<String> {
        let mut out = String::new();
        crate::writer::write_document(&mut out, self)?;
        Ok(out)
    }

    /// Creates (or truncates) `path` and writes the document into it.
    ///
    /// The document is fully rendered before the file is opened.
    pub fn save(&self, path: impl AsRef<Path>) -> KmlResult<()> {
        let path = path.as_ref();
        let kml = self.to_kml()?;
        let io_err = |source| KmlError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(kml.as_bytes()).map_err(io_err)?;
        writer.flush().map_err(io_err)?;

        info!(
            path = %path.display(),
            placemarks = self.placemarks.len(),
            bytes = kml.len(),
            "wrote KML document"
        );
        Ok(())
    }
}
