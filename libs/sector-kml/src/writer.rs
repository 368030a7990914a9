//! KML text serialization.
//!
//! Elements are written in document order with two-space indentation.
//! Coordinates use `f64`'s shortest round-trip `Display`, so identical
//! documents always produce identical bytes.

use std::fmt::{self, Write};

use config::constants::KML_NAMESPACE;
use sector_geometry::GeoPoint;

use crate::document::{Geometry, KmlDocument, Placemark, Style};

pub(crate) fn write_document<W: Write>(w: &mut W, doc: &KmlDocument) -> fmt::Result {
    writeln!(w, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(w, r#"<kml xmlns="{}">"#, KML_NAMESPACE)?;
    writeln!(w, "  <Document>")?;
    for style in &doc.styles {
        write_style(w, style)?;
    }
    for placemark in &doc.placemarks {
        write_placemark(w, placemark)?;
    }
    writeln!(w, "  </Document>")?;
    writeln!(w, "</kml>")
}

fn write_style<W: Write>(w: &mut W, style: &Style) -> fmt::Result {
    writeln!(w, r#"    <Style id="{}">"#, escape(&style.id))?;
    writeln!(w, "      <LineStyle>")?;
    writeln!(w, "        <color>{}</color>", style.line.color)?;
    writeln!(w, "        <width>{}</width>", style.line.width)?;
    writeln!(w, "      </LineStyle>")?;
    if let Some(poly) = &style.poly {
        writeln!(w, "      <PolyStyle>")?;
        writeln!(w, "        <fill>{}</fill>", u8::from(poly.fill))?;
        writeln!(w, "      </PolyStyle>")?;
    }
    writeln!(w, "    </Style>")
}

fn write_placemark<W: Write>(w: &mut W, placemark: &Placemark) -> fmt::Result {
    writeln!(w, "    <Placemark>")?;
    writeln!(w, "      <name>{}</name>", escape(&placemark.name))?;
    writeln!(w, "      <styleUrl>#{}</styleUrl>", escape(&placemark.style_id))?;
    match &placemark.geometry {
        Geometry::Polygon(ring) => {
            writeln!(w, "      <Polygon>")?;
            writeln!(w, "        <outerBoundaryIs>")?;
            writeln!(w, "          <LinearRing>")?;
            write!(w, "            ")?;
            write_coordinates(w, ring)?;
            writeln!(w, "          </LinearRing>")?;
            writeln!(w, "        </outerBoundaryIs>")?;
            writeln!(w, "      </Polygon>")?;
        }
        Geometry::LineString(points) => {
            writeln!(w, "      <LineString>")?;
            write!(w, "        ")?;
            write_coordinates(w, points)?;
            writeln!(w, "      </LineString>")?;
        }
    }
    writeln!(w, "    </Placemark>")
}

fn write_coordinates<W: Write>(w: &mut W, points: &[GeoPoint]) -> fmt::Result {
    write!(w, "<coordinates>")?;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            write!(w, " ")?;
        }
        write!(w, "{},{},0", p.lon, p.lat)?;
    }
    writeln!(w, "</coordinates>")
}

/// Escapes the five XML special characters.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::KmlColor;
    use crate::document::LineStyle;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_empty_document() {
        let kml = KmlDocument::new().to_kml().unwrap();
        assert!(kml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(kml.contains("<kml xmlns=\"http://www.opengis.net/kml/2.2\">"));
        assert!(kml.trim_end().ends_with("</kml>"));
    }

    #[test]
    fn test_line_string_coordinates() {
        let doc = KmlDocument {
            styles: vec![Style {
                id: "s".to_string(),
                line: LineStyle {
                    color: KmlColor::rgb(0, 255, 0),
                    width: 2.0,
                },
                poly: None,
            }],
            placemarks: vec![Placemark {
                name: "A & B".to_string(),
                style_id: "s".to_string(),
                geometry: Geometry::LineString(vec![
                    GeoPoint::new(0.0, 0.0),
                    GeoPoint::new(1.5, -2.25),
                ]),
            }],
        };
        let kml = doc.to_kml().unwrap();
        assert!(kml.contains("<coordinates>0,0,0 1.5,-2.25,0</coordinates>"));
        assert!(kml.contains("<name>A &amp; B</name>"));
        assert!(kml.contains("<styleUrl>#s</styleUrl>"));
        assert!(kml.contains("<width>2</width>"));
        assert!(!kml.contains("<PolyStyle>"));
    }
}
