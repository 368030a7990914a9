//! KML colors.
//!
//! KML writes colors as eight hex digits in `aabbggrr` order, the reverse of
//! the usual `#rrggbb` web notation.

use std::fmt;

/// An opaque-or-not RGBA color rendered in KML byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmlColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl KmlColor {
    /// Fully opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }
}

impl From<(u8, u8, u8)> for KmlColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl fmt::Display for KmlColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}{:02x}", self.a, self.b, self.g, self.r)
    }
}
