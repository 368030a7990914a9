//! Output file naming.

use config::constants::{KML_EXTENSION, RADIUS_PREFIX};
use sector_geometry::SectorParams;

/// Returns `<lat>_<lon>_R<radius>_D<divisions>.kml` for `params`.
///
/// Floats are rendered in float-literal form (`0.0`, `100.0`, `-33.5`) so
/// the name always shows a decimal point.
///
/// ## Example
///
/// ```rust
/// use sector_geometry::SectorParams;
/// use sector_kml::output_file_name;
///
/// let params = SectorParams::parse("-33.5", "151", "R2.5", "8").unwrap();
/// assert_eq!(output_file_name(&params), "-33.5_151.0_R2.5_D8.kml");
/// ```
pub fn output_file_name(params: &SectorParams) -> String {
    format!(
        "{:?}_{:?}_{}{:?}_D{}.{}",
        params.latitude,
        params.longitude,
        RADIUS_PREFIX,
        params.radius_km,
        params.divisions,
        KML_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_name() {
        let params = SectorParams::parse("0", "0", "R100", "4").unwrap();
        assert_eq!(output_file_name(&params), "0.0_0.0_R100.0_D4.kml");
    }

    #[test]
    fn test_fractional_name() {
        let params = SectorParams::parse("51.5074", "-0.1278", "R0.75", "64").unwrap();
        assert_eq!(output_file_name(&params), "51.5074_-0.1278_R0.75_D64.kml");
    }

    #[test]
    fn test_exponent_range_name() {
        let params = SectorParams::parse("0.00001", "0", "R1e20", "4").unwrap();
        assert_eq!(output_file_name(&params), "1e-5_0.0_R1e20_D4.kml");
    }

    #[test]
    fn test_equivalent_tokens_share_a_name() {
        let a = SectorParams::parse("10", "20", "R5", "16").unwrap();
        let b = SectorParams::parse("10.0", "20.00", "R5.0", "16").unwrap();
        assert_eq!(output_file_name(&a), output_file_name(&b));
    }
}
