use super::*;
use approx::assert_relative_eq;

#[test]
fn test_vertex_count_is_fixed() {
    for radius in [0.1, 1.0, 100.0, 5000.0] {
        let ring = circle_points(GeoPoint::new(12.0, 34.0), radius);
        assert_eq!(ring.len(), 360, "radius {}", radius);
    }
}

#[test]
fn test_cardinal_points_at_equator() {
    let ring = circle_points(GeoPoint::new(0.0, 0.0), 100.0);
    let d = (100.0_f64 / 6371.0).to_degrees();

    // Bearing 0: north
    assert_relative_eq!(ring[0].lat, d, epsilon = 1e-12);
    assert_relative_eq!(ring[0].lon, 0.0, epsilon = 1e-12);
    // Bearing 90: east
    assert_relative_eq!(ring[90].lon, d, epsilon = 1e-12);
    assert_relative_eq!(ring[90].lat, 0.0, epsilon = 1e-12);
    // Bearing 180: south
    assert_relative_eq!(ring[180].lat, -d, epsilon = 1e-12);
    // Bearing 270: west
    assert_relative_eq!(ring[270].lon, -d, epsilon = 1e-12);
}

#[test]
fn test_longitude_compression() {
    // At 60° the longitude offset doubles
    let center = GeoPoint::new(10.0, 60.0);
    let east = boundary_point(center, 50.0, 90.0);
    let d = angular_radius(50.0).to_degrees();
    assert_relative_eq!(east.lon - center.lon, 2.0 * d, epsilon = 1e-9);
    assert_relative_eq!(east.lat, center.lat, epsilon = 1e-9);
}

#[test]
fn test_points_offset_from_center() {
    let center = GeoPoint::new(-73.5, 40.75);
    let ring = circle_points(center, 25.0);
    let d = angular_radius(25.0).to_degrees();
    let lat_cos = latitude_cos(center.lat);

    for p in &ring {
        // Undo the longitude stretch: every vertex sits on a circle of radius d
        let dx = (p.lon - center.lon) * lat_cos;
        let dy = p.lat - center.lat;
        assert_relative_eq!((dx * dx + dy * dy).sqrt(), d, epsilon = 1e-9);
    }
}

#[test]
fn test_deterministic() {
    let a = circle_points(GeoPoint::new(1.5, 2.5), 42.0);
    let b = circle_points(GeoPoint::new(1.5, 2.5), 42.0);
    assert_eq!(a, b);
}

#[test]
fn test_reference_coordinates_are_bit_exact() {
    let ring = circle_points(GeoPoint::new(0.0, 0.0), 100.0);
    assert_eq!(ring[1], GeoPoint::new(0.015695326184324197, 0.8991846348821871));
    assert_eq!(ring[37], GeoPoint::new(0.5412252530871181, 0.7182301694394558));
    assert_eq!(ring[200], GeoPoint::new(-0.3075861045521947, -0.8450858767951638));

    let ring = circle_points(GeoPoint::new(-122.3321, 47.6062), 12.5);
    assert_eq!(ring[1], GeoPoint::new(-122.32919010624006, 47.71859807936028));
    assert_eq!(ring[37], GeoPoint::new(-122.23175751790157, 47.69597877117993));
    assert_eq!(ring[200], GeoPoint::new(-122.38912607743025, 47.500564265400605));
}
