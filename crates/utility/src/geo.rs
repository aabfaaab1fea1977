/// Semi-major axis of the WGS-84 reference ellipsoid (equatorial radius) in meters.
pub const WGS84_SEMI_MAJOR_AXIS_M: f64 = 6378137.0;
/// Semi-minor axis of the WGS-84 reference ellipsoid (polar radius) in meters.
pub const WGS84_SEMI_MINOR_AXIS_M: f64 = 6356752.3;

pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Radius of curvature of the WGS-84 ellipsoid at the given latitude (in
/// radians), in meters. Equals the semi-major axis at the equator and the
/// semi-minor axis at the poles.
pub fn wgs84_earth_radius(latitude: f64) -> f64 {
    let a = WGS84_SEMI_MAJOR_AXIS_M;
    let b = WGS84_SEMI_MINOR_AXIS_M;
    let (sin, cos) = latitude.sin_cos();

    let numerator = (a * a * cos).powi(2) + (b * b * sin).powi(2);
    let denominator = (a * cos).powi(2) + (b * sin).powi(2);
    (numerator / denominator).sqrt()
}

/// Bounding box around a point, with `half_side_km` kilometers from the point
/// to each side. The earth is approximated locally as a sphere with the WGS-84
/// radius at the given latitude.
///
/// Returns `((min_lat, min_lon), (max_lat, max_lon))` in degrees. Near the
/// poles the longitude bounds diverge, and they are not wrapped at the
/// antimeridian.
pub fn calculate_bounding_box(
    lat: f64,
    lon: f64,
    half_side_km: f64,
) -> ((f64, f64), (f64, f64)) {
    let lat_rad = to_radians(lat);
    let lon_rad = to_radians(lon);
    let half_side = 1000.0 * half_side_km;

    // radius of the earth at the given latitude
    let radius = wgs84_earth_radius(lat_rad);
    // radius of the parallel at the given latitude
    let parallel_radius = radius * lat_rad.cos();

    let min_lat = lat_rad - half_side / radius;
    let max_lat = lat_rad + half_side / radius;
    let min_lon = lon_rad - half_side / parallel_radius;
    let max_lon = lon_rad + half_side / parallel_radius;

    (
        (to_degrees(min_lat), to_degrees(min_lon)),
        (to_degrees(max_lat), to_degrees(max_lon)),
    )
}
