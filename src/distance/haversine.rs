//! Haversine great-circle distance.

use crate::models::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers.
///
/// # Examples
///
/// ```
/// use u_tourplan::models::Coordinate;
/// use u_tourplan::distance::haversine;
///
/// // One degree of latitude is about 111.2 km.
/// let d = haversine(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
/// assert!((d - 111.19).abs() < 0.01);
/// ```
pub fn haversine(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let p = Coordinate::new(52.52, 13.405);
        assert_eq!(haversine(p, p), 0.0);
    }

    #[test]
    fn test_haversine_berlin_munich() {
        let berlin = Coordinate::new(52.5200, 13.4050);
        let munich = Coordinate::new(48.1351, 11.5820);
        let d = haversine(berlin, munich);
        assert!((d - 504.0).abs() < 2.0, "got {d}");
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = Coordinate::new(52.5200, 13.4050);
        let b = Coordinate::new(52.4000, 13.0600);
        assert!((haversine(a, b) - haversine(b, a)).abs() < 1e-12);
    }

    #[test]
    fn test_haversine_antipodal() {
        let d = haversine(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}
