use geo::Point;

use crate::geo::error::GeoError;
use crate::geo::EARTH_RADIUS_KM;

/// Great-circle distance between two points in kilometers,
/// by the haversine formula over [`EARTH_RADIUS_KM`].
///
/// Pure and total over finite coordinates. Callers validate
/// their inputs first, see [`validate_point`].
pub fn haversine_km(from: Point<f64>, to: Point<f64>) -> f64 {
    let (from_lng, from_lat) = from.x_y();
    let (to_lng, to_lat) = to.x_y();

    let delta_lat = (to_lat - from_lat).to_radians();
    let delta_lng = (to_lng - from_lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from_lat.to_radians().cos() * to_lat.to_radians().cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Verifies a point holds a finite latitude within -90..90 and a
/// finite longitude within -180..180.
pub fn validate_point(point: &Point<f64>) -> Result<(), GeoError> {
    let (lng, lat) = point.x_y();

    if !lat.is_finite() || !(-90f64..=90f64).contains(&lat) {
        return Err(GeoError::InvalidCoordinate(format!(
            "latitude must be between -90 and 90. Given: {}",
            lat
        )));
    }

    if !lng.is_finite() || !(-180f64..=180f64).contains(&lng) {
        return Err(GeoError::InvalidCoordinate(format!(
            "longitude must be between -180 and 180. Given: {}",
            lng
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::point;

    #[test]
    fn zero_distance() {
        let delhi = point! { x: 77.2090, y: 28.6139 };
        assert_relative_eq!(haversine_km(delhi, delhi), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        let origin = point! { x: 0.0, y: 0.0 };
        let east = point! { x: 1.0, y: 0.0 };

        // R * 1 degree in radians
        assert_relative_eq!(
            haversine_km(origin, east),
            111.195,
            max_relative = 1e-4
        );
    }

    #[test]
    fn delhi_to_mumbai() {
        let delhi = point! { x: 77.2090, y: 28.6139 };
        let mumbai = point! { x: 72.8777, y: 19.0760 };

        let distance = haversine_km(delhi, mumbai);
        assert_relative_eq!(distance, 1148.0, max_relative = 1e-3);
    }

    #[test]
    fn symmetric() {
        let delhi = point! { x: 77.2090, y: 28.6139 };
        let mumbai = point! { x: 72.8777, y: 19.0760 };

        assert_relative_eq!(
            haversine_km(delhi, mumbai),
            haversine_km(mumbai, delhi)
        );
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let point = point! { x: 77.0, y: 91.0 };
        assert!(validate_point(&point).is_err());
    }

    #[test]
    fn rejects_non_finite_longitude() {
        let point = point! { x: f64::NAN, y: 28.0 };
        assert!(validate_point(&point).is_err());
    }

    #[test]
    fn accepts_interior_coordinates() {
        let point = point! { x: 77.2090, y: 28.6139 };
        assert!(validate_point(&point).is_ok());
    }
}
