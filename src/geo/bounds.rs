use geo::Point;
use serde::{Deserialize, Serialize};

use crate::geo::RESTRICTION_SEARCH_BUFFER;

/// Axis-aligned geographic region in degrees.
///
/// Used as the coarse pre-filter when matching restrictions against a
/// route. The region over-selects and precise applicability is
/// decided per-record afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Smallest box containing both corner points.
    pub fn from_corners(a: Point<f64>, b: Point<f64>) -> Self {
        BoundingBox {
            min_lat: a.y().min(b.y()),
            max_lat: a.y().max(b.y()),
            min_lng: a.x().min(b.x()),
            max_lng: a.x().max(b.x()),
        }
    }

    /// Region around a route's endpoints, padded by
    /// [`RESTRICTION_SEARCH_BUFFER`] degrees on every side.
    pub fn around_route(start: Point<f64>, end: Point<f64>) -> Self {
        BoundingBox::from_corners(start, end).buffered(RESTRICTION_SEARCH_BUFFER)
    }

    /// Expands the region by `degrees` on every side.
    pub fn buffered(self, degrees: f64) -> Self {
        BoundingBox {
            min_lat: self.min_lat - degrees,
            max_lat: self.max_lat + degrees,
            min_lng: self.min_lng - degrees,
            max_lng: self.max_lng + degrees,
        }
    }

    /// Inclusive containment on both axes.
    pub fn contains(&self, point: &Point<f64>) -> bool {
        let (lng, lat) = point.x_y();

        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }

    /// Lower-left and upper-right corners, for envelope queries.
    pub fn corners(&self) -> (Point<f64>, Point<f64>) {
        (
            Point::new(self.min_lng, self.min_lat),
            Point::new(self.max_lng, self.max_lat),
        )
    }
}
