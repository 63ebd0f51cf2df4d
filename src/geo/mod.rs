//! Coordinate validation, great-circle distance and the
//! bounding regions used to pre-filter restriction lookups.

/// Earth radius used for all haversine arithmetic, in kilometers.
/// Route estimates are defined against this figure rather than the
/// geodesy-grade mean radius.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Degrees of padding applied around a route's bounding region when
/// searching for nearby restrictions. Roughly 11km at the equator,
/// favouring recall over precision.
pub const RESTRICTION_SEARCH_BUFFER: f64 = 0.1;

#[doc(hidden)]
pub mod bounds;
#[doc(hidden)]
pub mod distance;
#[doc(hidden)]
pub mod error;

#[doc(inline)]
pub use bounds::BoundingBox;
#[doc(inline)]
pub use distance::{haversine_km, validate_point};
#[doc(inline)]
pub use error::GeoError;
