use crate::geo::GeoError;
use crate::impl_err;
use crate::profile::ProfileId;
use crate::store::StoreError;

/// Rejections raised before any store access.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingStart,
    MissingEnd,
    InvalidCoordinate(String),
    MissingProfile,
    /// Great-circle leg longer than the configured maximum,
    /// (distance, limit) in kilometers.
    RouteTooLong(f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RouteError {
    Validation(ValidationError),
    /// The referenced truck profile is absent or inactive.
    ProfileNotFound(ProfileId),
    /// The backing store failed mid-lookup, surfaced verbatim.
    Lookup(StoreError),
}

impl From<ValidationError> for RouteError {
    fn from(value: ValidationError) -> Self {
        RouteError::Validation(value)
    }
}

impl From<GeoError> for ValidationError {
    fn from(value: GeoError) -> Self {
        match value {
            GeoError::InvalidCoordinate(reason) => ValidationError::InvalidCoordinate(reason),
        }
    }
}

impl From<StoreError> for RouteError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => RouteError::ProfileNotFound(id),
            unavailable => RouteError::Lookup(unavailable),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingStart => write!(f, "start coordinate is required"),
            ValidationError::MissingEnd => write!(f, "end coordinate is required"),
            ValidationError::InvalidCoordinate(reason) => write!(f, "{}", reason),
            ValidationError::MissingProfile => write!(f, "truck profile id is required"),
            ValidationError::RouteTooLong(distance, limit) => write!(
                f,
                "route distance {:.1}km exceeds the maximum of {:.0}km",
                distance, limit
            ),
        }
    }
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteError::Validation(validation) => write!(f, "{}", validation),
            RouteError::ProfileNotFound(id) => write!(f, "truck profile {} not found", id),
            RouteError::Lookup(store) => write!(f, "{}", store),
        }
    }
}

impl_err!(RouteError, Route);
