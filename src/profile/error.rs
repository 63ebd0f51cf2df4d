use crate::impl_err;

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// A dimensional or weight field that must be positive was not.
    NonPositive(&'static str, f64),
    /// A field exceeds the road-legal ceiling, (field, value, limit).
    OverLegalLimit(&'static str, f64, f64),
}

impl std::fmt::Display for ProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileError::NonPositive(field, value) => {
                write!(f, "{} must be positive. Given: {}", field, value)
            }
            ProfileError::OverLegalLimit(field, value, limit) => {
                write!(
                    f,
                    "{} of {} exceeds the legal limit of {}",
                    field, value, limit
                )
            }
        }
    }
}

impl_err!(ProfileError, Profile);
