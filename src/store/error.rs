use crate::impl_err;
use crate::profile::ProfileId;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// No active truck profile under the given id.
    NotFound(ProfileId),
    /// The backing store could not be reached or timed out.
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "truck profile {} not found", id),
            StoreError::Unavailable(reason) => write!(f, "store unavailable: {}", reason),
        }
    }
}

impl_err!(StoreError, Store);
