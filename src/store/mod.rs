//! Read interfaces over profile and restriction data, with an
//! in-memory reference implementation.

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod memory;

#[doc(inline)]
pub use error::StoreError;
#[doc(inline)]
pub use memory::MemoryStore;

use crate::geo::BoundingBox;
use crate::profile::{ProfileId, TruckProfile};
use crate::restriction::Restriction;

/// Source of truck profiles, keyed by id.
///
/// Implementations surface absent or inactive profiles as
/// [`StoreError::NotFound`] and transport faults as
/// [`StoreError::Unavailable`].
pub trait ProfileStore: Send + Sync {
    fn truck_profile(&self, id: ProfileId) -> Result<TruckProfile, StoreError>;
}

/// Geospatial read access to restriction records.
pub trait RestrictionStore: Send + Sync {
    /// Every active restriction anchored inside `bounds`. Order is
    /// not significant, the caller counts rather than ranks.
    fn find_in_bounding_box(&self, bounds: &BoundingBox) -> Result<Vec<Restriction>, StoreError>;
}
