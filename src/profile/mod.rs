//! Vehicle profiles and the closed vocabularies that describe them.

#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod truck;

#[doc(inline)]
pub use error::ProfileError;
#[doc(inline)]
pub use truck::{CargoType, EmissionStandard, ProfileId, TruckProfile, TruckType};
