//! Restriction records, their time windows and the matcher deciding
//! which records constrain a given truck.

#[doc(hidden)]
pub mod matcher;
#[doc(hidden)]
pub mod record;
#[doc(hidden)]
#[cfg(test)]
mod test;
#[doc(hidden)]
pub mod window;

#[doc(inline)]
pub use matcher::find_applicable;
#[doc(inline)]
pub use record::{Restriction, RestrictionId, RestrictionType, Severity};
#[doc(inline)]
pub use window::TimeWindow;
