//! Route option synthesis and the calculation engine.
//!
//! Each [`Strategy`] is a declarative heuristic standing in for a
//! road-network optimizer; swapping in a real router keeps the
//! strategy-to-option seam and replaces the distance, speed and cost
//! derivations behind it.

#[doc(hidden)]
pub mod cost;
#[doc(hidden)]
pub mod engine;
#[doc(hidden)]
pub mod error;
#[doc(hidden)]
pub mod option;
#[doc(hidden)]
pub mod query;
#[doc(hidden)]
pub mod response;
#[doc(hidden)]
pub mod speed;
#[doc(hidden)]
pub mod strategy;

#[doc(inline)]
pub use cost::{fuel_cost, toll_cost};
#[doc(inline)]
pub use engine::{Engine, RoutingConfig};
#[doc(inline)]
pub use error::{RouteError, ValidationError};
#[doc(inline)]
pub use option::RouteOption;
#[doc(inline)]
pub use query::RouteQuery;
#[doc(inline)]
pub use response::RouteResponse;
#[doc(inline)]
pub use speed::average_speed;
#[doc(inline)]
pub use strategy::{BypassPolicy, Optimisation, Strategy, StrategyProfile, TrafficLevel};
