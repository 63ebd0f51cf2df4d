use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::profile::ProfileId;
use crate::route::option::RouteOption;

/// The ranked outcome of one calculation.
///
/// Options arrive sorted ascending by estimated duration and are not
/// mutated after construction. `restrictions_found` is the applicable
/// count before any per-strategy inflation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub options: Vec<RouteOption>,
    pub restrictions_found: u32,
    pub profile_used: ProfileId,
    pub calculated_at: DateTime<Utc>,
}

impl RouteResponse {
    /// The option with the best blend of time and cost, scored as
    /// `duration + total_cost / 10`. Ties keep the earlier entry of
    /// the duration-sorted list.
    pub fn best_option(&self) -> Option<&RouteOption> {
        let score = |option: &RouteOption| {
            option.estimated_duration as f64 + option.total_estimated_cost() / 10.0
        };

        self.options.iter().fold(None, |best, option| match best {
            Some(held) if score(held) <= score(option) => Some(held),
            _ => Some(option),
        })
    }

    #[inline]
    pub fn has_restrictions(&self) -> bool {
        self.restrictions_found > 0
    }
}
