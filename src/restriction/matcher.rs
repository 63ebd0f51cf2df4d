use chrono::NaiveTime;
use geo::Point;
use log::debug;

use crate::geo::BoundingBox;
use crate::profile::TruckProfile;
use crate::restriction::record::Restriction;
use crate::store::{RestrictionStore, StoreError};

/// Selects the restrictions relevant to a truck travelling between
/// `start` and `end` at time-of-day `now`.
///
/// The store is consulted once with the buffered route region, then
/// every candidate is tested against the profile. The region filter
/// over-selects and [`Restriction::applies_to`] makes the precise
/// call. Inert records are reported at debug level and never match.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn find_applicable<S>(
    store: &S,
    start: Point<f64>,
    end: Point<f64>,
    profile: &TruckProfile,
    now: NaiveTime,
) -> Result<Vec<Restriction>, StoreError>
where
    S: RestrictionStore + ?Sized,
{
    let bounds = BoundingBox::around_route(start, end);
    let candidates = store.find_in_bounding_box(&bounds)?;

    debug!(
        "{} candidate restrictions within {:?}",
        candidates.len(),
        bounds
    );

    let applicable = candidates
        .into_iter()
        .filter(|restriction| {
            if restriction.is_inert() {
                debug!(
                    "Restriction {} ({:?}) carries no caps, flags or window. Skipping",
                    restriction.id, restriction.name
                );
                return false;
            }

            restriction.applies_to(profile, now)
        })
        .collect::<Vec<_>>();

    debug!(
        "{} restrictions apply to profile {}",
        applicable.len(),
        profile.id
    );

    Ok(applicable)
}
