use chrono::{Local, Utc};
use geo::Point;
use itertools::Itertools;
use log::{debug, info};
use measure_time::debug_time;
#[cfg(feature = "tracing")]
use tracing::Level;

use crate::geo::{haversine_km, validate_point};
use crate::profile::ProfileId;
use crate::restriction::find_applicable;
use crate::route::error::{RouteError, ValidationError};
use crate::route::option::RouteOption;
use crate::route::query::RouteQuery;
use crate::route::response::RouteResponse;
use crate::route::strategy::Strategy;
use crate::store::{ProfileStore, RestrictionStore};

/// Tariffs and limits applied to every calculation an engine runs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoutingConfig {
    /// Longest great-circle leg accepted, in kilometers.
    pub max_route_distance: f64,
    /// Fuel price per liter.
    pub fuel_price: f64,
    /// Flat toll rate per kilometer.
    pub toll_rate: f64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        RoutingConfig {
            max_route_distance: 2000.0,
            fuel_price: 95.0,
            toll_rate: 2.5,
        }
    }
}

/// The calculation engine, generic over its two read stores.
///
/// Stateless beyond the borrowed stores and the config, so one engine
/// may serve any number of concurrent calculations. Within a single
/// call the stages run strictly in sequence, each consuming the
/// previous stage's output.
pub struct Engine<'store, P, R>
where
    P: ProfileStore + ?Sized,
    R: RestrictionStore + ?Sized,
{
    profiles: &'store P,
    restrictions: &'store R,
    config: RoutingConfig,
}

impl<'store, P, R> Engine<'store, P, R>
where
    P: ProfileStore + ?Sized,
    R: RestrictionStore + ?Sized,
{
    pub fn new(profiles: &'store P, restrictions: &'store R) -> Self {
        Engine {
            profiles,
            restrictions,
            config: RoutingConfig::default(),
        }
    }

    pub fn with_config(self, config: RoutingConfig) -> Self {
        Engine { config, ..self }
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Runs one full calculation: validate, resolve the profile,
    /// match restrictions, synthesize one option per strategy,
    /// de-duplicate and rank by duration.
    ///
    /// Either a response with at least one option is returned or an
    /// error, never a partial result. Store faults surface verbatim
    /// as [`RouteError::Lookup`], no retries are attempted here.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    pub fn calculate(&self, query: &RouteQuery) -> Result<RouteResponse, RouteError> {
        debug_time!("route calculation");

        let (start, end, profile_id) = self.validate(query)?;

        let profile = self.profiles.truck_profile(profile_id)?;
        debug!(
            "Profile {} resolved as {:?} ({})",
            profile_id, profile.name, profile.truck_type
        );

        // Enforcement windows are tested against the requested
        // departure, or against a single clock sample for the call
        let now = query
            .departure_time
            .unwrap_or_else(|| Local::now().time());

        let applicable = find_applicable(self.restrictions, start, end, &profile, now)
            .map_err(RouteError::Lookup)?;

        let options = Strategy::for_preference(query.preference)
            .into_iter()
            .map(|strategy| {
                RouteOption::synthesize(strategy, start, end, &profile, &applicable, &self.config)
            })
            .unique_by(|option| {
                (
                    option.strategy,
                    option.total_distance.to_bits(),
                    option.estimated_duration,
                )
            })
            .sorted_by_key(|option| option.estimated_duration)
            .collect::<Vec<_>>();

        info!(
            "Synthesised {} options for profile {}, {} applicable restrictions",
            options.len(),
            profile_id,
            applicable.len()
        );

        Ok(RouteResponse {
            options,
            restrictions_found: applicable.len() as u32,
            profile_used: profile_id,
            calculated_at: Utc::now(),
        })
    }

    /// Rejects malformed queries before any store access.
    fn validate(&self, query: &RouteQuery) -> Result<(Point<f64>, Point<f64>, ProfileId), RouteError> {
        let start = query.start.ok_or(ValidationError::MissingStart)?;
        let end = query.end.ok_or(ValidationError::MissingEnd)?;

        validate_point(&start).map_err(ValidationError::from)?;
        validate_point(&end).map_err(ValidationError::from)?;

        let profile_id = query.profile.ok_or(ValidationError::MissingProfile)?;

        let distance = haversine_km(start, end);
        if distance > self.config.max_route_distance {
            return Err(
                ValidationError::RouteTooLong(distance, self.config.max_route_distance).into(),
            );
        }

        Ok((start, end, profile_id))
    }
}
