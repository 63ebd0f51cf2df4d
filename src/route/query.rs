use chrono::NaiveTime;
use geo::Point;
use serde::{Deserialize, Serialize};

use crate::profile::ProfileId;
use crate::route::strategy::Optimisation;

/// One route calculation request.
///
/// Ephemeral, lives only for the duration of a single
/// [`Engine::calculate`](crate::route::Engine::calculate) call.
/// Coordinates and the profile reference are optional so an absent
/// value is representable and rejected by validation rather than by
/// the type system of a transport layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteQuery {
    pub start: Option<Point<f64>>,
    pub end: Option<Point<f64>>,
    pub profile: Option<ProfileId>,

    pub preference: Optimisation,
    pub avoid_tolls: bool,
    pub avoid_highways: bool,

    /// Named intermediate stops, echoed through to the caller. The
    /// straight-line geometry proxy does not route via them.
    pub waypoints: Vec<String>,

    /// Time-of-day used for enforcement-window checks. When absent
    /// the engine samples the local clock once per calculation.
    pub departure_time: Option<NaiveTime>,
}

impl RouteQuery {
    pub fn between(start: Point<f64>, end: Point<f64>) -> Self {
        RouteQuery {
            start: Some(start),
            end: Some(end),
            ..RouteQuery::default()
        }
    }

    pub fn for_profile(mut self, profile: ProfileId) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn preferring(mut self, preference: Optimisation) -> Self {
        self.preference = preference;
        self
    }

    pub fn avoiding_tolls(mut self) -> Self {
        self.avoid_tolls = true;
        self
    }

    pub fn avoiding_highways(mut self) -> Self {
        self.avoid_highways = true;
        self
    }

    pub fn via(mut self, waypoints: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.waypoints = waypoints.into_iter().map(Into::into).collect();
        self
    }

    pub fn departing_at(mut self, time: NaiveTime) -> Self {
        self.departure_time = Some(time);
        self
    }
}
