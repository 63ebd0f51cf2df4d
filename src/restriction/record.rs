use chrono::NaiveTime;
use geo::{Distance, Euclidean, Point};
use rstar::{Envelope, AABB};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::profile::TruckProfile;
use crate::restriction::window::TimeWindow;

pub type RestrictionId = u64;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum RestrictionType {
    /// Low clearance under a bridge deck.
    BridgeHeight,

    /// Load rating of a bridge span.
    BridgeWeight,

    /// Low clearance through a tunnel bore.
    TunnelHeight,

    /// Narrow tunnel bore.
    TunnelWidth,

    /// Narrow carriageway.
    RoadWidth,

    /// Pavement load rating.
    RoadWeight,

    /// Blanket no-entry area.
    NoEntryZone,

    /// Enforced only during a daily window.
    TimeRestriction,

    /// Level crossing with queue and closure delays.
    RailwayCrossing,

    /// Barrier toll collection point.
    TollPlaza,

    /// Mandatory weighment stop.
    WeighBridge,

    /// Emission-controlled area.
    EnvironmentalZone,

    /// Inner-city freight controls.
    UrbanRestriction,

    /// State border checkpost.
    InterstateBorder,
}

/// How strongly a restriction should steer route choice, ordered from
/// advisory to physically impassable.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Severity {
    /// Advisory only.
    Low,
    /// Strong recommendation to avoid.
    Medium,
    /// Mandatory avoidance.
    High,
    /// Physically impassable or a legal violation.
    Critical,
}

/// A geographically anchored rule limiting truck passage.
///
/// Caps are upper bounds, a truck is constrained when its own figure
/// strictly exceeds the cap. Unset caps never constrain. A record
/// carrying no caps, no flags and no window is inert data and will
/// never match any profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Restriction {
    pub id: RestrictionId,
    pub name: String,

    pub latitude: f64,
    pub longitude: f64,

    pub kind: RestrictionType,
    pub severity: Severity,

    /// Clearance cap in meters.
    pub max_height: Option<f64>,
    /// Width cap in meters.
    pub max_width: Option<f64>,
    /// Length cap in meters.
    pub max_length: Option<f64>,
    /// Gross weight cap in tonnes.
    pub max_weight: Option<f64>,
    /// Per-axle load cap in tonnes.
    pub max_axle_load: Option<f64>,

    /// Daily enforcement window, absent means always enforced
    /// (subject to the caps and flags).
    pub window: Option<TimeWindow>,

    pub trucks_prohibited: bool,
    pub hazmat_prohibited: bool,
    pub oversize_prohibited: bool,
    /// Carried through to warnings, the operative mechanism for
    /// nighttime enforcement is `window`.
    pub night_restriction: bool,

    pub active: bool,
}

impl Restriction {
    pub fn new(
        id: RestrictionId,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        kind: RestrictionType,
    ) -> Self {
        Restriction {
            id,
            name: name.into(),
            latitude,
            longitude,
            kind,
            severity: Severity::Low,
            max_height: None,
            max_width: None,
            max_length: None,
            max_weight: None,
            max_axle_load: None,
            window: None,
            trucks_prohibited: false,
            hazmat_prohibited: false,
            oversize_prohibited: false,
            night_restriction: false,
            active: true,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_max_height(mut self, meters: f64) -> Self {
        self.max_height = Some(meters);
        self
    }

    pub fn with_max_width(mut self, meters: f64) -> Self {
        self.max_width = Some(meters);
        self
    }

    pub fn with_max_length(mut self, meters: f64) -> Self {
        self.max_length = Some(meters);
        self
    }

    pub fn with_max_weight(mut self, tonnes: f64) -> Self {
        self.max_weight = Some(tonnes);
        self
    }

    pub fn with_max_axle_load(mut self, tonnes: f64) -> Self {
        self.max_axle_load = Some(tonnes);
        self
    }

    pub fn with_window(mut self, window: TimeWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub fn with_trucks_prohibited(mut self) -> Self {
        self.trucks_prohibited = true;
        self
    }

    pub fn with_hazmat_prohibited(mut self) -> Self {
        self.hazmat_prohibited = true;
        self
    }

    pub fn with_oversize_prohibited(mut self) -> Self {
        self.oversize_prohibited = true;
        self
    }

    pub fn with_night_restriction(mut self) -> Self {
        self.night_restriction = true;
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    /// Anchor position, x is longitude and y is latitude.
    #[inline]
    pub fn location(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// True when the record can never constrain any truck: no caps,
    /// no flags and no enforcement window.
    pub fn is_inert(&self) -> bool {
        self.max_height.is_none()
            && self.max_width.is_none()
            && self.max_length.is_none()
            && self.max_weight.is_none()
            && self.max_axle_load.is_none()
            && self.window.is_none()
            && !self.trucks_prohibited
            && !self.hazmat_prohibited
            && !self.oversize_prohibited
            && !self.night_restriction
    }

    /// Whether this restriction legally constrains `profile` at `now`.
    ///
    /// Independent checks combined by OR: any physical cap strictly
    /// exceeded, a blanket truck prohibition, a hazmat or oversize
    /// prohibition matched against the permits the truck holds, or an
    /// enforcement window containing `now`.
    pub fn applies_to(&self, profile: &TruckProfile, now: NaiveTime) -> bool {
        let cap_exceeded = [
            (self.max_height, profile.height),
            (self.max_width, profile.width),
            (self.max_length, profile.length),
            (self.max_weight, profile.max_weight),
            (self.max_axle_load, profile.max_axle_load),
        ]
        .into_iter()
        .any(|(cap, dimension)| cap.is_some_and(|cap| dimension > cap));

        if cap_exceeded {
            return true;
        }

        if self.trucks_prohibited {
            return true;
        }

        // Permit-gated prohibitions constrain the trucks carrying
        // the corresponding permit
        if self.hazmat_prohibited && profile.has_hazmat_permit {
            return true;
        }

        if self.oversize_prohibited && profile.has_oversize_permit {
            return true;
        }

        self.window.is_some_and(|window| window.contains(now))
    }
}

impl rstar::RTreeObject for Restriction {
    type Envelope = AABB<Point>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.location())
    }
}

impl rstar::PointDistance for Restriction {
    fn distance_2(
        &self,
        point: &<Self::Envelope as Envelope>::Point,
    ) -> <<Self::Envelope as Envelope>::Point as rstar::Point>::Scalar {
        Euclidean.distance(self.location(), *point).powi(2)
    }
}
