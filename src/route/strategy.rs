use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Qualitative traffic expectation stamped on an option.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum TrafficLevel {
    Low,
    Medium,
    High,
}

/// Caller-facing optimisation preference carried on a query.
///
/// Distinct from [`Strategy`], a preference selects which strategies
/// are synthesised rather than parameterising one itself.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Optimisation {
    Fastest,
    Shortest,
    FuelEfficient,
    AvoidTolls,
    AvoidRestrictions,
    #[default]
    Balanced,
}

/// How bypass counts are attributed to an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BypassPolicy {
    Fixed(u32),
    /// A single bypass whenever any restriction matched.
    WhenRestricted,
}

impl BypassPolicy {
    #[inline]
    pub fn count(&self, restrictions: usize) -> u32 {
        match self {
            BypassPolicy::Fixed(bypasses) => *bypasses,
            BypassPolicy::WhenRestricted => u32::from(restrictions > 0),
        }
    }
}

/// Constant parameters of one synthesis strategy.
///
/// Estimates are heuristic stand-ins for a road-network router, the
/// distance factor converts great-circle distance into a plausible
/// road distance for the class of roads the strategy prefers.
#[derive(Debug, Clone, Copy)]
pub struct StrategyProfile {
    pub name: &'static str,
    pub description: &'static str,
    /// Road distance as a multiple of the great-circle distance.
    pub distance_factor: f64,
    /// Applied after the restriction derating, km/h. May push the
    /// figure below the derating floor.
    pub speed_delta: i32,
    /// Multiplier on the fuel estimate.
    pub fuel_discount: f64,
    /// Toll forced to zero regardless of distance.
    pub zero_toll: bool,
    /// Restrictions reported beyond the matched count, local-road
    /// strategies encounter more enforcement points.
    pub extra_restrictions: u32,
    pub bypasses: BypassPolicy,
    pub traffic: TrafficLevel,
    /// Standing advisory attached to every option of this strategy.
    pub advisory: &'static str,
}

/// The synthesis strategies an engine can produce options under.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Strategy {
    Fastest,
    Shortest,
    FuelEfficient,
    TollFree,
}

impl Strategy {
    /// The constant parameter row for this strategy. Adding a
    /// strategy is one variant plus one arm here.
    pub const fn profile(&self) -> StrategyProfile {
        match self {
            Strategy::Fastest => StrategyProfile {
                name: "Fastest Route",
                description: "Optimised for minimum travel time",
                distance_factor: 1.3,
                speed_delta: 0,
                fuel_discount: 1.0,
                zero_toll: false,
                extra_restrictions: 0,
                bypasses: BypassPolicy::WhenRestricted,
                traffic: TrafficLevel::Medium,
                advisory: "Prefer expressway stretches where available",
            },
            Strategy::Shortest => StrategyProfile {
                name: "Shortest Route",
                description: "Optimised for minimum distance",
                distance_factor: 1.15,
                speed_delta: -5,
                fuel_discount: 1.0,
                zero_toll: false,
                extra_restrictions: 0,
                bypasses: BypassPolicy::Fixed(0),
                traffic: TrafficLevel::Low,
                advisory: "Expect slower running on direct roads",
            },
            Strategy::FuelEfficient => StrategyProfile {
                name: "Fuel Efficient Route",
                description: "Optimised for minimum fuel consumption",
                distance_factor: 1.4,
                speed_delta: 5,
                fuel_discount: 0.85,
                zero_toll: false,
                extra_restrictions: 0,
                bypasses: BypassPolicy::Fixed(2),
                traffic: TrafficLevel::Low,
                advisory: "Hold a steady cruising speed to realise the savings",
            },
            Strategy::TollFree => StrategyProfile {
                name: "Toll-Free Route",
                description: "Avoids toll roads and highways",
                distance_factor: 1.6,
                speed_delta: -10,
                fuel_discount: 1.0,
                zero_toll: true,
                extra_restrictions: 2,
                bypasses: BypassPolicy::Fixed(3),
                traffic: TrafficLevel::High,
                advisory: "Local roads add time, plan halts accordingly",
            },
        }
    }

    /// The optimisation tag stamped on options of this strategy.
    pub const fn optimisation(&self) -> Optimisation {
        match self {
            Strategy::Fastest => Optimisation::Fastest,
            Strategy::Shortest => Optimisation::Shortest,
            Strategy::FuelEfficient => Optimisation::FuelEfficient,
            Strategy::TollFree => Optimisation::AvoidTolls,
        }
    }

    /// Which strategies are synthesised for a preference. The
    /// toll-free variant is built only on request, every other
    /// preference receives the standard three.
    pub fn for_preference(preference: Optimisation) -> Vec<Strategy> {
        let mut strategies = vec![
            Strategy::Fastest,
            Strategy::Shortest,
            Strategy::FuelEfficient,
        ];

        if preference == Optimisation::AvoidTolls {
            strategies.push(Strategy::TollFree);
        }

        strategies
    }
}
