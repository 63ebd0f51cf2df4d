//! Seed data for tests, benches and the demo binary.
//!
//! Models the Delhi to Mumbai freight corridor: a small mixed fleet
//! and the restriction records a carrier would actually hit along
//! NH-48, plus records placed to exercise the region pre-filter and
//! the deactivation path.

use chrono::NaiveTime;
use geo::{point, Point};

use crate::profile::{CargoType, ProfileId, TruckProfile, TruckType};
use crate::restriction::{Restriction, RestrictionType, Severity, TimeWindow};
use crate::route::RouteQuery;
use crate::store::MemoryStore;

/// Sub-tonne city carrier, clears everything on the corridor.
pub const CITY_RUNNER: ProfileId = 1;
/// Rigid 12-tonner on factory defaults.
pub const REGIONAL_CARRIER: ProfileId = 2;
/// 25-tonne heavy rigid, tall and near the width limit.
pub const HEAVY_FREIGHTER: ProfileId = 3;
/// Fuel tanker holding a hazmat permit.
pub const FUEL_TANKER: ProfileId = 4;
/// Articulated project-cargo trailer holding an oversize permit.
pub const PROJECT_TRAILER: ProfileId = 5;

/// New Delhi, Connaught Place.
pub fn delhi() -> Point<f64> {
    point! { x: 77.2090, y: 28.6139 }
}

/// Mumbai, Chhatrapati Shivaji Terminus.
pub fn mumbai() -> Point<f64> {
    point! { x: 72.8777, y: 19.0760 }
}

/// A Delhi to Mumbai request for the given profile, on the default
/// balanced preference.
pub fn delhi_mumbai_query(profile: ProfileId) -> RouteQuery {
    RouteQuery::between(delhi(), mumbai()).for_profile(profile)
}

/// 22:00 to 06:00, the standard urban freight curfew.
pub fn night_curfew() -> TimeWindow {
    TimeWindow::new(
        NaiveTime::from_hms_opt(22, 0, 0).expect("valid fixture time"),
        NaiveTime::from_hms_opt(6, 0, 0).expect("valid fixture time"),
    )
}

/// Five profiles graduating from unrestricted to heavily restricted
/// on the seeded corridor.
pub fn sample_fleet() -> Vec<TruckProfile> {
    vec![
        TruckProfile::new(CITY_RUNNER, "City Runner", TruckType::MiniTruck)
            .with_dimensions(1.9, 1.6, 4.0)
            .with_weights(1.2, 0.8),
        TruckProfile::new(REGIONAL_CARRIER, "Regional Carrier", TruckType::MediumTruck)
            .with_cargo(CargoType::Perishable),
        TruckProfile::new(HEAVY_FREIGHTER, "Corridor Freighter", TruckType::HeavyTruck)
            .with_dimensions(3.8, 2.4, 12.0)
            .with_weights(25.0, 10.2)
            .with_axles(3)
            .with_national_permit(),
        TruckProfile::new(FUEL_TANKER, "Fuel Tanker", TruckType::Tanker)
            .with_dimensions(3.4, 2.4, 11.0)
            .with_weights(18.0, 8.0)
            .with_axles(3)
            .with_cargo(CargoType::Hazardous)
            .with_hazmat_permit(),
        TruckProfile::new(PROJECT_TRAILER, "Project Trailer", TruckType::Trailer)
            .with_dimensions(4.2, 2.5, 16.5)
            .with_weights(40.0, 9.0)
            .with_axles(5)
            .with_cargo(CargoType::Oversized)
            .with_national_permit()
            .with_oversize_permit(),
    ]
}

/// Restriction records on and around the corridor.
///
/// At noon the freighter hits the Minto Bridge clearance and the
/// Vasai creek load rating. A night departure adds the Delhi curfew,
/// crossing the derating threshold. The toll plaza is deliberately
/// inert, the weigh bridge deactivated and the Chennai tunnel out of
/// region.
pub fn corridor_restrictions() -> Vec<Restriction> {
    vec![
        Restriction::new(
            1,
            "Minto Bridge underpass",
            28.632,
            77.221,
            RestrictionType::BridgeHeight,
        )
        .with_max_height(3.5)
        .with_severity(Severity::High),
        Restriction::new(
            2,
            "Vasai creek bridge",
            19.349,
            72.872,
            RestrictionType::BridgeWeight,
        )
        .with_max_weight(20.0)
        .with_severity(Severity::Medium),
        Restriction::new(
            3,
            "Delhi night freight curfew",
            28.610,
            77.205,
            RestrictionType::TimeRestriction,
        )
        .with_window(night_curfew())
        .with_night_restriction()
        .with_severity(Severity::Medium),
        Restriction::new(
            4,
            "Udaipur old city gate",
            24.576,
            73.691,
            RestrictionType::RoadWidth,
        )
        .with_max_width(2.4)
        .with_severity(Severity::High),
        Restriction::new(
            5,
            "Vapi chemical zone",
            20.372,
            72.917,
            RestrictionType::EnvironmentalZone,
        )
        .with_hazmat_prohibited()
        .with_severity(Severity::Critical),
        Restriction::new(
            6,
            "Aravalli ghat climb",
            24.180,
            73.480,
            RestrictionType::NoEntryZone,
        )
        .with_oversize_prohibited()
        .with_severity(Severity::High),
        Restriction::new(
            7,
            "Kherki Daula toll plaza",
            28.405,
            76.983,
            RestrictionType::TollPlaza,
        )
        .with_severity(Severity::Low),
        Restriction::new(
            8,
            "Surat ring road weigh bridge",
            21.170,
            72.831,
            RestrictionType::WeighBridge,
        )
        .with_max_weight(15.0)
        .with_severity(Severity::Medium)
        .deactivated(),
        Restriction::new(
            9,
            "Chennai port tunnel",
            13.082,
            80.275,
            RestrictionType::TunnelHeight,
        )
        .with_max_height(4.0)
        .with_severity(Severity::High),
    ]
}

/// The fleet and corridor records loaded into one [`MemoryStore`].
pub fn seeded_store() -> MemoryStore {
    MemoryStore::new(sample_fleet(), corridor_restrictions())
}
