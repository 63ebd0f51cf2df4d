use chrono::NaiveTime;
use geo::point;

use crate::profile::{TruckProfile, TruckType};
use crate::restriction::record::{Restriction, RestrictionType};
use crate::restriction::window::TimeWindow;
use crate::restriction::find_applicable;
use crate::store::MemoryStore;

fn corridor_store() -> MemoryStore {
    MemoryStore::new(
        vec![],
        vec![
            // Within the Delhi end of the corridor
            Restriction::new(1, "Low bridge", 28.60, 77.20, RestrictionType::BridgeHeight)
                .with_max_height(3.5),
            Restriction::new(2, "Night curfew", 28.62, 77.18, RestrictionType::TimeRestriction)
                .with_window(TimeWindow::new(hm(22, 0), hm(6, 0)))
                .with_night_restriction(),
            Restriction::new(3, "Bare record", 28.64, 77.22, RestrictionType::UrbanRestriction),
            // Far off the corridor
            Restriction::new(4, "Distant span", 13.08, 80.27, RestrictionType::BridgeWeight)
                .with_max_weight(10.0),
        ],
    )
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid test time")
}

fn tall_truck() -> TruckProfile {
    TruckProfile::new(7, "Tall heavy", TruckType::HeavyTruck)
        .with_dimensions(3.8, 2.4, 12.0)
        .with_weights(25.0, 10.0)
}

#[test_log::test]
fn matches_exceeded_caps_inside_the_region() {
    let store = corridor_store();

    let applicable = find_applicable(
        &store,
        point! { x: 77.2090, y: 28.6139 },
        point! { x: 77.1000, y: 28.5000 },
        &tall_truck(),
        hm(12, 0),
    )
    .expect("store query must succeed");

    assert_eq!(applicable.len(), 1);
    assert_eq!(applicable[0].id, 1);
}

#[test_log::test]
fn window_records_match_only_at_night() {
    let store = corridor_store();
    let start = point! { x: 77.2090, y: 28.6139 };
    let end = point! { x: 77.1000, y: 28.5000 };

    let at_midnight = find_applicable(&store, start, end, &tall_truck(), hm(0, 30))
        .expect("store query must succeed");
    let at_noon = find_applicable(&store, start, end, &tall_truck(), hm(12, 0))
        .expect("store query must succeed");

    assert!(at_midnight.iter().any(|restriction| restriction.id == 2));
    assert!(at_noon.iter().all(|restriction| restriction.id != 2));
}

#[test_log::test]
fn inert_records_are_skipped_silently() {
    let store = corridor_store();

    let applicable = find_applicable(
        &store,
        point! { x: 77.2090, y: 28.6139 },
        point! { x: 77.1000, y: 28.5000 },
        &tall_truck(),
        hm(23, 0),
    )
    .expect("store query must succeed");

    assert!(applicable.iter().all(|restriction| restriction.id != 3));
}

#[test_log::test]
fn region_pre_filter_excludes_distant_records() {
    let store = corridor_store();

    // A truck far over the distant span's weight cap, matched only
    // when the route actually passes nearby
    let applicable = find_applicable(
        &store,
        point! { x: 77.2090, y: 28.6139 },
        point! { x: 77.1000, y: 28.5000 },
        &tall_truck(),
        hm(12, 0),
    )
    .expect("store query must succeed");

    assert!(applicable.iter().all(|restriction| restriction.id != 4));

    let near_chennai = find_applicable(
        &store,
        point! { x: 80.27, y: 13.08 },
        point! { x: 80.20, y: 13.00 },
        &tall_truck(),
        hm(12, 0),
    )
    .expect("store query must succeed");

    assert!(near_chennai.iter().any(|restriction| restriction.id == 4));
}

#[test_log::test]
fn buffer_catches_records_just_outside_the_corner_box() {
    let store = MemoryStore::new(
        vec![],
        vec![
            Restriction::new(1, "Edge case", 28.68, 77.20, RestrictionType::NoEntryZone)
                .with_trucks_prohibited(),
        ],
    );

    // Unbuffered, the record at 28.68 sits north of both endpoints
    let applicable = find_applicable(
        &store,
        point! { x: 77.2090, y: 28.6139 },
        point! { x: 77.1000, y: 28.6000 },
        &tall_truck(),
        hm(12, 0),
    )
    .expect("store query must succeed");

    assert_eq!(applicable.len(), 1);
}
