use chrono::NaiveTime;
use criterion::criterion_main;

use hauler::fixtures;
use hauler::profile::ProfileId;
use hauler::restriction::find_applicable;
use hauler::route::{Engine, Optimisation};
use hauler::store::ProfileStore;

struct ApplicabilityScenario {
    name: &'static str,
    profile: ProfileId,

    departure: (u32, u32),
    expected_applicable: usize,
}

const MATCH_CASES: [ApplicabilityScenario; 4] = [
    ApplicabilityScenario {
        name: "CITY_RUNNER_CLEAR",
        profile: fixtures::CITY_RUNNER,

        departure: (9, 30),
        expected_applicable: 0,
    },
    ApplicabilityScenario {
        name: "FREIGHTER_DAYTIME",
        profile: fixtures::HEAVY_FREIGHTER,

        departure: (12, 0),
        expected_applicable: 2,
    },
    ApplicabilityScenario {
        name: "FREIGHTER_CURFEW",
        profile: fixtures::HEAVY_FREIGHTER,

        departure: (23, 0),
        expected_applicable: 3,
    },
    ApplicabilityScenario {
        name: "TRAILER_DAYTIME",
        profile: fixtures::PROJECT_TRAILER,

        departure: (12, 0),
        expected_applicable: 4,
    },
];

struct CalculationScenario {
    name: &'static str,
    preference: Optimisation,
    expected_options: usize,
}

const CALCULATION_CASES: [CalculationScenario; 2] = [
    CalculationScenario {
        name: "FREIGHTER_BALANCED",
        preference: Optimisation::Balanced,
        expected_options: 3,
    },
    CalculationScenario {
        name: "FREIGHTER_AVOID_TOLLS",
        preference: Optimisation::AvoidTolls,
        expected_options: 4,
    },
];

fn matcher_benchmark(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("applicability");
    group.significance_level(0.1).sample_size(50);

    let store = fixtures::seeded_store();

    MATCH_CASES.into_iter().for_each(|sc| {
        let profile = store
            .truck_profile(sc.profile)
            .expect("Profile must resolve");
        let departure = NaiveTime::from_hms_opt(sc.departure.0, sc.departure.1, 0)
            .expect("Departure must be valid");

        group.bench_function(format!("match: {}", sc.name), |b| {
            b.iter(|| {
                let applicable = find_applicable(
                    &store,
                    fixtures::delhi(),
                    fixtures::mumbai(),
                    &profile,
                    departure,
                )
                .expect("Match must complete successfully");

                assert_eq!(applicable.len(), sc.expected_applicable);
            })
        });
    });

    group.finish();
}

fn calculation_benchmark(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("calculate");
    group.significance_level(0.1).sample_size(50);

    let store = fixtures::seeded_store();
    let engine = Engine::new(&store, &store);

    let departure = NaiveTime::from_hms_opt(12, 0, 0).expect("Departure must be valid");

    CALCULATION_CASES.into_iter().for_each(|sc| {
        let query = fixtures::delhi_mumbai_query(fixtures::HEAVY_FREIGHTER)
            .preferring(sc.preference)
            .departing_at(departure);

        group.bench_function(format!("calculate: {}", sc.name), |b| {
            b.iter(|| {
                let response = engine
                    .calculate(&query)
                    .expect("Calculation must complete successfully");

                assert_eq!(response.options.len(), sc.expected_options);
            })
        });
    });

    group.finish();
}

criterion::criterion_group!(corridor_benches, matcher_benchmark, calculation_benchmark);
criterion_main!(corridor_benches);
