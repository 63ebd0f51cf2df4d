use chrono::NaiveTime;
use dotenv::dotenv;

use hauler::fixtures;
use hauler::route::{Engine, Optimisation};

/// Runs the seeded Delhi to Mumbai corridor for a cross-section of
/// the sample fleet and prints the ranked options per run.
fn main() {
    // Load `.env` file
    dotenv().ok();

    #[cfg(feature = "tracing")]
    hauler::util::trace::initialize_tracer();
    #[cfg(not(feature = "tracing"))]
    env_logger::init();

    let store = fixtures::seeded_store();
    let engine = Engine::new(&store, &store);

    let morning = NaiveTime::from_hms_opt(9, 30, 0).expect("valid departure");
    let night = NaiveTime::from_hms_opt(23, 0, 0).expect("valid departure");

    let runs = [
        ("City Runner", fixtures::CITY_RUNNER, Optimisation::Balanced, morning),
        ("Corridor Freighter", fixtures::HEAVY_FREIGHTER, Optimisation::Balanced, morning),
        ("Corridor Freighter under curfew", fixtures::HEAVY_FREIGHTER, Optimisation::Balanced, night),
        ("Corridor Freighter avoiding tolls", fixtures::HEAVY_FREIGHTER, Optimisation::AvoidTolls, morning),
        ("Fuel Tanker", fixtures::FUEL_TANKER, Optimisation::Balanced, morning),
        ("Project Trailer", fixtures::PROJECT_TRAILER, Optimisation::Balanced, morning),
    ];

    for (label, profile, preference, departure) in runs {
        let query = fixtures::delhi_mumbai_query(profile)
            .preferring(preference)
            .departing_at(departure);

        println!("--- {label} ---");

        match engine.calculate(&query) {
            Ok(response) => {
                println!(
                    "{} applicable restrictions, departing {}",
                    response.restrictions_found, departure
                );

                for option in &response.options {
                    println!(
                        "  {:<22} {:>10} {:>12}  fuel {:>9.2}  toll {:>8.2}",
                        option.name,
                        option.formatted_distance(),
                        option.formatted_duration(),
                        option.estimated_fuel_cost,
                        option.estimated_toll_cost
                    );
                }

                if let Some(option) = response.options.first() {
                    for warning in &option.warnings {
                        println!("  ! {warning}");
                    }
                }

                if let Some(best) = response.best_option() {
                    println!(
                        "  recommended: {} ({:.2} total spend)",
                        best.name,
                        best.total_estimated_cost()
                    );
                }
            }
            Err(reason) => println!("Failed to calculate. Reason: {reason}"),
        }

        println!();
    }
}
