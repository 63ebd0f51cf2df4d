use geo::{line_string, Point};
use serde::{Deserialize, Serialize};
use wkt::ToWkt;

use crate::geo::haversine_km;
use crate::profile::TruckProfile;
use crate::restriction::{Restriction, Severity};
use crate::route::cost::{fuel_cost, round_half_up, toll_cost};
use crate::route::engine::RoutingConfig;
use crate::route::speed::average_speed;
use crate::route::strategy::{Optimisation, Strategy, TrafficLevel};

/// One synthesized candidate route under a named strategy.
///
/// Derived output only, never persisted by the engine. Distance is in
/// kilometers, duration in whole minutes, costs rounded to two
/// decimal places. The geometry is a two-point WKT `LINESTRING`
/// standing in for a provider polyline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteOption {
    pub name: String,
    pub description: String,
    pub strategy: Strategy,

    pub total_distance: f64,
    pub estimated_duration: u32,
    pub estimated_fuel_cost: f64,
    pub estimated_toll_cost: f64,

    pub geometry: String,

    pub restrictions_count: u32,
    pub bypasses_used: u32,
    pub traffic_level: TrafficLevel,

    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl RouteOption {
    /// Builds the option a strategy produces for one leg.
    ///
    /// The shared pipeline: great-circle distance scaled by the
    /// strategy's road factor, duration from the derated average
    /// speed plus the strategy delta, costs from the tariff tables
    /// with the strategy's discounts, then strategy metadata.
    pub fn synthesize(
        strategy: Strategy,
        start: Point<f64>,
        end: Point<f64>,
        profile: &TruckProfile,
        restrictions: &[Restriction],
        config: &RoutingConfig,
    ) -> RouteOption {
        let parameters = strategy.profile();

        let distance = haversine_km(start, end) * parameters.distance_factor;

        // The strategy delta lands after the derating floor and the
        // result is kept positive for the division below
        let derated = average_speed(profile.truck_type, restrictions.len()) as i32;
        let speed = (derated + parameters.speed_delta).max(1);
        let duration = ((distance / speed as f64) * 60.0) as u32;

        let estimated_fuel_cost = round_half_up(
            fuel_cost(distance, profile.truck_type, config.fuel_price) * parameters.fuel_discount,
        );
        let estimated_toll_cost = if parameters.zero_toll {
            0.0
        } else {
            toll_cost(distance, config.toll_rate)
        };

        RouteOption {
            name: parameters.name.to_string(),
            description: parameters.description.to_string(),
            strategy,
            total_distance: distance,
            estimated_duration: duration,
            estimated_fuel_cost,
            estimated_toll_cost,
            geometry: line_string![start.0, end.0].wkt_string(),
            restrictions_count: restrictions.len() as u32 + parameters.extra_restrictions,
            bypasses_used: parameters.bypasses.count(restrictions.len()),
            traffic_level: parameters.traffic,
            warnings: warnings_for(restrictions),
            recommendations: recommendations_for(strategy, restrictions),
        }
    }

    /// The preference vocabulary this option answers to.
    #[inline]
    pub fn optimisation(&self) -> Optimisation {
        self.strategy.optimisation()
    }

    /// Fuel and toll combined.
    #[inline]
    pub fn total_estimated_cost(&self) -> f64 {
        self.estimated_fuel_cost + self.estimated_toll_cost
    }

    /// Duration as "H hours M minutes", dropping the hour part for
    /// sub-hour legs.
    pub fn formatted_duration(&self) -> String {
        let hours = self.estimated_duration / 60;
        let minutes = self.estimated_duration % 60;

        if hours > 0 {
            format!("{} hours {} minutes", hours, minutes)
        } else {
            format!("{} minutes", minutes)
        }
    }

    pub fn formatted_distance(&self) -> String {
        format!("{:.1} km", self.total_distance)
    }
}

/// Restriction-derived advisories shared by every strategy.
fn warnings_for(restrictions: &[Restriction]) -> Vec<String> {
    let mut warnings = Vec::new();

    if restrictions.is_empty() {
        return warnings;
    }

    warnings.push(format!(
        "{} restrictions apply to this vehicle on or near the corridor",
        restrictions.len()
    ));

    if let Some(worst) = restrictions.iter().map(|record| record.severity).max() {
        warnings.push(format!("Highest severity encountered: {}", worst));
    }

    if restrictions.iter().any(|record| record.trucks_prohibited) {
        warnings.push("A truck no-entry zone lies within the route area".to_string());
    }

    if restrictions.iter().any(|record| record.night_restriction) {
        warnings.push("Night movement curfews are in force near this route".to_string());
    }

    warnings
}

fn recommendations_for(strategy: Strategy, restrictions: &[Restriction]) -> Vec<String> {
    let mut recommendations = vec![strategy.profile().advisory.to_string()];

    let mandatory = restrictions
        .iter()
        .any(|record| record.severity >= Severity::High);
    if mandatory {
        recommendations.push(
            "At least one restriction mandates avoidance, plan bypasses before departure"
                .to_string(),
        );
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::TruckType;
    use crate::restriction::RestrictionType;
    use approx::assert_relative_eq;
    use geo::point;

    fn delhi() -> Point<f64> {
        point! { x: 77.2090, y: 28.6139 }
    }

    fn mumbai() -> Point<f64> {
        point! { x: 72.8777, y: 19.0760 }
    }

    fn heavy_truck() -> TruckProfile {
        TruckProfile::new(1, "Heavy", TruckType::HeavyTruck)
            .with_dimensions(3.8, 2.4, 12.0)
            .with_weights(25.0, 10.0)
    }

    #[test]
    fn fastest_option_scales_the_great_circle_distance() {
        let option = RouteOption::synthesize(
            Strategy::Fastest,
            delhi(),
            mumbai(),
            &heavy_truck(),
            &[],
            &RoutingConfig::default(),
        );

        let base = haversine_km(delhi(), mumbai());
        assert_relative_eq!(option.total_distance, base * 1.3);

        // Heavy truck at base 50km/h, no derating and no delta
        let expected_minutes = ((base * 1.3 / 50.0) * 60.0) as u32;
        assert_eq!(option.estimated_duration, expected_minutes);

        assert!(option.estimated_fuel_cost > 0.0);
        assert!(option.estimated_toll_cost > 0.0);
    }

    #[test]
    fn toll_free_zeroes_the_toll_and_inflates_restrictions() {
        let nearby = vec![
            Restriction::new(1, "Span", 28.6, 77.2, RestrictionType::BridgeHeight)
                .with_max_height(3.5),
        ];

        let option = RouteOption::synthesize(
            Strategy::TollFree,
            delhi(),
            mumbai(),
            &heavy_truck(),
            &nearby,
            &RoutingConfig::default(),
        );

        assert_eq!(option.estimated_toll_cost, 0.0);
        assert_eq!(option.restrictions_count, 3);
        assert_eq!(option.bypasses_used, 3);
        assert_eq!(option.traffic_level, TrafficLevel::High);
    }

    #[test]
    fn fuel_efficient_discounts_the_fuel_estimate() {
        let config = RoutingConfig::default();
        let efficient = RouteOption::synthesize(
            Strategy::FuelEfficient,
            delhi(),
            mumbai(),
            &heavy_truck(),
            &[],
            &config,
        );

        let distance = haversine_km(delhi(), mumbai()) * 1.4;
        let undiscounted = fuel_cost(distance, TruckType::HeavyTruck, config.fuel_price);

        assert_relative_eq!(
            efficient.estimated_fuel_cost,
            round_half_up(undiscounted * 0.85)
        );
    }

    #[test]
    fn geometry_is_the_two_point_linestring() {
        let option = RouteOption::synthesize(
            Strategy::Shortest,
            delhi(),
            mumbai(),
            &heavy_truck(),
            &[],
            &RoutingConfig::default(),
        );

        assert_eq!(
            option.geometry,
            line_string![delhi().0, mumbai().0].wkt_string()
        );
    }

    #[test]
    fn warnings_surface_applicable_restrictions() {
        let nearby = vec![
            Restriction::new(1, "No entry", 28.6, 77.2, RestrictionType::NoEntryZone)
                .with_trucks_prohibited()
                .with_severity(Severity::High),
            Restriction::new(2, "Curfew", 28.5, 77.1, RestrictionType::TimeRestriction)
                .with_night_restriction()
                .with_severity(Severity::Medium),
        ];

        let option = RouteOption::synthesize(
            Strategy::Fastest,
            delhi(),
            mumbai(),
            &heavy_truck(),
            &nearby,
            &RoutingConfig::default(),
        );

        assert!(option
            .warnings
            .iter()
            .any(|warning| warning.contains("2 restrictions")));
        assert!(option
            .warnings
            .iter()
            .any(|warning| warning.contains("high")));
        assert!(option
            .warnings
            .iter()
            .any(|warning| warning.contains("no-entry")));
        assert!(option
            .recommendations
            .iter()
            .any(|advice| advice.contains("bypasses")));
    }

    #[test]
    fn unrestricted_options_carry_only_the_strategy_advisory() {
        let option = RouteOption::synthesize(
            Strategy::Fastest,
            delhi(),
            mumbai(),
            &heavy_truck(),
            &[],
            &RoutingConfig::default(),
        );

        assert!(option.warnings.is_empty());
        assert_eq!(option.recommendations.len(), 1);
    }

    #[test]
    fn formatted_figures() {
        let mut option = RouteOption::synthesize(
            Strategy::Fastest,
            delhi(),
            mumbai(),
            &heavy_truck(),
            &[],
            &RoutingConfig::default(),
        );

        option.estimated_duration = 90;
        assert_eq!(option.formatted_duration(), "1 hours 30 minutes");

        option.estimated_duration = 45;
        assert_eq!(option.formatted_duration(), "45 minutes");

        option.total_distance = 123.456;
        assert_eq!(option.formatted_distance(), "123.5 km");
    }
}
