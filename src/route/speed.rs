use crate::profile::TruckType;

/// Slowest average a corridor is ever estimated at, in km/h.
pub const MINIMUM_AVERAGE_SPEED: u32 = 30;

/// Average achievable speed for a truck type over a corridor with
/// `restriction_count` applicable restrictions, in km/h.
///
/// Starts from the type's base speed and derates by 10 km/h on
/// heavily restricted corridors (more than five records) or 5 km/h on
/// moderately restricted ones (more than two), floored at
/// [`MINIMUM_AVERAGE_SPEED`].
pub fn average_speed(truck_type: TruckType, restriction_count: usize) -> u32 {
    let derating = if restriction_count > 5 {
        10
    } else if restriction_count > 2 {
        5
    } else {
        0
    };

    truck_type
        .base_speed()
        .saturating_sub(derating)
        .max(MINIMUM_AVERAGE_SPEED)
}
