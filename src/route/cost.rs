use crate::profile::TruckType;

/// Rounds a non-negative currency figure half-up to two decimal
/// places.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Estimated fuel spend for a leg of `distance_km`, priced at
/// `fuel_price` per liter and burned at the type's laden mileage.
pub fn fuel_cost(distance_km: f64, truck_type: TruckType, fuel_price: f64) -> f64 {
    let liters = distance_km / truck_type.fuel_efficiency();

    round_half_up(liters * fuel_price)
}

/// Estimated toll spend for a leg of `distance_km` at a flat
/// `toll_rate` per kilometer.
pub fn toll_cost(distance_km: f64, toll_rate: f64) -> f64 {
    round_half_up(distance_km * toll_rate)
}
