use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::profile::error::ProfileError;

pub type ProfileId = u64;

/// Maximum vehicle height cleared by most bridges on the national
/// network, in meters.
pub const LEGAL_MAX_HEIGHT: f64 = 4.5;
/// Standard carriageway width ceiling, in meters.
pub const LEGAL_MAX_WIDTH: f64 = 2.5;
/// Legal length limit for articulated vehicles, in meters.
pub const LEGAL_MAX_LENGTH: f64 = 18.75;
/// Gross vehicle weight ceiling, in tonnes.
pub const LEGAL_MAX_WEIGHT: f64 = 55.0;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum TruckType {
    /// Sub-tonne pickups and city carriers.
    MiniTruck,

    /// Rigid trucks up to 7.5 tonnes gross.
    LightTruck,

    /// Rigid trucks between 7.5 and 16 tonnes gross.
    MediumTruck,

    /// Rigid trucks between 16 and 25 tonnes gross.
    HeavyTruck,

    /// Rigid trucks above 25 tonnes gross.
    MultiAxle,

    /// Articulated tractor-trailer combinations.
    Trailer,

    /// Container carriers.
    Container,

    /// Liquid bulk transport.
    Tanker,

    /// Open-deck cargo.
    Flatbed,

    /// Cold-chain bodies.
    Refrigerated,
}

impl TruckType {
    /// Sustained highway speed in km/h before any restriction
    /// derating is applied.
    #[inline]
    pub const fn base_speed(&self) -> u32 {
        match self {
            TruckType::MiniTruck => 65,
            TruckType::LightTruck => 60,
            TruckType::MediumTruck => 55,
            TruckType::HeavyTruck => 50,
            TruckType::MultiAxle => 45,
            TruckType::Trailer => 45,
            TruckType::Container => 50,
            TruckType::Tanker => 50,
            TruckType::Flatbed => 50,
            TruckType::Refrigerated => 50,
        }
    }

    /// Typical laden mileage in kilometers per liter.
    #[inline]
    pub const fn fuel_efficiency(&self) -> f64 {
        match self {
            TruckType::MiniTruck => 15.0,
            TruckType::LightTruck => 12.0,
            TruckType::MediumTruck => 8.0,
            TruckType::HeavyTruck => 6.0,
            TruckType::MultiAxle => 4.0,
            TruckType::Trailer => 4.0,
            TruckType::Container => 8.0,
            TruckType::Tanker => 8.0,
            TruckType::Flatbed => 8.0,
            TruckType::Refrigerated => 8.0,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum CargoType {
    General,
    Hazardous,
    Perishable,
    Oversized,
    Liquid,
    Fragile,
    Livestock,
    ConstructionMaterial,
    Container,
    BulkCargo,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum EmissionStandard {
    BsIii,
    BsIv,
    BsVi,
    Electric,
    Cng,
    Lng,
}

/// Physical and permit attributes of one vehicle.
///
/// Immutable for the duration of a calculation, every dimensional
/// field is positive once [`TruckProfile::validate`] has passed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TruckProfile {
    pub id: ProfileId,
    pub name: String,

    /// Overall height in meters.
    pub height: f64,
    /// Overall width in meters.
    pub width: f64,
    /// Overall length in meters.
    pub length: f64,

    /// Laden gross weight in tonnes.
    pub max_weight: f64,
    /// Heaviest single-axle load in tonnes.
    pub max_axle_load: f64,
    pub axles: u8,

    pub truck_type: TruckType,
    pub cargo_type: CargoType,
    pub emission_standard: EmissionStandard,

    pub has_national_permit: bool,
    pub has_oversize_permit: bool,
    pub has_hazmat_permit: bool,

    pub active: bool,
}

impl TruckProfile {
    /// A mid-size rigid profile under the given type. Fixture and
    /// test construction overrides only the fields under test.
    pub fn new(id: ProfileId, name: impl Into<String>, truck_type: TruckType) -> Self {
        TruckProfile {
            id,
            name: name.into(),
            height: 3.2,
            width: 2.3,
            length: 9.5,
            max_weight: 12.0,
            max_axle_load: 6.0,
            axles: 2,
            truck_type,
            cargo_type: CargoType::General,
            emission_standard: EmissionStandard::BsVi,
            has_national_permit: false,
            has_oversize_permit: false,
            has_hazmat_permit: false,
            active: true,
        }
    }

    pub fn with_dimensions(mut self, height: f64, width: f64, length: f64) -> Self {
        self.height = height;
        self.width = width;
        self.length = length;
        self
    }

    pub fn with_weights(mut self, max_weight: f64, max_axle_load: f64) -> Self {
        self.max_weight = max_weight;
        self.max_axle_load = max_axle_load;
        self
    }

    pub fn with_axles(mut self, axles: u8) -> Self {
        self.axles = axles;
        self
    }

    pub fn with_cargo(mut self, cargo_type: CargoType) -> Self {
        self.cargo_type = cargo_type;
        self
    }

    pub fn with_emission_standard(mut self, emission_standard: EmissionStandard) -> Self {
        self.emission_standard = emission_standard;
        self
    }

    pub fn with_national_permit(mut self) -> Self {
        self.has_national_permit = true;
        self
    }

    pub fn with_oversize_permit(mut self) -> Self {
        self.has_oversize_permit = true;
        self
    }

    pub fn with_hazmat_permit(mut self) -> Self {
        self.has_hazmat_permit = true;
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    /// Checks every dimensional field is positive and within the
    /// road-legal ceilings.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let positives = [
            ("height", self.height),
            ("width", self.width),
            ("length", self.length),
            ("max_weight", self.max_weight),
            ("max_axle_load", self.max_axle_load),
        ];

        for (field, value) in positives {
            if !(value > 0.0) {
                return Err(ProfileError::NonPositive(field, value));
            }
        }

        if self.axles == 0 {
            return Err(ProfileError::NonPositive("axles", 0.0));
        }

        let ceilings = [
            ("height", self.height, LEGAL_MAX_HEIGHT),
            ("width", self.width, LEGAL_MAX_WIDTH),
            ("length", self.length, LEGAL_MAX_LENGTH),
            ("max_weight", self.max_weight, LEGAL_MAX_WEIGHT),
        ];

        for (field, value, limit) in ceilings {
            if value > limit {
                return Err(ProfileError::OverLegalLimit(field, value, limit));
            }
        }

        Ok(())
    }
}
