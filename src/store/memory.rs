use std::collections::HashMap;

use log::info;
use rstar::{RTree, AABB};

use crate::geo::BoundingBox;
use crate::profile::{ProfileId, TruckProfile};
use crate::restriction::Restriction;
use crate::store::error::StoreError;
use crate::store::{ProfileStore, RestrictionStore};

/// Immutable in-memory store with a spatial index over restriction
/// anchors.
///
/// Seeded once and shared freely afterwards. Serves as the reference
/// implementation for tests, benches and the demo binary.
pub struct MemoryStore {
    profiles: HashMap<ProfileId, TruckProfile>,
    index: RTree<Restriction>,
}

impl MemoryStore {
    pub fn new(profiles: Vec<TruckProfile>, restrictions: Vec<Restriction>) -> Self {
        info!(
            "Seeding store with {} profiles and {} restrictions",
            profiles.len(),
            restrictions.len()
        );

        MemoryStore {
            profiles: profiles.into_iter().map(|p| (p.id, p)).collect(),
            index: RTree::bulk_load(restrictions),
        }
    }

    pub fn restriction_count(&self) -> usize {
        self.index.size()
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }
}

impl ProfileStore for MemoryStore {
    fn truck_profile(&self, id: ProfileId) -> Result<TruckProfile, StoreError> {
        self.profiles
            .get(&id)
            .filter(|profile| profile.active)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }
}

impl RestrictionStore for MemoryStore {
    fn find_in_bounding_box(&self, bounds: &BoundingBox) -> Result<Vec<Restriction>, StoreError> {
        let (lower, upper) = bounds.corners();
        let envelope = AABB::from_corners(lower, upper);

        Ok(self
            .index
            .locate_in_envelope(&envelope)
            .filter(|restriction| restriction.active)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::TruckType;
    use crate::restriction::RestrictionType;

    fn seeded_store() -> MemoryStore {
        MemoryStore::new(
            vec![
                TruckProfile::new(1, "Active", TruckType::HeavyTruck),
                TruckProfile::new(2, "Retired", TruckType::LightTruck).deactivated(),
            ],
            vec![
                Restriction::new(10, "Inside", 28.5, 77.1, RestrictionType::BridgeHeight),
                Restriction::new(11, "Outside", 19.0, 72.8, RestrictionType::BridgeHeight),
                Restriction::new(12, "Disabled", 28.5, 77.2, RestrictionType::NoEntryZone)
                    .deactivated(),
            ],
        )
    }

    fn delhi_bounds() -> BoundingBox {
        BoundingBox {
            min_lat: 28.0,
            max_lat: 29.0,
            min_lng: 76.5,
            max_lng: 77.5,
        }
    }

    #[test]
    fn envelope_query_returns_only_in_box_records() {
        let store = seeded_store();

        let found = store
            .find_in_bounding_box(&delhi_bounds())
            .expect("query must succeed");

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 10);
    }

    #[test]
    fn inactive_records_are_filtered_at_the_boundary() {
        let store = seeded_store();

        let found = store
            .find_in_bounding_box(&delhi_bounds())
            .expect("query must succeed");

        assert!(found.iter().all(|restriction| restriction.id != 12));
    }

    #[test]
    fn profile_lookup_by_id() {
        let store = seeded_store();

        let profile = store.truck_profile(1).expect("profile must resolve");
        assert_eq!(profile.name, "Active");
    }

    #[test]
    fn missing_profile_is_not_found() {
        let store = seeded_store();

        assert_eq!(store.truck_profile(99), Err(StoreError::NotFound(99)));
    }

    #[test]
    fn inactive_profile_is_not_found() {
        let store = seeded_store();

        assert_eq!(store.truck_profile(2), Err(StoreError::NotFound(2)));
    }
}
