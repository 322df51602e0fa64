//! Plain counts for the statistics display.

use crate::hierarchy::generations::compute_generation_count;
use crate::model::person::Gender;
use crate::registry::person_registry::PersonRegistry;
use serde::Serialize;

/// Aggregates recomputed after every registry mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub total: usize,
    pub male: usize,
    pub female: usize,
    /// See [`compute_generation_count`].
    pub generations: usize,
}

/// Computes counts by sex and generation depth for one snapshot.
pub fn registry_stats(registry: &PersonRegistry) -> RegistryStats {
    let (male, female) =
        registry
            .people()
            .iter()
            .fold((0, 0), |(male, female), person| match person.gender {
                Gender::Male => (male + 1, female),
                Gender::Female => (male, female + 1),
            });

    RegistryStats {
        total: registry.len(),
        male,
        female,
        generations: compute_generation_count(registry),
    }
}
