//! Genealogy core for kintree.
//! Person registry, hierarchy construction, statistics and search; this
//! crate is the single source of truth for their invariants.

pub mod hierarchy;
pub mod logging;
pub mod model;
pub mod registry;
pub mod search;
pub mod service;

pub use hierarchy::builder::{build_hierarchy, select_default_root, HierarchyError, HierarchyResult};
pub use hierarchy::generations::compute_generation_count;
pub use hierarchy::node::HierarchyNode;
pub use hierarchy::stats::{registry_stats, RegistryStats};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::person::{Gender, Person, PersonId, PersonValidationError};
pub use registry::document::{DocumentError, DocumentResult, RegistryDocument};
pub use registry::person_registry::{PersonRegistry, UpsertOutcome};
pub use search::person_search::{
    search, search_people, SearchOutcome, SearchQuery, MIN_QUERY_CHARS,
};
pub use service::person_service::{PersonDraft, PersonService, PersonServiceError, SaveOutcome};
pub use service::tree_service::{TreeService, TreeView};

/// Minimal health-check API for host integration smoke tests.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
