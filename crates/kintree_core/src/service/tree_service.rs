//! Tree view use-case service.
//!
//! # Responsibility
//! - Resolve the root for "select person" and "reset" requests.
//! - Bundle the built hierarchy with the statistics shown next to it.
//!
//! # Invariants
//! - An unknown requested root falls back to the default root; it is never
//!   surfaced as an error.
//! - An empty registry is always reported as `EmptyRegistry`.

use crate::hierarchy::builder::{build_hierarchy, select_default_root, HierarchyResult};
use crate::hierarchy::node::HierarchyNode;
use crate::hierarchy::stats::{registry_stats, RegistryStats};
use crate::model::person::PersonId;
use crate::registry::person_registry::PersonRegistry;
use log::{info, warn};
use std::time::Instant;

/// Everything a renderer and statistics panel need for one rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeView {
    /// Root the hierarchy was actually built from.
    pub root_id: PersonId,
    pub hierarchy: HierarchyNode,
    pub stats: RegistryStats,
    /// True when the requested root was unknown and the default was used.
    pub fell_back: bool,
}

/// Tree view facade over one registry snapshot.
pub struct TreeService<'r> {
    registry: &'r PersonRegistry,
}

impl<'r> TreeService<'r> {
    /// Creates service over a registry snapshot.
    pub fn new(registry: &'r PersonRegistry) -> Self {
        Self { registry }
    }

    /// Builds the view for an explicit root or, with `None`, the default root.
    ///
    /// # Errors
    /// - `EmptyRegistry` when there is nobody to show.
    pub fn render_view(&self, requested_root: Option<&PersonId>) -> HierarchyResult<TreeView> {
        let started_at = Instant::now();
        let (root_id, fell_back) = match self.resolve_root(requested_root) {
            Ok(resolved) => resolved,
            Err(err) => {
                info!("event=tree_render module=hierarchy status=empty error={err}");
                return Err(err);
            }
        };
        let hierarchy = build_hierarchy(self.registry, &root_id)?;
        let stats = registry_stats(self.registry);

        info!(
            "event=tree_render module=hierarchy status=ok root_id={} nodes={} generations={} duration_ms={}",
            root_id,
            hierarchy.node_count(),
            stats.generations,
            started_at.elapsed().as_millis()
        );

        Ok(TreeView {
            root_id,
            hierarchy,
            stats,
            fell_back,
        })
    }

    /// Current statistics without building a tree.
    pub fn stats(&self) -> RegistryStats {
        registry_stats(self.registry)
    }

    fn resolve_root(&self, requested_root: Option<&PersonId>) -> HierarchyResult<(PersonId, bool)> {
        match requested_root {
            Some(id) if self.registry.contains(id) => Ok((id.clone(), false)),
            Some(id) => {
                let default_root = select_default_root(self.registry)?;
                warn!(
                    "event=tree_render module=hierarchy status=fallback requested_root={} root_id={}",
                    id, default_root
                );
                Ok((default_root, true))
            }
            None => select_default_root(self.registry).map(|root_id| (root_id, false)),
        }
    }
}
