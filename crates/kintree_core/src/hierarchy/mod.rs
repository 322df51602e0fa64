//! Hierarchy engine: flat registry to rooted tree.
//!
//! # Responsibility
//! - Choose a default root and expand a cycle-free tree from any root.
//! - Derive aggregates shown next to the tree (counts, generation depth).
//!
//! # Invariants
//! - Every operation is a pure function of the registry snapshot it is given.
//! - A person appears at most once in any built tree, even on cyclic data.
//! - Children keep registry order; no other sort key is applied.

pub mod builder;
pub mod generations;
pub mod node;
pub mod stats;
