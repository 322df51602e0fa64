//! In-memory person registry and its document codec.
//!
//! # Responsibility
//! - Hold an ordered, immutable-by-default snapshot of persons.
//! - Apply last-wins semantics for duplicate ids at ingestion time.
//! - Decode/encode the `{ "people": [...] }` document shared with
//!   import/export collaborators.
//!
//! # Invariants
//! - Registry order is insertion order and is the only ordering used by
//!   hierarchy and search code.
//! - Malformed genealogy (dangling parents, cycles) is accepted as-is.

pub mod document;
pub mod person_registry;
