//! Genealogy domain model.
//!
//! # Responsibility
//! - Define the canonical person record shared by registry, hierarchy and
//!   search code.
//! - Own id normalization so every layer compares ids the same way.
//!
//! # Invariants
//! - Every person is identified by a non-blank `PersonId`.
//! - Parent references are plain ids; they may point at nobody.

pub mod person;
