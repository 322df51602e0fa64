//! Person search entry points.
//!
//! # Responsibility
//! - Expose query APIs over an in-memory registry snapshot.
//! - Keep match semantics inside core so every UI list filters the same way.

pub mod person_search;
