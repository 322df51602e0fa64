//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate registry, hierarchy and codec calls into use-case APIs.
//! - Keep UI layers decoupled from registry internals.

pub mod person_service;
pub mod tree_service;
