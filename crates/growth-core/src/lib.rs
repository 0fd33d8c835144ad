//! # growth-core
//!
//! Core types, traits, and abstractions for the Growth Suite tracker.
//!
//! This crate provides the domain entities (moods, journal entries, goals,
//! coaching insights), the shared error type, and the port traits that the
//! storage and insight crates implement.

pub mod defaults;
pub mod error;
pub mod goal;
pub mod id;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use goal::{reconcile, GoalChange};
pub use id::{extract_timestamp, is_v7, new_v7};
pub use models::*;
pub use traits::{GenerationBackend, StoragePort};
