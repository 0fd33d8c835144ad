//! # growth-store
//!
//! State store and durable storage backends for the Growth Suite tracker.
//!
//! This crate provides:
//! - [`StateStore`]: the single owner of the mood, journal, and goal
//!   collections, mirroring each to durable storage on every mutation
//! - [`JsonFileStorage`]: a filesystem [`growth_core::StoragePort`] backend
//!   with atomic writes
//! - [`MemoryStorage`]: an in-memory backend with a call log for tests
//!
//! ## Example
//!
//! ```rust,no_run
//! use growth_store::{JsonFileStorage, StateStore};
//! use growth_core::MoodValue;
//!
//! #[tokio::main]
//! async fn main() -> growth_core::Result<()> {
//!     let storage = JsonFileStorage::new("/var/growth/data");
//!     let mut store = StateStore::open(storage).await;
//!
//!     store.add_mood(MoodValue::Happy, "shipped it").await?;
//!     println!("{} moods logged", store.moods().len());
//!     Ok(())
//! }
//! ```

pub mod file;
pub mod memory;
pub mod store;

pub use file::JsonFileStorage;
pub use memory::{MemoryStorage, StorageCall};
pub use store::StateStore;
