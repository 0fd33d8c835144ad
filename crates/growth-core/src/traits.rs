//! Port traits implemented by the storage and inference crates.
//!
//! The store and the insight synchronizer depend only on these traits, so
//! tests substitute in-memory and scripted implementations without touching
//! a real filesystem or a live model endpoint.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::Result;

// =============================================================================
// STORAGE PORT
// =============================================================================

/// Durable key-value storage for the persisted collections.
///
/// Keys are fixed per collection (see [`crate::defaults`]); values are the
/// JSON-serialized form of the whole ordered collection.
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key is absent.
    async fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    async fn save(&self, key: &str, value: &str) -> Result<()>;
}

// =============================================================================
// GENERATION BACKEND
// =============================================================================

/// Text generation backend for coaching content.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate free text from a prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Generate JSON text from a prompt, constrained by a response schema.
    ///
    /// The returned string is the raw JSON document; callers parse it into
    /// their own types and decide how to recover from a shape mismatch.
    async fn generate_json(&self, prompt: &str, schema: &JsonValue) -> Result<String>;
}
