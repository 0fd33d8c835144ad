//! # growth-insight
//!
//! AI coaching layer for the Growth Suite tracker.
//!
//! This crate provides:
//! - [`InsightSynchronizer`]: caches the single most recent coaching insight,
//!   refreshing it on demand with a last-issued-wins guard against
//!   overlapping requests
//! - Prompt assembly from the tracked collections ([`context`])
//! - AI-assisted goal-title refinement ([`refine`])
//! - [`GeminiBackend`]: a `generateContent` implementation of
//!   [`growth_core::GenerationBackend`]
//!
//! # Example
//!
//! ```rust,no_run
//! use growth_insight::{GeminiBackend, InsightSynchronizer};
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = GeminiBackend::from_env().unwrap();
//!     let sync = InsightSynchronizer::new(backend);
//!     let insight = sync.refresh(&[], &[], &[]).await;
//!     println!("{}", insight.daily_quote);
//! }
//! ```

pub mod context;
pub mod gemini;
pub mod refine;
pub mod synchronizer;

// Scripted backend for tests
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use context::{build_insight_prompt, insight_response_schema};
pub use gemini::{GeminiBackend, GeminiConfig};
pub use refine::refine_goal_title;
pub use synchronizer::InsightSynchronizer;
