//! Centralized default constants for the Growth Suite tracker.
//!
//! **This module is the single source of truth** for shared default values.
//! Crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// STORAGE
// =============================================================================

/// Storage key for the mood collection.
pub const MOODS_KEY: &str = "moods";

/// Storage key for the goal collection.
pub const GOALS_KEY: &str = "goals";

/// Storage key for the journal collection.
pub const JOURNAL_KEY: &str = "journal";

// =============================================================================
// INSIGHT CONTEXT
// =============================================================================

/// Number of most-recent mood entries included in the insight prompt.
pub const MOOD_CONTEXT_ENTRIES: usize = 7;

/// Number of most-recent journal entries included in the insight prompt.
pub const JOURNAL_CONTEXT_ENTRIES: usize = 3;

// =============================================================================
// GENERATION
// =============================================================================

/// Default generation request timeout in seconds.
pub const GEN_TIMEOUT_SECS: u64 = 120;
