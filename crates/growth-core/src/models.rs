//! Core data models for the Growth Suite tracker.
//!
//! These types are shared across all tracker crates and represent the
//! persisted domain entities plus the transient coaching insight.
//!
//! Timestamps serialize as integer milliseconds since the Unix epoch so the
//! stored collections stay compatible with the original client format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::id::new_v7;

// =============================================================================
// MOOD TYPES
// =============================================================================

/// The closed set of mood levels a user can log.
///
/// The levels are not an ordered scale; [`MoodValue::ALL`] fixes the display
/// sequence used by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodValue {
    Ecstatic,
    Happy,
    Neutral,
    Stressed,
    Sad,
    Angry,
    Tired,
}

impl MoodValue {
    /// All mood levels in their fixed display sequence.
    pub const ALL: [MoodValue; 7] = [
        MoodValue::Ecstatic,
        MoodValue::Happy,
        MoodValue::Neutral,
        MoodValue::Stressed,
        MoodValue::Sad,
        MoodValue::Angry,
        MoodValue::Tired,
    ];
}

impl std::fmt::Display for MoodValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ecstatic => write!(f, "Ecstatic"),
            Self::Happy => write!(f, "Happy"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Stressed => write!(f, "Stressed"),
            Self::Sad => write!(f, "Sad"),
            Self::Angry => write!(f, "Angry"),
            Self::Tired => write!(f, "Tired"),
        }
    }
}

/// A timestamped record of a logged mood plus an optional free-text note.
///
/// Immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: Uuid,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub value: MoodValue,
    pub note: String,
}

impl MoodEntry {
    /// Construct a new entry with a fresh id and the current time.
    pub fn new(value: MoodValue, note: impl Into<String>) -> Self {
        Self {
            id: new_v7(),
            timestamp: Utc::now(),
            value,
            note: note.into(),
        }
    }
}

// =============================================================================
// JOURNAL TYPES
// =============================================================================

/// A free-form reflection. Deletable by id, otherwise immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub content: String,
}

impl JournalEntry {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: new_v7(),
            timestamp: Utc::now(),
            content: content.into(),
        }
    }
}

// =============================================================================
// GOAL TYPES
// =============================================================================

/// Goal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalCategory {
    Personal,
    Professional,
}

impl std::fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Personal => write!(f, "Personal"),
            Self::Professional => write!(f, "Professional"),
        }
    }
}

impl Default for GoalCategory {
    fn default() -> Self {
        GoalCategory::Personal
    }
}

/// Goal lifecycle status.
///
/// Serializes with the stored spelling (`"In Progress"` contains a space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// A user-defined objective with category, status, and completion progress.
///
/// `progress` stays in `0..=100` and is kept consistent with `status` by
/// [`crate::goal::reconcile`]; mutations never write the fields directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub status: GoalStatus,
    pub progress: u8,
    /// Optional user-entered deadline. Carried in the stored format; no flow
    /// currently sets it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

/// Creation request for a goal. New goals always start Pending at 0%.
#[derive(Debug, Clone, Default)]
pub struct NewGoal {
    pub title: String,
    pub description: String,
    pub category: GoalCategory,
    pub deadline: Option<String>,
}

impl Goal {
    /// Construct a goal from a creation request.
    pub fn new(req: NewGoal) -> Self {
        Self {
            id: new_v7(),
            title: req.title,
            description: req.description,
            category: req.category,
            status: GoalStatus::Pending,
            progress: 0,
            deadline: req.deadline,
        }
    }
}

/// Partial update for a goal. Absent fields are left untouched; progress and
/// status changes are routed through [`crate::goal::reconcile`] by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<GoalCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GoalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
}

impl GoalUpdate {
    /// Update that only moves the progress value (the slider path).
    pub fn progress(value: u8) -> Self {
        Self {
            progress: Some(value),
            ..Default::default()
        }
    }

    /// Update that only changes the status (the toggle path).
    pub fn status(value: GoalStatus) -> Self {
        Self {
            status: Some(value),
            ..Default::default()
        }
    }
}

/// Aggregate goal counts for dashboard-style consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalStats {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

// =============================================================================
// INSIGHT TYPES
// =============================================================================

/// The cached triple of AI-generated coaching text.
///
/// Transient: never persisted, fully replaced on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub mood_analysis: String,
    pub goal_advice: String,
    pub daily_quote: String,
}

impl Insight {
    /// The static triple substituted when the generation backend fails.
    pub fn fallback() -> Self {
        Self {
            mood_analysis: "Your mood seems to be fluctuating. Remember to take small breaks!"
                .to_string(),
            goal_advice: "Try breaking down your largest goal into 15-minute tasks.".to_string(),
            daily_quote: "The only way to do great work is to love what you do. - Steve Jobs"
                .to_string(),
        }
    }
}
