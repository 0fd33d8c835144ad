//! The state store: single owner of the three persisted collections.
//!
//! Every effective mutation serializes the affected collection wholesale to
//! its storage key before returning. Writes are unbatched: N mutations mean
//! N storage writes. Intents that fail validation (empty journal content,
//! empty goal title) or target an absent id are silent no-ops and trigger
//! no write.
//!
//! Hydration at startup fails soft: a missing key, an unreadable backend, or
//! an unparsable stored value leaves that collection empty with a warning,
//! never a crash.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use growth_core::defaults::{GOALS_KEY, JOURNAL_KEY, MOODS_KEY};
use growth_core::goal::{reconcile, GoalChange};
use growth_core::{
    Goal, GoalStats, GoalStatus, GoalUpdate, JournalEntry, MoodEntry, MoodValue, NewGoal, Result,
    StoragePort,
};

/// In-memory state mirrored to a durable [`StoragePort`].
///
/// Moods and journal entries are ordered most-recent-first; goals are
/// append-ordered.
pub struct StateStore<S: StoragePort> {
    storage: S,
    moods: Vec<MoodEntry>,
    journal: Vec<JournalEntry>,
    goals: Vec<Goal>,
}

impl<S: StoragePort> StateStore<S> {
    /// Open the store, hydrating every collection from storage.
    pub async fn open(storage: S) -> Self {
        let moods = hydrate(&storage, MOODS_KEY).await;
        let journal = hydrate(&storage, JOURNAL_KEY).await;
        let goals = hydrate(&storage, GOALS_KEY).await;

        info!(
            moods = moods.len(),
            journal = journal.len(),
            goals = goals.len(),
            "state store hydrated"
        );

        Self {
            storage,
            moods,
            journal,
            goals,
        }
    }

    // -------------------------------------------------------------------------
    // Moods
    // -------------------------------------------------------------------------

    /// Log a mood. Always succeeds; the note may be empty.
    pub async fn add_mood(&mut self, value: MoodValue, note: impl Into<String>) -> Result<Uuid> {
        let entry = MoodEntry::new(value, note);
        let id = entry.id;
        debug!(entry_id = %id, mood = %value, "add mood");

        self.moods.insert(0, entry);
        persist(&self.storage, MOODS_KEY, &self.moods).await?;
        Ok(id)
    }

    /// Mood entries, most recent first.
    pub fn moods(&self) -> &[MoodEntry] {
        &self.moods
    }

    /// The most recently logged mood, if any.
    pub fn latest_mood(&self) -> Option<&MoodEntry> {
        self.moods.first()
    }

    // -------------------------------------------------------------------------
    // Journal
    // -------------------------------------------------------------------------

    /// Save a reflection. Content that is empty after trimming is a silent
    /// no-op and returns `Ok(None)`.
    pub async fn add_journal_entry(&mut self, content: &str) -> Result<Option<Uuid>> {
        if content.trim().is_empty() {
            debug!("ignoring empty journal entry");
            return Ok(None);
        }

        let entry = JournalEntry::new(content);
        let id = entry.id;
        debug!(entry_id = %id, size = content.len(), "add journal entry");

        self.journal.insert(0, entry);
        persist(&self.storage, JOURNAL_KEY, &self.journal).await?;
        Ok(Some(id))
    }

    /// Delete a reflection by id. An absent id is a no-op with no error and
    /// no storage write.
    pub async fn delete_journal_entry(&mut self, id: Uuid) -> Result<()> {
        let before = self.journal.len();
        self.journal.retain(|e| e.id != id);
        if self.journal.len() == before {
            return Ok(());
        }

        debug!(entry_id = %id, "delete journal entry");
        persist(&self.storage, JOURNAL_KEY, &self.journal).await
    }

    /// Journal entries, most recent first.
    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    // -------------------------------------------------------------------------
    // Goals
    // -------------------------------------------------------------------------

    /// Create a goal. A title that is empty after trimming is a silent no-op
    /// and returns `Ok(None)`. New goals start Pending at 0% and append to
    /// the end of the collection.
    pub async fn add_goal(&mut self, req: NewGoal) -> Result<Option<Uuid>> {
        if req.title.trim().is_empty() {
            debug!("ignoring goal with empty title");
            return Ok(None);
        }

        let goal = Goal::new(req);
        let id = goal.id;
        debug!(goal_id = %id, title = %goal.title, "add goal");

        self.goals.push(goal);
        persist(&self.storage, GOALS_KEY, &self.goals).await?;
        Ok(Some(id))
    }

    /// Merge a partial update onto a goal. Progress and status changes are
    /// routed through [`reconcile`] so the pair stays consistent. An absent
    /// id is a no-op with no error.
    pub async fn update_goal(&mut self, id: Uuid, updates: GoalUpdate) -> Result<()> {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            debug!(goal_id = %id, "update for unknown goal ignored");
            return Ok(());
        };

        if let Some(title) = updates.title {
            goal.title = title;
        }
        if let Some(description) = updates.description {
            goal.description = description;
        }
        if let Some(category) = updates.category {
            goal.category = category;
        }
        if let Some(deadline) = updates.deadline {
            goal.deadline = Some(deadline);
        }

        let change = GoalChange {
            progress: updates.progress,
            status: updates.status,
        };
        let (progress, status) = reconcile(goal.progress, goal.status, change);
        goal.progress = progress;
        goal.status = status;

        debug!(goal_id = %id, progress, status = %status, "update goal");
        persist(&self.storage, GOALS_KEY, &self.goals).await
    }

    /// Flip a goal between Completed and In Progress (the toggle path).
    /// An absent id is a no-op.
    pub async fn toggle_goal_completion(&mut self, id: Uuid) -> Result<()> {
        let Some(goal) = self.goals.iter().find(|g| g.id == id) else {
            return Ok(());
        };

        let next = if goal.status == GoalStatus::Completed {
            GoalStatus::InProgress
        } else {
            GoalStatus::Completed
        };
        self.update_goal(id, GoalUpdate::status(next)).await
    }

    /// Delete a goal by id. An absent id is a no-op with no error and no
    /// storage write.
    pub async fn delete_goal(&mut self, id: Uuid) -> Result<()> {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        if self.goals.len() == before {
            return Ok(());
        }

        debug!(goal_id = %id, "delete goal");
        persist(&self.storage, GOALS_KEY, &self.goals).await
    }

    /// Goals in creation order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Aggregate goal counts by status.
    pub fn goal_stats(&self) -> GoalStats {
        let mut stats = GoalStats::default();
        for goal in &self.goals {
            match goal.status {
                GoalStatus::Pending => stats.pending += 1,
                GoalStatus::InProgress => stats.in_progress += 1,
                GoalStatus::Completed => stats.completed += 1,
            }
        }
        stats
    }

    // -------------------------------------------------------------------------
    // Snapshot
    // -------------------------------------------------------------------------

    /// True when any collection holds at least one entry. Gates the one-time
    /// insight refresh at startup.
    pub fn has_history(&self) -> bool {
        !self.moods.is_empty() || !self.journal.is_empty() || !self.goals.is_empty()
    }
}

/// Serialize a whole collection to its storage key.
async fn persist<S, T>(storage: &S, key: &str, items: &[T]) -> Result<()>
where
    S: StoragePort,
    T: Serialize,
{
    let json = serde_json::to_string(items)?;
    storage.save(key, &json).await
}

/// Read and parse a collection, failing soft to empty.
async fn hydrate<S, T>(storage: &S, key: &str) -> Vec<T>
where
    S: StoragePort,
    T: DeserializeOwned,
{
    match storage.load(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(key, error = %e, "stored collection is unparsable, starting empty");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "failed to read stored collection, starting empty");
            Vec::new()
        }
    }
}
