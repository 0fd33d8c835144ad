//! Insight cache with explicit, user-triggered refresh.
//!
//! The synchronizer owns only the transient latest insight and a loading
//! flag; it never persists anything. Overlapping refreshes are not mutually
//! excluded, but each carries a monotonically increasing sequence number and
//! only the last-issued request may update the cache, so a slow stale
//! response can never overwrite a newer one.
//!
//! Any failure (transport, API error, malformed or incomplete JSON) reduces
//! to the static fallback triple; no error reaches the caller.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::RwLock;

use tracing::{debug, warn};

use crate::context::{build_insight_prompt, insight_response_schema};
use growth_core::{GenerationBackend, Goal, Insight, JournalEntry, MoodEntry, Result};

/// Caches the single most recent coaching insight.
pub struct InsightSynchronizer<B: GenerationBackend> {
    backend: B,
    latest: RwLock<Option<Insight>>,
    loading: AtomicBool,
    seq: AtomicU64,
}

impl<B: GenerationBackend> InsightSynchronizer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            latest: RwLock::new(None),
            loading: AtomicBool::new(false),
            seq: AtomicU64::new(0),
        }
    }

    /// The cached insight, if any refresh has completed.
    pub fn latest(&self) -> Option<Insight> {
        self.latest
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// True while the newest-issued refresh is still in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Refresh the insight from the current collections.
    ///
    /// Always resolves with an insight (the fallback triple on any failure).
    /// The cache and loading flag are only touched if no newer refresh was
    /// issued while this one was in flight.
    pub async fn refresh(
        &self,
        moods: &[MoodEntry],
        goals: &[Goal],
        journal: &[JournalEntry],
    ) -> Insight {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.loading.store(true, Ordering::SeqCst);

        let prompt = build_insight_prompt(moods, goals, journal);
        debug!(ticket, prompt_len = prompt.len(), "requesting insight refresh");

        let insight = match self.fetch(&prompt).await {
            Ok(insight) => insight,
            Err(e) => {
                warn!(ticket, error = %e, "insight refresh failed, applying fallback");
                Insight::fallback()
            }
        };

        let newest = self.seq.load(Ordering::SeqCst);
        if ticket == newest {
            *self.latest.write().unwrap_or_else(|e| e.into_inner()) = Some(insight.clone());
            self.loading.store(false, Ordering::SeqCst);
            debug!(ticket, "insight cache updated");
        } else {
            debug!(ticket, newest, "discarding stale insight response");
        }

        insight
    }

    /// One-time startup refresh: runs only when there is any history at all.
    ///
    /// Subsequent mutations never re-trigger a refresh; insights go stale
    /// until the user asks again.
    pub async fn refresh_at_startup(
        &self,
        moods: &[MoodEntry],
        goals: &[Goal],
        journal: &[JournalEntry],
    ) -> Option<Insight> {
        if moods.is_empty() && goals.is_empty() && journal.is_empty() {
            debug!("no history yet, skipping startup insight refresh");
            return None;
        }
        Some(self.refresh(moods, goals, journal).await)
    }

    async fn fetch(&self, prompt: &str) -> Result<Insight> {
        let schema = insight_response_schema();
        let raw = self.backend.generate_json(prompt, &schema).await?;
        let insight: Insight = serde_json::from_str(raw.trim())?;
        Ok(insight)
    }
}
