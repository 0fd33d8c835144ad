//! Prompt context assembly for insight refreshes.
//!
//! The prompt carries a compact textual snapshot of the user's recent
//! history: the most recent seven moods, every goal with its completion
//! state, and the most recent three reflections. The goal and reflection
//! sections are omitted when those collections are empty.

use serde_json::{json, Value as JsonValue};

use growth_core::defaults::{JOURNAL_CONTEXT_ENTRIES, MOOD_CONTEXT_ENTRIES};
use growth_core::{Goal, JournalEntry, MoodEntry};

const INSIGHT_INSTRUCTIONS: &str = "\
Provide a JSON response with:
1. moodAnalysis: A short, empathetic analysis of the user's emotional trend.
2. goalAdvice: Actionable advice for the most critical or lagging goals.
3. dailyQuote: An inspiring, non-cliche quote tailored to their current state.";

/// Build the insight prompt from the current collections.
///
/// `moods` and `journal` are expected most-recent-first, as the store keeps
/// them; only the leading context-window entries are included.
pub fn build_insight_prompt(moods: &[MoodEntry], goals: &[Goal], journal: &[JournalEntry]) -> String {
    let mood_context: Vec<String> = moods
        .iter()
        .take(MOOD_CONTEXT_ENTRIES)
        .map(|m| format!("{}: {}", m.timestamp.format("%Y-%m-%d"), m.value))
        .collect();

    let mut prompt = String::from(
        "Analyze the following mood entries and goals to provide personalized insights.\n",
    );
    prompt.push_str(&format!(
        "Mood History (last {}): {}\n",
        MOOD_CONTEXT_ENTRIES,
        mood_context.join(", ")
    ));

    if !goals.is_empty() {
        let goal_context: Vec<String> = goals
            .iter()
            .map(|g| format!("{} ({} - {} {}%)", g.title, g.category, g.status, g.progress))
            .collect();
        prompt.push_str(&format!("Current Goals: {}\n", goal_context.join(", ")));
    }

    if !journal.is_empty() {
        prompt.push_str("Recent Reflections:\n");
        for entry in journal.iter().take(JOURNAL_CONTEXT_ENTRIES) {
            prompt.push_str(&format!("- {}\n", entry.content));
        }
    }

    prompt.push('\n');
    prompt.push_str(INSIGHT_INSTRUCTIONS);
    prompt
}

/// Response shape contract for the insight call: a JSON object with exactly
/// three required string properties.
pub fn insight_response_schema() -> JsonValue {
    json!({
        "type": "object",
        "properties": {
            "moodAnalysis": { "type": "string" },
            "goalAdvice": { "type": "string" },
            "dailyQuote": { "type": "string" }
        },
        "required": ["moodAnalysis", "goalAdvice", "dailyQuote"]
    })
}
