//! AI-assisted goal-title refinement.
//!
//! A pure function of its input and the backend: the raw title goes out with
//! a fixed rewrite instruction, the trimmed completion comes back. Any
//! failure, or an empty completion, returns the original title unchanged;
//! refinement is best-effort and never surfaces an error.

use tracing::{debug, warn};

use growth_core::GenerationBackend;

fn refine_prompt(title: &str) -> String {
    format!(
        "Refine this goal title to be more specific, measurable, and motivating (SMART): \
         \"{}\". Just return the refined title text.",
        title
    )
}

/// Rewrite a goal title into a more specific, measurable form.
pub async fn refine_goal_title(backend: &dyn GenerationBackend, title: &str) -> String {
    match backend.generate(&refine_prompt(title)).await {
        Ok(response) => {
            let refined = response.trim();
            if refined.is_empty() {
                debug!(title, "refinement returned empty text, keeping original");
                title.to_string()
            } else {
                debug!(title, refined, "goal title refined");
                refined.to_string()
            }
        }
        Err(e) => {
            warn!(title, error = %e, "goal refinement failed, keeping original");
            title.to_string()
        }
    }
}
