//! End-to-end insight refresh through the real HTTP backend.
//!
//! Drives the synchronizer against a wiremock Gemini endpoint to cover the
//! full path: prompt assembly, schema-constrained request, JSON extraction
//! from the candidate text, and fallback on collaborator failure.

use growth_core::{Insight, MoodEntry, MoodValue};
use growth_insight::{GeminiBackend, GeminiConfig, InsightSynchronizer};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> GeminiBackend {
    GeminiBackend::new(GeminiConfig {
        base_url: server.uri(),
        api_key: Some("test-key".to_string()),
        model: "test-model".to_string(),
        timeout_seconds: 10,
    })
    .unwrap()
}

#[tokio::test]
async fn refresh_caches_the_parsed_insight_triple() {
    let server = MockServer::start().await;

    let insight_document = serde_json::json!({
        "moodAnalysis": "You have been steady all week.",
        "goalAdvice": "Finish the smallest open goal first.",
        "dailyQuote": "Small steps compound."
    })
    .to_string();

    Mock::given(method("POST"))
        .and(path("/models/test-model:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{"text": insight_document}] }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sync = InsightSynchronizer::new(backend_for(&server));
    let moods = vec![MoodEntry::new(MoodValue::Happy, "good run")];

    let insight = sync.refresh(&moods, &[], &[]).await;

    assert_eq!(insight.daily_quote, "Small steps compound.");
    assert_eq!(sync.latest(), Some(insight));
    assert!(!sync.is_loading());
}

#[tokio::test]
async fn collaborator_failure_reduces_to_the_fallback_triple() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let sync = InsightSynchronizer::new(backend_for(&server));
    let moods = vec![MoodEntry::new(MoodValue::Stressed, "")];

    let insight = sync.refresh(&moods, &[], &[]).await;

    assert_eq!(insight, Insight::fallback());
    assert_eq!(sync.latest(), Some(Insight::fallback()));
    assert!(!sync.is_loading());
}

#[tokio::test]
async fn candidate_text_that_is_not_the_contracted_shape_falls_back() {
    let server = MockServer::start().await;

    // Valid HTTP response, valid candidate, but the model ignored the schema
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{"text": "Sure! Here are your insights: ..."}] }
            }]
        })))
        .mount(&server)
        .await;

    let sync = InsightSynchronizer::new(backend_for(&server));
    let moods = vec![MoodEntry::new(MoodValue::Neutral, "")];

    let insight = sync.refresh(&moods, &[], &[]).await;
    assert_eq!(insight, Insight::fallback());
}
