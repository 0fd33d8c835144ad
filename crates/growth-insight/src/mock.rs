//! Scripted generation backend for deterministic testing.
//!
//! Responses, failures, and per-call latencies are queued up front and
//! consumed in call order, so interleavings of overlapping requests are
//! reproducible. Every call is logged for assertions.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use growth_insight::mock::MockCoach;
//!
//! let backend = MockCoach::new()
//!     .with_response(r#"{"moodAnalysis":"...","goalAdvice":"...","dailyQuote":"..."}"#)
//!     .with_failure("network down");
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use growth_core::{Error, GenerationBackend, Result};

/// One recorded backend call.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub operation: &'static str,
    pub prompt: String,
    pub schema: Option<JsonValue>,
}

enum Scripted {
    Respond(String),
    Fail(String),
}

/// Scripted [`GenerationBackend`] with a call log.
#[derive(Default)]
pub struct MockCoach {
    script: Mutex<VecDeque<Scripted>>,
    latencies: Mutex<VecDeque<Duration>>,
    call_log: Mutex<Vec<MockCall>>,
}

impl MockCoach {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Respond(response.into()));
        self
    }

    /// Queue a failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Fail(message.into()));
        self
    }

    /// Queue a latency applied to the next call, in call order.
    pub fn with_latency(self, latency: Duration) -> Self {
        self.latencies.lock().unwrap().push_back(latency);
        self
    }

    /// All logged calls, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    async fn next(
        &self,
        operation: &'static str,
        prompt: &str,
        schema: Option<&JsonValue>,
    ) -> Result<String> {
        // Dequeue latency and outcome before suspending so overlapping
        // callers consume the script in call order.
        let latency = self.latencies.lock().unwrap().pop_front();
        let outcome = self.script.lock().unwrap().pop_front();
        self.call_log.lock().unwrap().push(MockCall {
            operation,
            prompt: prompt.to_string(),
            schema: schema.cloned(),
        });

        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }

        match outcome {
            Some(Scripted::Respond(text)) => Ok(text),
            Some(Scripted::Fail(message)) => Err(Error::Inference(message)),
            None => Err(Error::Inference("mock script exhausted".to_string())),
        }
    }
}

#[async_trait]
impl GenerationBackend for MockCoach {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.next("generate", prompt, None).await
    }

    async fn generate_json(&self, prompt: &str, schema: &JsonValue) -> Result<String> {
        self.next("generate_json", prompt, Some(schema)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn responses_are_consumed_in_order() {
        let mock = MockCoach::new().with_response("first").with_response("second");

        assert_eq!(mock.generate("a").await.unwrap(), "first");
        assert_eq!(mock.generate("b").await.unwrap(), "second");
    }

    #[tokio::test]
    async fn scripted_failure_surfaces_as_inference_error() {
        let mock = MockCoach::new().with_failure("boom");
        let err = mock.generate("a").await.unwrap_err();
        assert!(matches!(err, Error::Inference(_)));
    }

    #[tokio::test]
    async fn exhausted_script_fails() {
        let mock = MockCoach::new();
        assert!(mock.generate("a").await.is_err());
    }

    #[tokio::test]
    async fn call_log_records_operation_and_schema() {
        let mock = MockCoach::new().with_response("{}");
        let schema = serde_json::json!({"type": "object"});
        mock.generate_json("prompt text", &schema).await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].operation, "generate_json");
        assert_eq!(calls[0].prompt, "prompt text");
        assert_eq!(calls[0].schema, Some(schema));
    }
}
