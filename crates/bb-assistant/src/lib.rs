//! Budget Buddy Assistant - Query execution over a generative AI client
//!
//! This crate implements the single skill the backend exposes: forwarding
//! a user's spending question to a generative model with a fixed persona
//! and Google Search grounding, and returning the plain-text answer.

use bb_core::{GenerationOptions, GenerativeClient, Result};
use std::sync::Arc;

pub mod gemini;

pub use gemini::GeminiClient;

/// System instruction defining the assistant's persona.
///
/// Kept verbatim across the product; the model is asked to find at least
/// one cheaper or free alternative via Google Search.
pub const BUDGET_BUDDY_PERSONA: &str = "You are Budget Buddy — the voice of financial reason. \
     Your job is to help the user make smarter spending decisions. \
     Suggest at least one cheaper or free alternative found via Google Search. \
     Briefly explain why your choice is smarter. \
     Keep it clever, casual, and concise — no lectures. \
     If it’s already a good deal, say so with a friendly remark.";

/// The query executor.
///
/// Pure forwarding: attaches the persona and the search-grounding flag,
/// invokes the client, and propagates failures unchanged. No retries,
/// no state of its own.
pub struct BudgetAssistant {
    client: Arc<dyn GenerativeClient>,
}

impl BudgetAssistant {
    /// Create an assistant over any generative client
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    /// Model identifier of the underlying client
    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    /// Execute a single query and return the model's text answer
    pub async fn execute(&self, query: &str) -> Result<String> {
        let options = GenerationOptions::default()
            .with_system_instruction(BUDGET_BUDDY_PERSONA)
            .with_search_grounding();

        self.client.generate(query, &options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records the prompt and options of the last generate call
    struct RecordingClient {
        last_call: Mutex<Option<(String, GenerationOptions)>>,
    }

    impl RecordingClient {
        fn new() -> Self {
            Self {
                last_call: Mutex::new(None),
            }
        }
    }

    #[async_trait::async_trait]
    impl GenerativeClient for RecordingClient {
        async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
            *self.last_call.lock().unwrap() = Some((prompt.to_string(), options.clone()));
            Ok("answer".to_string())
        }

        fn model_name(&self) -> &str {
            "test-model"
        }
    }

    #[tokio::test]
    async fn test_execute_attaches_persona_and_grounding() {
        let client = Arc::new(RecordingClient::new());
        let assistant = BudgetAssistant::new(client.clone());

        let answer = assistant.execute("Should I buy a $150 yoga mat?").await.unwrap();
        assert_eq!(answer, "answer");

        let (prompt, options) = client.last_call.lock().unwrap().clone().unwrap();
        assert_eq!(prompt, "Should I buy a $150 yoga mat?");
        assert_eq!(
            options.system_instruction.as_deref(),
            Some(BUDGET_BUDDY_PERSONA)
        );
        assert!(options.ground_with_search);
    }

    #[tokio::test]
    async fn test_execute_passes_query_verbatim() {
        let client = Arc::new(RecordingClient::new());
        let assistant = BudgetAssistant::new(client.clone());

        // The HTTP layer trims only for validation; the query itself is
        // forwarded untouched.
        assistant.execute("  is this deal ok?  ").await.unwrap();

        let (prompt, _) = client.last_call.lock().unwrap().clone().unwrap();
        assert_eq!(prompt, "  is this deal ok?  ");
    }

    #[test]
    fn test_model_name_comes_from_client() {
        let assistant = BudgetAssistant::new(Arc::new(RecordingClient::new()));
        assert_eq!(assistant.model_name(), "test-model");
    }
}
