//! Application state management
//!
//! State is constructed exactly once at startup and injected into the
//! router; nothing in it is mutated while requests are being served.

use bb_assistant::{BudgetAssistant, GeminiClient};
use bb_core::config::AppConfig;
use std::sync::Arc;

/// Application state shared across handlers
pub struct AppState {
    /// Application configuration
    config: AppConfig,
    /// Query executor; `None` when the credential was absent or the
    /// client could not be constructed
    assistant: Option<Arc<BudgetAssistant>>,
}

impl AppState {
    /// Create state from already-constructed parts (used by tests)
    pub fn new(config: AppConfig, assistant: Option<Arc<BudgetAssistant>>) -> Self {
        Self { config, assistant }
    }

    /// Create state from config, attempting to build the Gemini client.
    ///
    /// Construction is best-effort: a missing credential or a failed
    /// client build leaves the assistant unavailable instead of aborting
    /// the process, so the health check stays reachable.
    pub fn initialize(config: AppConfig) -> Self {
        let assistant = match config.llm.api_key.as_deref() {
            None | Some("") => {
                tracing::error!(
                    "GOOGLE_API_KEY environment variable not found; \
                     queries will be rejected until it is configured"
                );
                None
            }
            Some(_) => match GeminiClient::from_config(&config.llm) {
                Ok(client) => Some(Arc::new(BudgetAssistant::new(Arc::new(client)))),
                Err(err) => {
                    tracing::error!("Failed to configure the Gemini client: {err}");
                    None
                }
            },
        };

        Self { config, assistant }
    }

    /// The query executor, if usable
    pub fn assistant(&self) -> Option<&Arc<BudgetAssistant>> {
        self.assistant.as_ref()
    }

    /// Whether the AI client handle is usable
    pub fn is_available(&self) -> bool {
        self.assistant.is_some()
    }

    /// Configured model identifier; reported even when the handle is
    /// unavailable
    pub fn model_name(&self) -> &str {
        &self.config.llm.model
    }

    /// Application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
