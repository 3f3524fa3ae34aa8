//! Budget Buddy Core - Shared types for the Budget Buddy backend
//!
//! This crate defines the abstractions shared by the assistant and the
//! HTTP server:
//! - Common error types
//! - The trait for generative AI clients
//! - Configuration management

pub mod config;

pub use config::{AppConfig, ConfigError, LlmConfig, LoggingConfig, ServerConfig, DEFAULT_MODEL};

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for Budget Buddy operations
#[derive(Error, Debug)]
pub enum BuddyError {
    #[error("Upstream AI service error: {0}")]
    Upstream(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BuddyError>;

// ============================================================================
// Generation Types
// ============================================================================

/// Options shaping a single generation call
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    /// System instruction defining tone and task framing, distinct from
    /// the user's query
    pub system_instruction: Option<String>,

    /// Enable the provider's own web-search grounding tool
    pub ground_with_search: bool,
}

impl GenerationOptions {
    /// Attach a system instruction
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Enable web-search grounding
    pub fn with_search_grounding(mut self) -> Self {
        self.ground_with_search = true;
        self
    }
}

// ============================================================================
// Traits
// ============================================================================

/// Trait for generative AI clients
#[async_trait::async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Generate a plain-text completion for `prompt`
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String>;

    /// Model identifier this client is bound to
    fn model_name(&self) -> &str;
}

// ============================================================================
// Tests
// ============================================================================
