//! Resolver and conversation configuration.
//!
//! File discovery and loading belong to the host; these structs only
//! deserialize whatever mapping the host hands over. Missing keys take
//! their defaults, unknown keys are ignored.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Intent resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Below this confidence, callers should offer suggestions instead
    /// of dispatching the top match. Interpreted by the caller, not the
    /// resolver.
    pub confidence_threshold: f32,
    /// Maximum entries returned by `suggestions` when the caller does
    /// not pass an explicit limit.
    pub max_suggestions: usize,
    /// Turn window consulted when summarizing a conversation.
    pub conversation_context_length: usize,
    /// Dimensionality of the hashed bag-of-words embedding space.
    pub embedding_dimensions: usize,
    /// Action resolved when nothing scores above zero. When the catalog
    /// does not contain it, the resolver substitutes the first catalog
    /// action at construction.
    pub fallback_action: String,
    /// Model name for a host-constructed embedding provider. Passed
    /// through; the resolver only sees the injected provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding_model_name: Option<String>,
    /// Model name for a host-constructed similarity model. Passed
    /// through, same as `embedding_model_name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_model_name: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: constants::DEFAULT_CONFIDENCE_THRESHOLD,
            max_suggestions: constants::DEFAULT_MAX_SUGGESTIONS,
            conversation_context_length: constants::DEFAULT_SUMMARY_WINDOW,
            embedding_dimensions: constants::DEFAULT_EMBEDDING_DIMENSIONS,
            fallback_action: constants::DEFAULT_ACTION.to_string(),
            embedding_model_name: None,
            similarity_model_name: None,
        }
    }
}

/// Conversation manager configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationConfig {
    /// Maximum turns kept per session; the oldest turn is dropped first.
    pub max_context_turns: usize,
    /// Sessions idle longer than this are evicted when a new session
    /// starts.
    pub session_timeout_minutes: i64,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            max_context_turns: constants::DEFAULT_MAX_CONTEXT_TURNS,
            session_timeout_minutes: constants::DEFAULT_SESSION_TIMEOUT_MINUTES,
        }
    }
}
