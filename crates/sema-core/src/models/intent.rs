use serde::{Deserialize, Serialize};

use super::entities::Entities;

/// The resolved mapping of one utterance to an action. Transient,
/// one per utterance.
///
/// `confidence` is always finite, never NaN. Its range depends on the
/// matching strategy: cosine similarity in [-1, 1] for embedding mode,
/// a matched-keyword ratio in [0, 1] for keyword mode. Callers must not
/// assume one fixed range across modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    /// Name of the matched catalog action.
    pub action_name: String,
    /// Match score under the active strategy.
    pub confidence: f32,
    /// Entities extracted from the utterance.
    pub entities: Entities,
    /// The original utterance, casing unmodified.
    pub raw_text: String,
}

/// One ranked alternative returned by the resolver for ambiguous input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub action_name: String,
    pub confidence: f32,
    pub description: String,
}
