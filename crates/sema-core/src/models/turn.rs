use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entities::Entities;

/// One completed exchange in a session. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub timestamp: DateTime<Utc>,
    pub user_input: String,
    pub intent_action: String,
    pub intent_confidence: f32,
    pub entities: Entities,
    pub assistant_response: String,
    pub execution_successful: bool,
}

impl ConversationTurn {
    /// Build a turn stamped with the current time.
    pub fn new(
        user_input: &str,
        intent_action: &str,
        intent_confidence: f32,
        entities: Entities,
        assistant_response: &str,
        execution_successful: bool,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            user_input: user_input.to_string(),
            intent_action: intent_action.to_string(),
            intent_confidence,
            entities,
            assistant_response: assistant_response.to_string(),
            execution_successful,
        }
    }
}
