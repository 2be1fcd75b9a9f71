use serde::{Deserialize, Serialize};

use super::context::UserPreferences;

/// Whether a summary describes a live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatus {
    Active,
    NoActiveConversation,
}

/// A snapshot report of the current conversation.
///
/// `recent_actions` is de-duplicated in first-seen order over the
/// summary window (chronological); `recent_topics` is the de-duplicated
/// search-term set from those same turns, also first-seen order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub status: SummaryStatus,
    pub session_id: Option<String>,
    /// Whole seconds since the session started.
    pub duration_seconds: i64,
    pub total_turns: usize,
    pub active_topic: Option<String>,
    pub recent_actions: Vec<String>,
    pub recent_topics: Vec<String>,
    pub user_preferences: UserPreferences,
}

impl ConversationSummary {
    /// The summary reported when no session is current. Not an error.
    pub fn inactive() -> Self {
        Self {
            status: SummaryStatus::NoActiveConversation,
            session_id: None,
            duration_seconds: 0,
            total_turns: 0,
            active_topic: None,
            recent_actions: Vec::new(),
            recent_topics: Vec::new(),
            user_preferences: UserPreferences::default(),
        }
    }
}
