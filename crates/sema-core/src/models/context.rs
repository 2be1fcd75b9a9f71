use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entities::Entities;
use super::turn::ConversationTurn;
use crate::constants;

/// Preferences learned from conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Action name → usage count.
    #[serde(default)]
    pub preferred_actions: HashMap<String, u64>,
    /// Most recently mentioned location.
    #[serde(default)]
    pub preferred_location: Option<String>,
}

impl UserPreferences {
    /// Bump the usage counter for an action.
    pub fn record_action(&mut self, action_name: &str) {
        *self
            .preferred_actions
            .entry(action_name.to_string())
            .or_insert(0) += 1;
    }
}

/// Per-session conversational state: a bounded turn log plus the
/// topic, location, and preference context derived from it.
///
/// Invariants: `turns.len()` never exceeds the configured maximum
/// (trimming drops from the oldest end), and `last_interaction` is
/// always >= `started_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Unique session identifier.
    pub session_id: String,
    /// When this session was created.
    pub started_at: DateTime<Utc>,
    /// Last activity timestamp, non-decreasing.
    pub last_interaction: DateTime<Utc>,
    /// Chronological turn log, oldest first.
    pub turns: VecDeque<ConversationTurn>,
    /// Current topic, last writer wins.
    #[serde(default)]
    pub active_topic: Option<String>,
    /// Remembered location, last writer wins.
    #[serde(default)]
    pub location_context: Option<String>,
    /// Learned preferences.
    #[serde(default)]
    pub user_preferences: UserPreferences,
}

impl ConversationContext {
    /// Create a fresh context for a session.
    pub fn new(session_id: String) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            started_at: now,
            last_interaction: now,
            turns: VecDeque::new(),
            active_topic: None,
            location_context: None,
            user_preferences: UserPreferences::default(),
        }
    }

    /// Append a turn, bump `last_interaction`, and trim the log to
    /// `max_turns` by dropping the oldest entries.
    pub fn push_turn(&mut self, turn: ConversationTurn, max_turns: usize) {
        self.last_interaction = turn.timestamp;
        self.turns.push_back(turn);
        while self.turns.len() > max_turns {
            self.turns.pop_front();
        }
    }

    /// Update the active topic: the first up-to-3 search terms joined
    /// with spaces when present, else the action name itself for
    /// topic-defining actions. Later writers overwrite.
    pub fn update_active_topic(&mut self, action_name: &str, entities: &Entities) {
        if !entities.search_terms.is_empty() {
            let topic: Vec<&str> = entities
                .search_terms
                .iter()
                .take(3)
                .map(String::as_str)
                .collect();
            self.active_topic = Some(topic.join(" "));
        } else if constants::TOPIC_DEFINING_ACTIONS.contains(&action_name) {
            self.active_topic = Some(action_name.to_string());
        }
    }

    /// Learn from a turn: per-action usage counter, and location
    /// context when a geo-political or location entity is present.
    pub fn update_preferences(&mut self, action_name: &str, entities: &Entities) {
        self.user_preferences.record_action(action_name);

        if let Some(location) = entities.best_location() {
            self.location_context = Some(location.to_string());
            self.user_preferences.preferred_location = Some(location.to_string());
        }
    }

    /// Duration since this session started.
    pub fn session_duration(&self) -> chrono::Duration {
        Utc::now() - self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(action: &str) -> ConversationTurn {
        ConversationTurn::new("input", action, 0.9, Entities::default(), "ok", true)
    }

    #[test]
    fn push_turn_trims_oldest_first() {
        let mut ctx = ConversationContext::new("s1".to_string());
        for i in 0..7 {
            ctx.push_turn(turn(&format!("action{i}")), 5);
        }
        assert_eq!(ctx.turns.len(), 5);
        assert_eq!(ctx.turns.front().unwrap().intent_action, "action2");
        assert_eq!(ctx.turns.back().unwrap().intent_action, "action6");
    }

    #[test]
    fn last_interaction_never_precedes_start() {
        let mut ctx = ConversationContext::new("s1".to_string());
        assert!(ctx.last_interaction >= ctx.started_at);
        ctx.push_turn(turn("weather"), 10);
        assert!(ctx.last_interaction >= ctx.started_at);
    }

    #[test]
    fn search_terms_define_the_topic() {
        let mut ctx = ConversationContext::new("s1".to_string());
        let entities = Entities {
            search_terms: vec![
                "rust".to_string(),
                "embedded".to_string(),
                "tooling".to_string(),
                "extra".to_string(),
            ],
            ..Default::default()
        };
        ctx.update_active_topic("wiki", &entities);
        assert_eq!(ctx.active_topic.as_deref(), Some("rust embedded tooling"));
    }

    #[test]
    fn topic_defining_action_without_terms_sets_its_own_name() {
        let mut ctx = ConversationContext::new("s1".to_string());
        ctx.update_active_topic("weather", &Entities::default());
        assert_eq!(ctx.active_topic.as_deref(), Some("weather"));

        // Non topic-defining actions leave the topic alone.
        ctx.update_active_topic("wiki", &Entities::default());
        assert_eq!(ctx.active_topic.as_deref(), Some("weather"));
    }

    #[test]
    fn preferences_count_actions_and_track_location() {
        let mut ctx = ConversationContext::new("s1".to_string());
        let mut entities = Entities::default();
        entities.geo_political = Some("Tokyo".to_string());

        ctx.update_preferences("weather", &entities);
        ctx.update_preferences("weather", &Entities::default());

        assert_eq!(ctx.user_preferences.preferred_actions["weather"], 2);
        assert_eq!(ctx.location_context.as_deref(), Some("Tokyo"));
        assert_eq!(
            ctx.user_preferences.preferred_location.as_deref(),
            Some("Tokyo")
        );
    }
}
