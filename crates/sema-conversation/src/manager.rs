//! Session lifecycle and context-aware responses.
//!
//! One context is "current" at a time; all sessions live in a history
//! map keyed by session id. Idle sessions are evicted opportunistically
//! when a new session starts, never asynchronously.

use std::collections::{HashMap, HashSet};

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use uuid::Uuid;

use sema_core::config::ConversationConfig;
use sema_core::constants::{
    DEFAULT_SUMMARY_WINDOW, FOLLOW_UP_WINDOW_SECONDS, LOCATION_SENSITIVE_ACTIONS,
    TOPIC_CONTINUATION_ACTIONS,
};
use sema_core::models::{
    ConversationContext, ConversationSummary, ConversationTurn, Entities, SummaryStatus,
};

use crate::phrases;

/// Owns all conversation sessions and the pointer to the current one.
pub struct ConversationManager {
    config: ConversationConfig,
    pub(crate) history: HashMap<String, ConversationContext>,
    pub(crate) current: Option<String>,
    rng: StdRng,
}

impl ConversationManager {
    /// Manager with an entropy-seeded RNG for response pools.
    pub fn new(config: ConversationConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Manager with a fixed RNG seed; response pool draws become
    /// reproducible. Intended for tests and replay.
    pub fn with_seed(config: ConversationConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: ConversationConfig, rng: StdRng) -> Self {
        Self {
            config,
            history: HashMap::new(),
            current: None,
            rng,
        }
    }

    /// Start a new session: create its context, make it current, evict
    /// idle sessions, and return `(session_id, greeting)`.
    ///
    /// Auto-generated ids are regenerated until unique within the
    /// history. A caller-provided id that already exists replaces that
    /// session (restart semantics).
    pub fn start_conversation(&mut self, session_id: Option<String>) -> (String, String) {
        let id = match session_id {
            Some(id) => id,
            None => loop {
                let candidate = format!("session_{}", Uuid::new_v4());
                if !self.history.contains_key(&candidate) {
                    break candidate;
                }
            },
        };

        self.history
            .insert(id.clone(), ConversationContext::new(id.clone()));
        self.current = Some(id.clone());

        self.evict_expired();

        let greeting = phrases::pick(&mut self.rng, phrases::GREETING_RESPONSES).to_string();
        debug!(session = %id, "started conversation");
        (id, greeting)
    }

    /// Record a completed turn in the current session, starting one
    /// implicitly if none is active. Updates the turn log (bounded,
    /// oldest dropped), the active topic, and learned preferences.
    pub fn add_turn(
        &mut self,
        user_input: &str,
        action_name: &str,
        confidence: f32,
        entities: Entities,
        response: &str,
        success: bool,
    ) {
        let needs_session = match &self.current {
            Some(id) => !self.history.contains_key(id),
            None => true,
        };
        if needs_session {
            self.start_conversation(None);
        }

        let max_turns = self.config.max_context_turns;
        // The current id is guaranteed present after the check above.
        let Some(ctx) = self
            .current
            .as_ref()
            .and_then(|id| self.history.get_mut(id))
        else {
            return;
        };

        let turn = ConversationTurn::new(
            user_input,
            action_name,
            confidence,
            entities.clone(),
            response,
            success,
        );
        ctx.push_turn(turn, max_turns);
        ctx.update_active_topic(action_name, &entities);
        ctx.update_preferences(action_name, &entities);
    }

    /// Produce the response text for a turn, classified in order:
    /// greeting → farewell → follow-up acknowledgment → contextual
    /// hints. Without a current context the base response passes
    /// through unchanged.
    ///
    /// `_entities` is part of the boundary signature; hints read the
    /// remembered context, not the current utterance's entities.
    pub fn get_contextual_response(
        &mut self,
        user_input: &str,
        action_name: &str,
        _entities: &Entities,
        base_response: &str,
    ) -> String {
        let Some(ctx) = self.current.as_ref().and_then(|id| self.history.get(id)) else {
            return base_response.to_string();
        };

        let has_turns = !ctx.turns.is_empty();
        let is_follow_up = Self::is_follow_up(ctx, user_input, action_name);
        let location_context = ctx.location_context.clone();
        let active_topic = ctx.active_topic.clone();

        if phrases::is_greeting(user_input) {
            return if has_turns {
                "Welcome back! What else can I help you with?".to_string()
            } else {
                phrases::pick(&mut self.rng, phrases::GREETING_RESPONSES).to_string()
            };
        }

        if phrases::is_farewell(user_input) {
            let mut farewell =
                phrases::pick(&mut self.rng, phrases::FAREWELL_RESPONSES).to_string();
            if has_turns {
                farewell.push_str(" It was great helping you today!");
            }
            return farewell;
        }

        if is_follow_up {
            let ack = phrases::pick(&mut self.rng, phrases::ACKNOWLEDGMENT_RESPONSES);
            return format!("{ack} Here's more information:\n{base_response}");
        }

        Self::augment_response(base_response, action_name, location_context, active_topic)
    }

    /// A turn is a follow-up when the previous turn used the same
    /// action within the recency window, or the utterance carries a
    /// continuation word.
    fn is_follow_up(ctx: &ConversationContext, user_input: &str, action_name: &str) -> bool {
        if let Some(last) = ctx.turns.back() {
            let elapsed = Utc::now() - last.timestamp;
            if elapsed < Duration::seconds(FOLLOW_UP_WINDOW_SECONDS)
                && last.intent_action == action_name
            {
                return true;
            }
        }
        phrases::has_continuation_word(user_input)
    }

    /// Append remembered-location and related-topic hints, skipping any
    /// already present in the response (case-insensitive containment).
    fn augment_response(
        base_response: &str,
        action_name: &str,
        location_context: Option<String>,
        active_topic: Option<String>,
    ) -> String {
        let mut response = base_response.to_string();
        let lowered = response.to_lowercase();

        if LOCATION_SENSITIVE_ACTIONS.contains(&action_name) {
            if let Some(location) = location_context {
                if !lowered.contains(&location.to_lowercase()) {
                    response.push_str(&format!(
                        "\n(I remember you usually ask about {location})"
                    ));
                }
            }
        }

        if TOPIC_CONTINUATION_ACTIONS.contains(&action_name) {
            if let Some(topic) = active_topic {
                if !lowered.contains(&topic.to_lowercase()) {
                    response.push_str(&format!("\n(Related to our discussion about {topic})"));
                }
            }
        }

        response
    }

    /// Summarize the current conversation. Reports
    /// `no_active_conversation` via the status field instead of erring.
    pub fn get_conversation_summary(&self) -> ConversationSummary {
        let Some(ctx) = self.current.as_ref().and_then(|id| self.history.get(id)) else {
            return ConversationSummary::inactive();
        };

        let window_start = ctx.turns.len().saturating_sub(DEFAULT_SUMMARY_WINDOW);
        let mut recent_actions: Vec<String> = Vec::new();
        let mut recent_topics: Vec<String> = Vec::new();
        let mut seen_topics = HashSet::new();

        for turn in ctx.turns.iter().skip(window_start) {
            if !recent_actions.contains(&turn.intent_action) {
                recent_actions.push(turn.intent_action.clone());
            }
            for term in &turn.entities.search_terms {
                if seen_topics.insert(term.to_lowercase()) {
                    recent_topics.push(term.clone());
                }
            }
        }

        ConversationSummary {
            status: SummaryStatus::Active,
            session_id: Some(ctx.session_id.clone()),
            duration_seconds: ctx.session_duration().num_seconds(),
            total_turns: ctx.turns.len(),
            active_topic: ctx.active_topic.clone(),
            recent_actions,
            recent_topics,
            user_preferences: ctx.user_preferences.clone(),
        }
    }

    /// The current session's context, if any.
    pub fn current_context(&self) -> Option<&ConversationContext> {
        self.current.as_ref().and_then(|id| self.history.get(id))
    }

    /// Look up any session by id.
    pub fn context(&self, session_id: &str) -> Option<&ConversationContext> {
        self.history.get(session_id)
    }

    /// Number of sessions in the history, current included.
    pub fn session_count(&self) -> usize {
        self.history.len()
    }

    /// Drop sessions idle past the configured timeout.
    fn evict_expired(&mut self) {
        let cutoff = Utc::now() - Duration::minutes(self.config.session_timeout_minutes);
        let before = self.history.len();
        self.history.retain(|_, ctx| ctx.last_interaction >= cutoff);
        let evicted = before - self.history.len();
        if evicted > 0 {
            info!(evicted, "cleaned up idle conversation sessions");
            if let Some(current) = &self.current {
                if !self.history.contains_key(current) {
                    self.current = None;
                }
            }
        }
    }
}
