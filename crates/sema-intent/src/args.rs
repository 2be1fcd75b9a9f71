//! Argument selection for the external action executor.
//!
//! The executor boundary receives `(action_name, args)`; this module
//! owns the fixed per-action policy that turns an intent's entities
//! into that ordered argument list. Exit-status interpretation stays
//! with the caller.

use sema_core::constants::LOCATION_SENSITIVE_ACTIONS;
use sema_core::models::Intent;

/// Build the executor argument list for a resolved intent: search terms
/// first, then the best location for location-sensitive actions, then
/// the person entity for `whois`.
pub fn arguments_for(intent: &Intent) -> Vec<String> {
    let mut args = intent.entities.search_terms.clone();

    if LOCATION_SENSITIVE_ACTIONS.contains(&intent.action_name.as_str()) {
        if let Some(location) = intent.entities.best_location() {
            args.push(location.to_string());
        }
    }

    if intent.action_name == "whois" {
        if let Some(person) = intent.entities.person.as_deref() {
            args.push(person.to_string());
        }
    }

    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use sema_core::models::Entities;

    fn intent(action: &str, entities: Entities) -> Intent {
        Intent {
            action_name: action.to_string(),
            confidence: 0.9,
            entities,
            raw_text: String::new(),
        }
    }

    #[test]
    fn search_terms_come_first() {
        let entities = Entities {
            search_terms: vec!["rust".to_string(), "tutorials".to_string()],
            ..Default::default()
        };
        assert_eq!(arguments_for(&intent("google", entities)), ["rust", "tutorials"]);
    }

    #[test]
    fn location_sensitive_actions_append_the_location() {
        let entities = Entities {
            search_terms: vec!["weather".to_string()],
            geo_political: Some("Cairo".to_string()),
            ..Default::default()
        };
        assert_eq!(arguments_for(&intent("weather", entities)), ["weather", "Cairo"]);
    }

    #[test]
    fn plain_location_used_when_no_geo_political() {
        let entities = Entities {
            location: Some("the coast".to_string()),
            ..Default::default()
        };
        assert_eq!(arguments_for(&intent("adhan", entities)), ["the coast"]);
    }

    #[test]
    fn whois_appends_the_person() {
        let entities = Entities {
            search_terms: vec!["who".to_string()],
            person: Some("Ada Lovelace".to_string()),
            ..Default::default()
        };
        assert_eq!(
            arguments_for(&intent("whois", entities)),
            ["who", "Ada Lovelace"]
        );
    }

    #[test]
    fn non_sensitive_actions_ignore_location_entities() {
        let entities = Entities {
            geo_political: Some("Paris".to_string()),
            ..Default::default()
        };
        assert!(arguments_for(&intent("time", entities)).is_empty());
    }
}
