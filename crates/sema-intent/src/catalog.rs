//! Static registry of recognizable actions.
//!
//! Insertion order is the deterministic iteration order, which also
//! serves as the tie-break order during matching: on equal scores the
//! first-seen action wins.

use std::collections::HashMap;

use sema_core::models::Action;
use tracing::warn;

/// Ordered, read-only action registry. Loaded once; empty catalogs are
/// legal; the resolver still answers with its fallback action.
pub struct ActionCatalog {
    actions: Vec<Action>,
    by_name: HashMap<String, usize>,
}

impl ActionCatalog {
    /// Build a catalog from a list of actions. Duplicate names keep the
    /// first occurrence.
    pub fn new(actions: Vec<Action>) -> Self {
        let mut kept = Vec::with_capacity(actions.len());
        let mut by_name = HashMap::with_capacity(actions.len());
        for action in actions {
            if by_name.contains_key(&action.name) {
                warn!(action = %action.name, "duplicate action name, keeping first");
                continue;
            }
            by_name.insert(action.name.clone(), kept.len());
            kept.push(action);
        }
        Self {
            actions: kept,
            by_name,
        }
    }

    /// All actions in insertion order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Look an action up by name.
    pub fn get(&self, name: &str) -> Option<&Action> {
        self.by_name.get(name).map(|&i| &self.actions[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The built-in catalog: the assistant's twelve dispatchable
    /// actions with their descriptions, example utterances, keywords,
    /// and expected parameter names.
    pub fn builtin() -> Self {
        Self::new(vec![
            Action::new(
                "weather",
                "Get weather information and forecasts for any location",
                &[
                    "what's the weather like?",
                    "show me the weather in New York",
                    "is it going to rain today?",
                    "weather forecast for London",
                ],
                &["weather", "temperature", "rain", "snow", "forecast", "climate"],
                &["location"],
            ),
            Action::new(
                "time",
                "Show current time and date information",
                &[
                    "what time is it?",
                    "show me the current time",
                    "what's today's date?",
                    "current time and date",
                ],
                &["time", "date", "clock", "current", "now"],
                &[],
            ),
            Action::new(
                "wiki",
                "Search Wikipedia for information about topics",
                &[
                    "tell me about Albert Einstein",
                    "search Wikipedia for Python programming",
                    "what is machine learning?",
                    "wiki information about Paris",
                ],
                &["wiki", "wikipedia", "information", "about", "tell me", "search"],
                &["topic", "query"],
            ),
            Action::new(
                "google",
                "Search Google for information and websites",
                &[
                    "google search for best restaurants",
                    "search the web for Python tutorials",
                    "find information about cars",
                    "web search for news",
                ],
                &["google", "search", "web", "find", "look up"],
                &["query", "search_term"],
            ),
            Action::new(
                "youtube",
                "Search YouTube for videos",
                &[
                    "find videos about cooking",
                    "search YouTube for music",
                    "show me tutorials on programming",
                    "youtube search for funny cats",
                ],
                &["youtube", "video", "videos", "watch", "music", "tutorial"],
                &["query", "search_term"],
            ),
            Action::new(
                "github",
                "Search GitHub for repositories and code",
                &[
                    "find Python projects on GitHub",
                    "search GitHub for machine learning repos",
                    "show me JavaScript libraries",
                    "github search for web frameworks",
                ],
                &["github", "repository", "code", "project", "library", "framework"],
                &["query", "search_term"],
            ),
            Action::new(
                "whois",
                "Get information about people, domains, or entities",
                &[
                    "who is Elon Musk?",
                    "tell me about Steve Jobs",
                    "information about Albert Einstein",
                    "whois domain.com",
                ],
                &["who", "whois", "about", "information", "person", "biography"],
                &["person", "domain", "entity"],
            ),
            Action::new(
                "watch",
                "Get movie and TV show information from IMDB",
                &[
                    "tell me about Titanic movie",
                    "movie information for Inception",
                    "show details for Breaking Bad",
                    "IMDB info for The Matrix",
                ],
                &["movie", "film", "tv show", "series", "imdb", "watch", "cinema"],
                &["title", "movie_name", "show_name"],
            ),
            Action::new(
                "speedtest",
                "Test internet connection speed",
                &[
                    "test my internet speed",
                    "check connection speed",
                    "how fast is my internet?",
                    "run speed test",
                ],
                &["speed", "internet", "connection", "bandwidth", "test"],
                &[],
            ),
            Action::new(
                "adhan",
                "Get Islamic prayer times for locations",
                &[
                    "prayer times for Mecca",
                    "adhan times in Cairo Egypt",
                    "when is Fajr prayer in London?",
                    "Islamic prayer schedule",
                ],
                &["prayer", "adhan", "islamic", "fajr", "dhuhr", "asr", "maghrib", "isha"],
                &["city", "country"],
            ),
            Action::new(
                "hi",
                "Greeting and general conversation",
                &["hello", "hi there", "good morning", "how are you?"],
                &["hello", "hi", "hey", "greetings", "good morning", "good evening"],
                &[],
            ),
            Action::new(
                "marketwatch",
                "Get stock market and financial information",
                &[
                    "stock price for Apple",
                    "market info for GOOGL",
                    "check Tesla stock",
                    "financial data for Microsoft",
                ],
                &["stock", "market", "price", "shares", "financial", "investment"],
                &["symbol", "stock_name", "country", "security_type"],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_twelve_actions() {
        let catalog = ActionCatalog::builtin();
        assert_eq!(catalog.len(), 12);
        assert!(catalog.contains("weather"));
        assert!(catalog.contains(sema_core::constants::DEFAULT_ACTION));
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let catalog = ActionCatalog::new(vec![
            Action::new("b", "second letter", &[], &[], &[]),
            Action::new("a", "first letter", &[], &[], &[]),
        ]);
        let names: Vec<&str> = catalog.actions().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn duplicate_names_keep_the_first() {
        let catalog = ActionCatalog::new(vec![
            Action::new("time", "the real one", &[], &["time"], &[]),
            Action::new("time", "an impostor", &[], &[], &[]),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("time").unwrap().description, "the real one");
    }

    #[test]
    fn empty_catalog_is_legal() {
        let catalog = ActionCatalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.get("anything").is_none());
    }
}
