//! Entity extraction: recognizer-backed when one is available,
//! token-based otherwise.
//!
//! Pure with respect to static resources: the same text always yields
//! the same entities, regardless of call order.

use std::collections::HashSet;

use sema_core::constants::{MIN_SEARCH_TERM_LEN, STOPWORDS};
use sema_core::models::Entities;
use sema_core::traits::EntityRecognizer;
use tracing::warn;

/// Pulls typed entity spans and free-text search terms out of an
/// utterance.
pub struct EntityExtractor {
    recognizer: Option<Box<dyn EntityRecognizer>>,
}

impl EntityExtractor {
    /// Token-based extraction only; no named-entity kinds are produced.
    pub fn new() -> Self {
        Self { recognizer: None }
    }

    /// Extraction backed by a named-entity recognizer. Recognizer
    /// failures degrade to token-based extraction per call.
    pub fn with_recognizer(recognizer: Box<dyn EntityRecognizer>) -> Self {
        Self {
            recognizer: Some(recognizer),
        }
    }

    pub fn recognizer_available(&self) -> bool {
        self.recognizer
            .as_ref()
            .map(|r| r.is_available())
            .unwrap_or(false)
    }

    /// Extract entities from `text`.
    pub fn extract(&self, text: &str) -> Entities {
        match &self.recognizer {
            Some(recognizer) if recognizer.is_available() => match recognizer.recognize(text) {
                Ok(spans) => {
                    let mut entities = Entities::default();
                    // Overwrite policy: the last span of a kind wins.
                    for span in spans {
                        entities.insert(span.kind, span.text);
                    }
                    entities.search_terms = Self::linguistic_terms(text);
                    entities
                }
                Err(error) => {
                    warn!(
                        recognizer = recognizer.name(),
                        error = %error,
                        "recognizer failed, using token fallback"
                    );
                    Self::fallback(text)
                }
            },
            _ => Self::fallback(text),
        }
    }

    /// Linguistic-mode term pass: punctuation stripped off tokens,
    /// stopwords and short tokens dropped, first occurrence kept.
    fn linguistic_terms(text: &str) -> Vec<String> {
        let tokens = text
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()));
        Self::filter_terms(tokens)
    }

    /// Fallback mode: plain whitespace split, same stopword and length
    /// filters, no punctuation handling.
    fn fallback(text: &str) -> Entities {
        Entities {
            search_terms: Self::filter_terms(text.split_whitespace()),
            ..Default::default()
        }
    }

    fn filter_terms<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut terms = Vec::new();
        for token in tokens {
            if token.len() <= MIN_SEARCH_TERM_LEN {
                continue;
            }
            let lowered = token.to_lowercase();
            if STOPWORDS.contains(&lowered.as_str()) {
                continue;
            }
            if seen.insert(lowered) {
                terms.push(token.to_string());
            }
        }
        terms
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
