//! Response pools and utterance pattern detection.
//!
//! Pool draws go through an injected RNG so tests can seed them; every
//! pool is non-empty, so a draw always returns a usable string.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use sema_core::constants::{CONTINUATION_WORDS, FAREWELL_PATTERNS, GREETING_PATTERNS};

/// Session-opening greetings.
pub const GREETING_RESPONSES: &[&str] = &[
    "Hello! I'm your assistant. How can I help you today?",
    "Hi there! What can I do for you?",
    "Hey! Ready to help you with anything you need.",
    "Good to see you! What would you like me to help with?",
];

/// Session-closing farewells.
pub const FAREWELL_RESPONSES: &[&str] = &[
    "Goodbye! Feel free to ask me anything anytime.",
    "See you later! I'm always here when you need help.",
    "Take care! Don't hesitate to come back if you need anything.",
    "Bye! Looking forward to helping you again soon.",
];

/// Follow-up acknowledgments.
pub const ACKNOWLEDGMENT_RESPONSES: &[&str] = &[
    "Got it!",
    "Understood!",
    "Perfect!",
    "Sure thing!",
    "Absolutely!",
    "No problem!",
];

/// Draw one phrase from a pool. Never returns an empty string, even
/// for an empty pool.
pub fn pick<'a>(rng: &mut StdRng, pool: &'a [&str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or("Hello!")
}

/// Case-insensitive substring match against the greeting patterns.
pub fn is_greeting(input: &str) -> bool {
    contains_any(input, GREETING_PATTERNS)
}

/// Case-insensitive substring match against the farewell patterns.
pub fn is_farewell(input: &str) -> bool {
    contains_any(input, FAREWELL_PATTERNS)
}

/// True when the utterance carries a continuation word ("also",
/// "what about", ...), marking it as a follow-up.
pub fn has_continuation_word(input: &str) -> bool {
    contains_any(input, CONTINUATION_WORDS)
}

fn contains_any(input: &str, patterns: &[&str]) -> bool {
    let lowered = input.to_lowercase();
    patterns.iter().any(|p| lowered.contains(p))
}
