//! Named defaults and fixed word lists shared across the workspace.

/// Default dimensionality for hashed bag-of-words embeddings.
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 256;

/// Below this resolver confidence, callers should show suggestions
/// instead of auto-dispatching.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.6;

/// Default number of suggestions returned for ambiguous input.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

/// How many recent turns the conversation summary looks at.
pub const DEFAULT_SUMMARY_WINDOW: usize = 5;

/// Maximum turns retained per session; older turns are dropped.
pub const DEFAULT_MAX_CONTEXT_TURNS: usize = 10;

/// Sessions idle longer than this are evicted on the next session start.
pub const DEFAULT_SESSION_TIMEOUT_MINUTES: i64 = 30;

/// A turn counts as a follow-up to the previous one within this window.
pub const FOLLOW_UP_WINDOW_SECONDS: i64 = 120;

/// Tokens shorter than or equal to this are never search terms.
pub const MIN_SEARCH_TERM_LEN: usize = 2;

/// Stopwords dropped during search-term extraction.
pub const STOPWORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "a", "an", "and", "or", "but", "in", "with", "to", "for",
    "of", "as", "by",
];

/// Words that mark an utterance as a follow-up to the previous turn.
pub const CONTINUATION_WORDS: &[&str] = &["also", "and", "what about", "how about", "more", "another"];

/// Substring patterns that classify an utterance as a greeting.
pub const GREETING_PATTERNS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
    "greetings",
    "howdy",
];

/// Substring patterns that classify an utterance as a farewell.
pub const FAREWELL_PATTERNS: &[&str] = &[
    "goodbye",
    "bye",
    "see you",
    "farewell",
    "exit",
    "quit",
    "thanks",
    "thank you",
    "that's all",
];

/// Actions whose name becomes the active topic when no search terms exist.
pub const TOPIC_DEFINING_ACTIONS: &[&str] = &["weather", "time", "speedtest"];

/// Actions that take a remembered location as an argument and a hint.
pub const LOCATION_SENSITIVE_ACTIONS: &[&str] = &["weather", "adhan"];

/// Actions that get a related-topic hint appended to their responses.
pub const TOPIC_CONTINUATION_ACTIONS: &[&str] = &["wiki", "google", "youtube", "github"];

/// Default value for the configured fallback action.
pub const DEFAULT_ACTION: &str = "hi";
