use crate::errors::SemaResult;
use crate::models::EntityKind;

/// One recognized span of text with its entity kind.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSpan {
    pub kind: EntityKind,
    pub text: String,
}

/// Named-entity recognizer backend.
///
/// Optional: the entity extractor runs a token-based fallback when no
/// recognizer is available or a call fails.
pub trait EntityRecognizer: Send + Sync {
    /// Recognize entity spans in the given text, in document order.
    fn recognize(&self, text: &str) -> SemaResult<Vec<NamedSpan>>;

    /// Human-readable recognizer name.
    fn name(&self) -> &str;

    /// Whether this recognizer is currently available.
    fn is_available(&self) -> bool;
}
