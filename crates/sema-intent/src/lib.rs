//! # sema-intent
//!
//! Maps free-form utterances onto a closed action vocabulary.
//! The resolver scores an utterance against every catalog action
//! (cosine similarity over an embedding index when one could be built,
//! keyword-ratio matching otherwise) and extracts typed entities along
//! the way. Degraded modes are reported via status, never raised.

pub mod args;
pub mod catalog;
pub mod extract;
pub mod index;
pub mod provider;
pub mod resolver;

pub use catalog::ActionCatalog;
pub use extract::EntityExtractor;
pub use index::EmbeddingIndex;
pub use provider::HashedBowProvider;
pub use resolver::IntentResolver;
