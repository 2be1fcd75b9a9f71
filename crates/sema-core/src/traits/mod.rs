//! Seam traits toward replaceable model backends.

mod embedding;
mod recognizer;

pub use embedding::EmbeddingProvider;
pub use recognizer::{EntityRecognizer, NamedSpan};
