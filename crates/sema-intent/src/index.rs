//! Embedding index: one precomputed vector per catalog action.
//!
//! Building is optional. An unavailable provider or a failed embed
//! yields an empty index, a degraded mode the resolver reports via
//! status, never a fatal error. Rebuilding means building a fresh index
//! and swapping the whole value.

use sema_core::traits::EmbeddingProvider;
use tracing::{debug, warn};

use crate::catalog::ActionCatalog;

/// Vectors per action, in catalog order.
pub struct EmbeddingIndex {
    entries: Vec<(String, Vec<f32>)>,
    dimensions: usize,
}

impl EmbeddingIndex {
    /// An index with no vectors; matching falls back to keywords.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            dimensions: 0,
        }
    }

    /// Embed every action's description+examples+keywords text, in
    /// catalog order. Any failure empties the index.
    pub fn build(catalog: &ActionCatalog, provider: &dyn EmbeddingProvider) -> Self {
        if !provider.is_available() {
            warn!(provider = provider.name(), "embedding provider unavailable, index left empty");
            return Self::empty();
        }

        let mut entries = Vec::with_capacity(catalog.len());
        for action in catalog.actions() {
            match provider.embed(&action.embedding_text()) {
                Ok(vector) => entries.push((action.name.clone(), vector)),
                Err(error) => {
                    warn!(
                        action = %action.name,
                        error = %error,
                        "failed to embed action, index left empty"
                    );
                    return Self::empty();
                }
            }
        }

        debug!(actions = entries.len(), "built embedding index");
        Self {
            entries,
            dimensions: provider.dimensions(),
        }
    }

    /// Vectors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.entries
            .iter()
            .map(|(name, vector)| (name.as_str(), vector.as_slice()))
    }

    /// The vector for one action, if indexed.
    pub fn vector(&self, name: &str) -> Option<&[f32]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Cosine similarity between two vectors. Returns 0.0 when either
/// vector has (near-)zero norm or lengths differ, keeping scores finite.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a <= f32::EPSILON || norm_b <= f32::EPSILON {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
