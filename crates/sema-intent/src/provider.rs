//! Hashed bag-of-words embedding provider.
//!
//! Deterministic dense vectors with no model files: terms are hashed
//! into fixed-dimension buckets and weighted by term frequency. Not as
//! semantically rich as neural embeddings, but always available, so
//! embedding mode works in air-gapped environments. A neural backend
//! would implement the same [`EmbeddingProvider`] trait.

use std::collections::HashMap;

use sema_core::constants::DEFAULT_EMBEDDING_DIMENSIONS;
use sema_core::errors::SemaResult;
use sema_core::traits::EmbeddingProvider;

/// Always-available hashed bag-of-words provider.
///
/// Same text always yields the same vector, so rebuilding an index on
/// restart is idempotent.
pub struct HashedBowProvider {
    dimensions: usize,
}

impl HashedBowProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// FNV-1a hash of a term, reduced to a bucket index.
    fn bucket(term: &str, dims: usize) -> usize {
        let hash = term.bytes().fold(0xcbf29ce484222325u64, |h, b| {
            (h ^ u64::from(b)).wrapping_mul(0x100000001b3)
        });
        (hash as usize) % dims
    }

    /// Lowercase alphanumeric terms of at least two characters.
    fn terms(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|t| t.len() >= 2)
            .map(str::to_lowercase)
            .collect()
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let terms = Self::terms(text);
        let mut vector = vec![0.0f32; self.dimensions];
        if terms.is_empty() {
            return vector;
        }

        let mut counts: HashMap<&str, f32> = HashMap::new();
        for term in &terms {
            *counts.entry(term).or_default() += 1.0;
        }

        let total = terms.len() as f32;
        for (term, count) in &counts {
            // Longer terms carry more signal; short ones are usually
            // stopwords. Acts as a cheap idf stand-in.
            let weight = (count / total) * (1.0 + (term.len() as f32).ln());
            vector[Self::bucket(term, self.dimensions)] += weight;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

impl Default for HashedBowProvider {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIMENSIONS)
    }
}

impl EmbeddingProvider for HashedBowProvider {
    fn embed(&self, text: &str) -> SemaResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> SemaResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-bow"
    }

    fn is_available(&self) -> bool {
        true
    }
}
