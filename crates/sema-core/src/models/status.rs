use serde::{Deserialize, Serialize};

/// Which matching strategy the resolver settled on at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Cosine similarity over the embedding index.
    Embedding,
    /// Keyword-ratio fallback; the index was empty or unavailable.
    Keyword,
}

/// Introspectable resolver status. Degraded modes are reported here,
/// never raised as errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverStatus {
    pub mode: MatchMode,
    /// Embedding dimensionality, when embedding mode is active.
    pub embedding_dimensions: Option<usize>,
    pub catalog_size: usize,
    pub recognizer_available: bool,
}
