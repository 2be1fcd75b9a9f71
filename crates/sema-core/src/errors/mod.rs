//! Per-subsystem error enums and the crate-wide umbrella error.

mod embedding_error;
mod persistence_error;

pub use embedding_error::EmbeddingError;
pub use persistence_error::PersistenceError;

/// Umbrella error for the sema core. Subsystem errors convert into it
/// via `#[from]`, so `?` works across crate boundaries.
#[derive(Debug, thiserror::Error)]
pub enum SemaError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the workspace.
pub type SemaResult<T> = Result<T, SemaError>;
