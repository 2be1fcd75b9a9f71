/// Embedding subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("entity recognizer failed: {reason}")]
    RecognizerFailed { reason: String },
}
