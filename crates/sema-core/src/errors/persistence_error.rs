/// History persistence errors. A failed save or load never corrupts
/// the manager's in-memory state.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("history I/O failed at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("history serialization failed: {reason}")]
    Serialize { reason: String },

    #[error("history deserialization failed at {path}: {reason}")]
    Deserialize { path: String, reason: String },
}
