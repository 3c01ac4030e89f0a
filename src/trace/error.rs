use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    /// The requested trace file could not be opened for appending
    #[error("Failed to open trace file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize update event: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write update event: {0}")]
    Write(#[from] std::io::Error),
}
