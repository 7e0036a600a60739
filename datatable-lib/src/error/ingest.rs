//! Record ingestion errors

/// Errors that can occur while loading records from JSON.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The top-level JSON document is not an array.
    #[error("Expected a JSON array of records")]
    NotAnArray,

    /// An array element is not a JSON object.
    #[error("Record at index {index} is not a JSON object")]
    NotAnObject { index: usize },

    /// The input is not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
