use thiserror::Error;

/// Convenience result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Error type returned by reading, parsing, and summarizing a ratings file.
///
/// Every variant is terminal: a report stops at the first error and nothing is retried.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Underlying I/O error (file not found, permission denied, or a failed write to the output).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input is valid JSON but the top-level value is not an array.
    #[error("expected a json array of records, found {found}")]
    NotAnArray { found: &'static str },

    /// A record has no usable numeric `rating`.
    #[error("record {index}: {message}")]
    Field { index: usize, message: String },

    /// The input array is empty, so the average rating is undefined.
    #[error("cannot compute average rating: division by zero (no records)")]
    EmptyInput,
}
