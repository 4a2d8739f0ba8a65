use thiserror::Error;

/// Custom error type for draft editing and submission.
#[derive(Error, Debug)]
pub enum DraftError {
    /// A positional field-list operation was given an index outside the
    /// current sequence. The sequence is left untouched.
    #[error("field index {index} out of bounds (len: {len})")]
    IndexOutOfBounds { index: usize, len: usize },
    /// The table name was empty at submission time.
    #[error("table name is required")]
    MissingTableName,
    #[error("field {index}: name is required")]
    MissingFieldName { index: usize },
    #[error("field {index}: type must be chosen")]
    MissingFieldType { index: usize },
    /// Error while serializing a draft for a diagnostic sink.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
