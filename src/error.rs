use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode booking request: {0}")]
    Encode(String),
    #[error("booking request failed: {0}")]
    Network(String),
    #[error("booking endpoint returned status {0}")]
    Status(u16),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage rejected the write")]
    Write,
    #[error("stored draft is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}
