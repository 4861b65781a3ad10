use thiserror::Error;

/// Application-wide error types for henet.
///
/// Every variant is fatal to the current run: nothing in the pipeline
/// retries or skips a failed key.
#[derive(Error, Debug)]
pub enum AppError {
    /// Neither a single key nor a key batch was supplied.
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// A batch line does not have the shape required by its domain.
    #[error("Unsupported pattern on line {line_number}: {line:?}")]
    MalformedInput { line_number: usize, line: String },

    /// A batch was supplied but holds no usable keys.
    #[error("Empty batch: {0}")]
    EmptyBatch(String),

    /// HTTP request failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// A selector could not be compiled against the fetched document.
    #[error("Extraction error: {0}")]
    ExtractionError(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Reading the key batch failed.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    /// Returns true if the document for a key could not be retrieved at all.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            AppError::HttpError(_) | AppError::NetworkError(_) | AppError::Timeout(_)
        )
    }
}
