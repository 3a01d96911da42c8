use thiserror::Error;

/// Main error type for the fuzzy sorter
///
/// Matching and sorting never fail; these errors only come from loading
/// options or candidate lists.
#[derive(Error, Debug)]
pub enum FuzzySortError {
    /// I/O errors (options file, candidate list)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Weights that would break the ranking preference order
    #[error("Invalid option '{field}': {message}")]
    InvalidOptions { field: String, message: String },

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for FuzzySortError {
    fn from(s: String) -> Self {
        FuzzySortError::Other(s)
    }
}

impl From<&str> for FuzzySortError {
    fn from(s: &str) -> Self {
        FuzzySortError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FuzzySortError>;
