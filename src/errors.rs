//! Error types for ProfileTwin
//!
//! Startup failures (configuration, profile chunking) are fatal and abort
//! before the chat loop; per-question failures (retrieval, generation) are
//! recovered at the pipeline boundary and never end the session.

use thiserror::Error;

/// Main error type for the profile assistant
#[derive(Error, Debug)]
pub enum TwinError {
    /// Missing or invalid configuration (credentials, config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Profile document missing or structurally unparsable
    #[error("Profile chunking failed: {0}")]
    Chunking(String),

    /// Vector index call failed
    #[error("Vector index error: {0}")]
    Retrieval(String),

    /// Completion call failed
    #[error("Completion error: {0}")]
    Generation(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for assistant operations
pub type Result<T> = std::result::Result<T, TwinError>;

impl TwinError {
    /// True for errors that must abort startup rather than degrade a query
    pub fn is_fatal(&self) -> bool {
        matches!(self, TwinError::Config(_) | TwinError::Chunking(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TwinError::Config("GROQ_API_KEY not set".to_string());
        assert!(err.to_string().contains("GROQ_API_KEY"));
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_fatal_classification() {
        assert!(TwinError::Config("x".into()).is_fatal());
        assert!(TwinError::Chunking("x".into()).is_fatal());
        assert!(!TwinError::Retrieval("x".into()).is_fatal());
        assert!(!TwinError::Generation("x".into()).is_fatal());
    }

    #[test]
    fn test_serde_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TwinError = parse_err.into();
        assert!(matches!(err, TwinError::Serialization(_)));
    }
}
