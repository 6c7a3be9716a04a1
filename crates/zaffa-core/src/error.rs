//! Error types for the zaffa invitation model

use thiserror::Error;

/// Main error type for zaffa operations
#[derive(Error, Debug)]
pub enum ZaffaError {
    /// Language code that maps to neither supported language
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Calendar values that do not form a real date or time
    #[error("Invalid event schedule: {0}")]
    InvalidSchedule(String),
}

/// Convenience Result type for zaffa operations
pub type ZaffaResult<T> = Result<T, ZaffaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ZaffaError::UnsupportedLanguage("fr".to_string());
        assert_eq!(err.to_string(), "Unsupported language: fr");

        let err = ZaffaError::InvalidSchedule("2026-02-30".to_string());
        assert!(err.to_string().contains("Invalid event schedule"));
    }
}
