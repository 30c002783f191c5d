use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents errors originating from the database, typically from `sqlx`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents request validation failures, keyed by field.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Represents JSON (de)serialization failures.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = AppError::Config("APP_PORT must be a number".to_string());
        assert_eq!(err.to_string(), "Configuration error: APP_PORT must be a number");

        let err = AppError::from(io::Error::other("disk full"));
        assert_eq!(err.to_string(), "I/O error: disk full");
    }

    #[test]
    fn test_validation_conversion() {
        let err = AppError::from(validator::ValidationErrors::new());
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().starts_with("Validation error:"));
    }
}
