//! Error types for the rating tool
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: String },

    #[error("Malformed score: {value:?} is not a non-negative integer")]
    MalformedScore { value: String },

    #[error("Malformed match record: {reason}")]
    MalformedMatch { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RatingError::PlayerNotFound {
            player_id: "alice".to_string(),
        };
        assert_eq!(err.to_string(), "Player not found: alice");

        let err = RatingError::MalformedScore {
            value: "x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed score: \"x\" is not a non-negative integer"
        );
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = RatingError::ConfigurationError {
            message: "bad".to_string(),
        }
        .into();

        assert!(matches!(
            err.downcast_ref::<RatingError>(),
            Some(RatingError::ConfigurationError { .. })
        ));
    }
}
