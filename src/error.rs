//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::config::ConfigError;
pub use crate::foods::FoodsError;

/// Main application error type.
///
/// Encompasses the error types of every module so callers can propagate
/// them with `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Food API-related errors
    #[error("Food API error: {0}")]
    Foods(#[from] FoodsError),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let app_error: AppError = ConfigError::FilePathNotSet.into();
        assert!(matches!(app_error, AppError::Config(_)));
        assert!(app_error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_app_error_from_foods_error() {
        let foods_error = FoodsError::Api {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        let app_error: AppError = foods_error.into();
        assert!(matches!(app_error, AppError::Foods(_)));
        assert!(app_error.to_string().contains("Food API error"));
        assert!(app_error.to_string().contains("502"));
    }

    #[test]
    fn test_app_error_logger() {
        let error = AppError::Logger("already set".to_string());
        assert_eq!(error.to_string(), "Logger error: already set");
    }
}
