//! Food API-specific error types.

use super::FoodId;

/// Errors that can occur during food API operations.
#[derive(Debug, thiserror::Error)]
pub enum FoodsError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The requested food item does not exist on the server
    #[error("Food not found: {id}")]
    NotFound { id: FoodId },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The configured base URL cannot be used
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foods_error_display() {
        let error = FoodsError::Api {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        let error_str = error.to_string();
        assert!(error_str.contains("500"));
        assert!(error_str.contains("Internal Server Error"));

        let error = FoodsError::NotFound { id: 42 };
        assert!(error.to_string().contains("Food not found"));
        assert!(error.to_string().contains("42"));

        let error = FoodsError::InvalidUrl("ftp://nope".to_string());
        assert!(error.to_string().contains("ftp://nope"));
    }

    #[test]
    fn test_foods_error_from_serde() {
        let serde_error = serde_json::from_str::<u64>("not json").unwrap_err();
        let error: FoodsError = serde_error.into();
        assert!(matches!(error, FoodsError::Deserialization(_)));
    }
}
