//! State management-specific error types.

use crate::foods::FoodId;

/// Errors that can occur during state operations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// No food is selected in the list
    #[error("No food selected")]
    NoSelection,

    /// Food not present in the local list
    #[error("Food not found: {id}")]
    FoodNotFound { id: FoodId },

    /// Form input failed validation
    #[error("Invalid input: {0}")]
    InvalidForm(String),

    /// Edit form submitted without changes
    #[error("Nothing to update")]
    NothingToUpdate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::NoSelection;
        assert!(error.to_string().contains("No food selected"));

        let error = StateError::FoodNotFound { id: 12 };
        assert!(error.to_string().contains("Food not found"));
        assert!(error.to_string().contains("12"));

        let error = StateError::InvalidForm("name is required".to_string());
        assert!(error.to_string().contains("Invalid input"));
        assert!(error.to_string().contains("name is required"));

        let error = StateError::NothingToUpdate;
        assert!(error.to_string().contains("Nothing to update"));
    }
}
