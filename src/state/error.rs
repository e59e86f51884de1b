//! State management-specific error types.

/// Errors that can occur during state operations, chiefly product form
/// validation before a mutation is dispatched.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Product title is empty
    #[error("Product title is required")]
    TitleRequired,

    /// Price input is not a number
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Category id input is not an integer
    #[error("Invalid category id: {0}")]
    InvalidCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::TitleRequired;
        assert!(error.to_string().contains("title is required"));

        let error = StateError::InvalidPrice("abc".to_string());
        assert!(error.to_string().contains("Invalid price"));
        assert!(error.to_string().contains("abc"));

        let error = StateError::InvalidCategory("x".to_string());
        assert!(error.to_string().contains("Invalid category id"));
        assert!(error.to_string().contains("x"));
    }
}
