//! Domain validation errors.

use std::fmt;

/// Reasons a contact is rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No contact was supplied.
    MissingContact,

    /// The contact has an empty name, so it could never be retrieved.
    EmptyName,

    /// A `"Business"` contact was supplied without a number.
    BusinessNumberRequired,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContact => write!(f, "unable to create contact"),
            Self::EmptyName => write!(f, "contact name cannot be empty"),
            Self::BusinessNumberRequired => write!(f, "business contacts must have a number"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::MissingContact.to_string(),
            "unable to create contact"
        );
        assert_eq!(
            ValidationError::BusinessNumberRequired.to_string(),
            "business contacts must have a number"
        );
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "contact name cannot be empty"
        );
    }
}
