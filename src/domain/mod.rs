//! Domain rules for contacts.
//!
//! This module holds the validation taxonomy and the checks a contact must
//! pass before it is handed to a repository.

pub mod errors;
pub mod rules;

pub use errors::ValidationError;
pub use rules::validate_new_contact;
