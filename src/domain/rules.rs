//! Creation rules for contacts.

use super::errors::ValidationError;
use crate::models::Contact;

/// Check a contact submitted for creation.
///
/// Rules are applied in order: the contact must be present, its name must be
/// non-empty, and a `"Business"` contact must carry a number. Any other type,
/// including an empty one, is accepted as-is.
///
/// # Example
///
/// ```
/// use contact_api::domain::{validate_new_contact, ValidationError};
/// use contact_api::models::Contact;
///
/// let err = validate_new_contact(Some(Contact::new("Non Zero Inc.", "", "Business")));
/// assert_eq!(err, Err(ValidationError::BusinessNumberRequired));
/// ```
pub fn validate_new_contact(contact: Option<Contact>) -> Result<Contact, ValidationError> {
    let contact = contact.ok_or(ValidationError::MissingContact)?;

    if contact.name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if contact.is_business() && !contact.has_number() {
        return Err(ValidationError::BusinessNumberRequired);
    }

    Ok(contact)
}
