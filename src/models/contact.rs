//! Contact model representing a single entry in the address book.

use serde::{Deserialize, Serialize};

/// Contact type that requires a phone number on creation.
pub const BUSINESS_CONTACT_TYPE: &str = "Business";

/// A contact, keyed by its name.
///
/// Fields are plain data. Business rules (non-empty name, business contacts
/// carrying a number) are enforced by the service layer, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Contact {
    /// Unique key for the contact
    pub name: String,

    /// Phone number, empty when unknown
    pub number: String,

    /// Free-form contact type (e.g. "Business", "person")
    #[serde(rename = "type")]
    pub kind: String,
}

impl Contact {
    /// Create a new contact from its three fields.
    pub fn new(name: impl Into<String>, number: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
            kind: kind.into(),
        }
    }

    /// Whether this contact is of the `"Business"` type.
    ///
    /// The comparison is exact; `"business"` is just another free-form type.
    pub fn is_business(&self) -> bool {
        self.kind == BUSINESS_CONTACT_TYPE
    }

    /// Whether a phone number is present.
    pub fn has_number(&self) -> bool {
        !self.number.is_empty()
    }
}
