//! Data models for the contact API.

pub mod contact;

pub use contact::{Contact, BUSINESS_CONTACT_TYPE};
