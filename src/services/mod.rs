//! Application service layer.
//!
//! Services contain business logic and sit between the HTTP handlers and the
//! repositories. They receive their repository at construction time.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceBuilder, ContactServiceImpl};

pub use crate::models::Contact;
