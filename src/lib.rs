//! Contact API - a layered CRUD web service for contacts.
//!
//! Each layer only talks to the one below it, and every dependency is passed
//! in at construction time.
//!
//! # Architecture
//!
//! - **models**: The `Contact` record
//! - **domain**: Validation rules and the validation error taxonomy
//! - **error**: Operation and configuration error types
//! - **repositories**: Storage capability trait and the in-memory store
//! - **services**: Business layer validating input before it reaches a repository
//! - **server**: HTTP endpoints over the service
//! - **observability**: Operation counters
//! - **config**: Configuration from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::Config;
pub use domain::ValidationError;
pub use error::{ConfigError, ContactError};
pub use models::Contact;
pub use observability::{MetricsSnapshot, MetricsTracker};
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use services::{ContactService, ContactServiceImpl};
