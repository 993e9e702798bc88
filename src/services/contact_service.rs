//! Contact service layer.
//!
//! Business validation for contact creation, pass-through retrieval.

use crate::domain::validate_new_contact;
use crate::error::{ConfigError, ConfigResult, ContactResult};
use crate::models::Contact;
use crate::observability::MetricsTracker;
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Look up a contact by name.
    ///
    /// An absent or empty name is "not found" and never reaches the store.
    async fn retrieve(&self, name: Option<&str>) -> ContactResult<Option<Contact>>;

    /// Validate and store a new contact.
    ///
    /// Fails with a validation error when the contact is absent, has an
    /// empty name, or is a `"Business"` contact without a number.
    async fn create(&self, contact: Option<Contact>) -> ContactResult<()>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
    metrics: MetricsTracker,
}

impl ContactServiceImpl {
    /// Create a new contact service over the given repository.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self {
            repository,
            metrics: MetricsTracker::new(),
        }
    }

    /// Start building a service from optional parts.
    pub fn builder() -> ContactServiceBuilder {
        ContactServiceBuilder::default()
    }

    /// Metrics recorded by this service.
    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }
}

/// Builder for [`ContactServiceImpl`].
///
/// `build` fails with [`ConfigError::MissingDependency`] when no repository
/// was supplied.
#[derive(Default)]
pub struct ContactServiceBuilder {
    repository: Option<Arc<dyn ContactRepository>>,
    metrics: Option<MetricsTracker>,
}

impl ContactServiceBuilder {
    /// Set the repository the service delegates to.
    pub fn repository(mut self, repository: Arc<dyn ContactRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Share an existing metrics tracker instead of creating a fresh one.
    pub fn metrics(mut self, metrics: MetricsTracker) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Finish construction.
    pub fn build(self) -> ConfigResult<ContactServiceImpl> {
        let repository = self
            .repository
            .ok_or_else(|| ConfigError::MissingDependency("contact repository".to_string()))?;

        Ok(ContactServiceImpl {
            repository,
            metrics: self.metrics.unwrap_or_default(),
        })
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn retrieve(&self, name: Option<&str>) -> ContactResult<Option<Contact>> {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => return Ok(None),
        };

        let found = self.repository.retrieve(name).await?;
        self.metrics.track_retrieve(found.is_some());
        Ok(found)
    }

    async fn create(&self, contact: Option<Contact>) -> ContactResult<()> {
        let contact = match validate_new_contact(contact) {
            Ok(contact) => contact,
            Err(e) => {
                tracing::warn!("Contact rejected: {}", e);
                self.metrics.track_create(false);
                return Err(e.into());
            }
        };

        tracing::info!(name = %contact.name, kind = %contact.kind, "Creating contact");
        self.repository.create(contact).await?;
        self.metrics.track_create(true);
        Ok(())
    }
}
