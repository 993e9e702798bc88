use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Contact repository backed by a process-lifetime map.
///
/// Cloning is cheap and clones share the same map. The check-and-insert in
/// `create` happens under a single write lock, so concurrent creates for the
/// same name resolve to exactly one stored value (the first writer's).
#[derive(Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: Arc<RwLock<HashMap<String, Contact>>>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Check if the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(_: T) -> ContactError {
    ContactError::Storage("contact map lock poisoned".to_string())
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, contact: Contact) -> ContactResult<()> {
        let mut contacts = self.contacts.write().map_err(poisoned)?;

        match contacts.entry(contact.name.clone()) {
            Entry::Occupied(_) => {
                tracing::debug!(name = %contact.name, "Contact already exists, create ignored");
            }
            Entry::Vacant(slot) => {
                tracing::debug!(name = %contact.name, "Contact stored");
                slot.insert(contact);
            }
        }

        Ok(())
    }

    async fn retrieve(&self, name: &str) -> ContactResult<Option<Contact>> {
        let contacts = self.contacts.read().map_err(poisoned)?;
        Ok(contacts.get(name).cloned())
    }
}

impl std::fmt::Debug for InMemoryContactRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryContactRepository")
            .field("len", &self.len())
            .finish()
    }
}
