use async_trait::async_trait;
use contact_api::error::{ContactError, ContactResult};
use contact_api::models::Contact;
use contact_api::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Keeps contacts in memory with the same insert-if-absent behavior as the
/// real store, tracks method calls for verification, and can be switched
/// into a failing mode.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<HashMap<String, Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_with: Arc::new(Mutex::new(None)),
        }
    }

    /// Seed a contact directly, bypassing call tracking.
    pub fn add_contact(&self, contact: Contact) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.insert(contact.name.clone(), contact);
    }

    /// Make every subsequent call fail with a storage error.
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.lock().unwrap().len()
    }

    fn track_call(&self, method: &str) -> ContactResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        match self.fail_with.lock().unwrap().as_ref() {
            Some(message) => Err(ContactError::Storage(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn create(&self, contact: Contact) -> ContactResult<()> {
        self.track_call("create")?;

        let mut contacts = self.contacts.lock().unwrap();
        contacts.entry(contact.name.clone()).or_insert(contact);
        Ok(())
    }

    async fn retrieve(&self, name: &str) -> ContactResult<Option<Contact>> {
        self.track_call("retrieve")?;

        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.get(name).cloned())
    }
}
