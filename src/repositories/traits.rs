use crate::error::ContactResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Repository for storing contacts keyed by name.
///
/// Provides abstraction over contact storage and retrieval,
/// enabling different implementations (in-memory, persistent, mock).
/// Implementations handle their own synchronization; callers never lock.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Store a contact unless one with the same name already exists.
    ///
    /// A create for an existing name is a no-op: the first stored value is
    /// kept and no error is returned.
    async fn create(&self, contact: Contact) -> ContactResult<()>;

    /// Retrieve a contact by name, or `None` if no contact has that name.
    async fn retrieve(&self, name: &str) -> ContactResult<Option<Contact>>;
}
