//! Driven port for contact persistence.

use async_trait::async_trait;

use crate::domain::{Contact, ContactChanges, ContactDetails, ContactFilter, ContactId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "contact repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "contact repository query failed: {message}",
    }
}

/// Storage for contact records.
///
/// Each method is a single atomic unit: it either fully applies or leaves the
/// store unchanged. Absent records are reported through `Option`/`bool`
/// rather than errors so services decide how "not found" surfaces.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a new contact and return it with its assigned id.
    async fn create(&self, details: &ContactDetails) -> Result<Contact, ContactRepositoryError>;

    /// Fetch a contact by id.
    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactRepositoryError>;

    /// List contacts matching `filter`, ordered by ascending id.
    async fn list(&self, filter: &ContactFilter) -> Result<Vec<Contact>, ContactRepositoryError>;

    /// Overwrite the supplied fields; `None` when no contact has this id.
    async fn update(
        &self,
        id: ContactId,
        changes: &ContactChanges,
    ) -> Result<Option<Contact>, ContactRepositoryError>;

    /// Remove a contact; `false` when no contact had this id.
    async fn delete(&self, id: ContactId) -> Result<bool, ContactRepositoryError>;
}
