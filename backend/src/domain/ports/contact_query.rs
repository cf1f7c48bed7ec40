//! Driving port for contact reads.

use async_trait::async_trait;

use crate::domain::{Contact, ContactFilter, ContactId, Error};

/// Use-case port for fetching and listing contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactQuery: Send + Sync {
    /// Fetch one contact, failing with `not_found` for unknown ids.
    async fn get_contact(&self, id: ContactId) -> Result<Contact, Error>;

    /// List contacts matching `filter` in insertion order.
    async fn list_contacts(&self, filter: ContactFilter) -> Result<Vec<Contact>, Error>;
}
