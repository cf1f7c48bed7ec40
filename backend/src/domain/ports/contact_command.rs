//! Driving port for contact mutations.
//!
//! Inbound adapters (JSON API and HTML forms) call this port with raw
//! [`ContactDraft`] input; validation happens behind it.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDraft, ContactId, Error};

/// Use-case port for creating, updating, and deleting contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactCommand: Send + Sync {
    /// Validate and store a new contact.
    ///
    /// Fails with `invalid_request` when a required field is missing or blank.
    async fn create_contact(&self, draft: ContactDraft) -> Result<Contact, Error>;

    /// Apply the supplied fields of `draft` to an existing contact.
    ///
    /// Fails with `not_found` for unknown ids and `invalid_request` when a
    /// supplied field is blank.
    async fn update_contact(&self, id: ContactId, draft: ContactDraft) -> Result<Contact, Error>;

    /// Permanently remove a contact. Fails with `not_found` for unknown ids.
    async fn delete_contact(&self, id: ContactId) -> Result<(), Error>;
}
