//! Contact domain service.
//!
//! Implements the [`ContactCommand`] and [`ContactQuery`] driving ports on top
//! of a [`ContactRepository`], owning input validation and the mapping from
//! storage outcomes to domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{
    ContactCommand, ContactQuery, ContactRepository, ContactRepositoryError,
};
use crate::domain::{
    Contact, ContactChanges, ContactDetails, ContactDraft, ContactFilter, ContactId,
    ContactValidationError, Error,
};

fn map_repository_error(error: ContactRepositoryError) -> Error {
    match error {
        ContactRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("contact repository unavailable: {message}"))
        }
        ContactRepositoryError::Query { message } => {
            Error::internal(format!("contact repository error: {message}"))
        }
    }
}

fn map_validation_error(error: ContactValidationError) -> Error {
    let field = error.field();
    Error::invalid_request(error.to_string()).with_details(json!({
        "field": field.as_str(),
        "code": "missing_field",
    }))
}

fn contact_not_found(id: ContactId) -> Error {
    Error::not_found(format!("contact {id} not found"))
}

/// Contact service implementing both driving ports.
#[derive(Clone)]
pub struct ContactService<R> {
    contact_repo: Arc<R>,
}

impl<R> ContactService<R> {
    /// Create a new service backed by the contact repository.
    pub fn new(contact_repo: Arc<R>) -> Self {
        Self { contact_repo }
    }
}

#[async_trait]
impl<R> ContactCommand for ContactService<R>
where
    R: ContactRepository,
{
    async fn create_contact(&self, draft: ContactDraft) -> Result<Contact, Error> {
        let details = ContactDetails::try_from(draft).map_err(map_validation_error)?;
        let contact = self
            .contact_repo
            .create(&details)
            .await
            .map_err(map_repository_error)?;
        info!(contact_id = %contact.id(), "contact created");
        Ok(contact)
    }

    async fn update_contact(&self, id: ContactId, draft: ContactDraft) -> Result<Contact, Error> {
        let changes = ContactChanges::try_from(draft).map_err(map_validation_error)?;
        let updated = if changes.is_empty() {
            self.contact_repo.find_by_id(id).await
        } else {
            self.contact_repo.update(id, &changes).await
        };
        let contact = updated
            .map_err(map_repository_error)?
            .ok_or_else(|| contact_not_found(id))?;
        info!(contact_id = %id, "contact updated");
        Ok(contact)
    }

    async fn delete_contact(&self, id: ContactId) -> Result<(), Error> {
        let removed = self
            .contact_repo
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(contact_not_found(id));
        }
        info!(contact_id = %id, "contact deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> ContactQuery for ContactService<R>
where
    R: ContactRepository,
{
    async fn get_contact(&self, id: ContactId) -> Result<Contact, Error> {
        self.contact_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| contact_not_found(id))
    }

    async fn list_contacts(&self, filter: ContactFilter) -> Result<Vec<Contact>, Error> {
        self.contact_repo
            .list(&filter)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "contact_service_tests.rs"]
mod tests;
