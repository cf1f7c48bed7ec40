//! SQLite-backed `ContactRepository` implementation using Diesel ORM.
//!
//! Every port method runs as a single statement, so each operation is atomic
//! without an explicit transaction.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactChanges, ContactDetails, ContactFilter, ContactId};

use super::models::{ContactRow, ContactUpdate, NewContactRow};
use super::pool::{DbPool, PoolError};
use super::schema::contacts;

/// Escape character used in `LIKE` patterns built from search terms.
const LIKE_ESCAPE: char = '\\';

/// Diesel-backed implementation of the `ContactRepository` port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain contact repository errors.
fn map_pool_error(error: PoolError) -> ContactRepositoryError {
    match error {
        PoolError::Checkout { message }
        | PoolError::Build { message }
        | PoolError::Migration { message } => ContactRepositoryError::connection(message),
    }
}

/// SQLite reports lock contention as a generic database error.
fn is_busy(message: &str) -> bool {
    message.contains("database is locked") || message.contains("database is busy")
}

/// Map Diesel errors to domain contact repository errors.
fn map_diesel_error(error: diesel::result::Error) -> ContactRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => ContactRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => ContactRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ContactRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(_, info) if is_busy(info.message()) => {
            ContactRepositoryError::connection("database is busy")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            ContactRepositoryError::query("contact violates a table constraint")
        }
        _ => ContactRepositoryError::query("database error"),
    }
}

/// Convert a database row to a domain contact.
fn row_to_contact(row: ContactRow) -> Result<Contact, ContactRepositoryError> {
    let ContactRow {
        id,
        name,
        phone,
        email,
        kind,
    } = row;
    let details = ContactDetails::new(name, phone, email, kind).map_err(|err| {
        ContactRepositoryError::query(format!("stored contact {id} is invalid: {err}"))
    })?;
    Ok(Contact::new(ContactId::new(id), details))
}

/// Build a `LIKE` pattern matching `term` anywhere, with wildcards in the
/// term itself treated literally.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn create(&self, details: &ContactDetails) -> Result<Contact, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ContactRow = diesel::insert_into(contacts::table)
            .values(NewContactRow::from(details))
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_contact(row)
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ContactRow> = contacts::table
            .find(id.get())
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_contact).transpose()
    }

    async fn list(&self, filter: &ContactFilter) -> Result<Vec<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // SQLite's LIKE folds ASCII case.
        let rows: Vec<ContactRow> = match filter.name_contains() {
            Some(term) => {
                contacts::table
                    .filter(contacts::name.like(contains_pattern(term)).escape(LIKE_ESCAPE))
                    .order(contacts::id.asc())
                    .select(ContactRow::as_select())
                    .load(&mut conn)
                    .await
            }
            None => {
                contacts::table
                    .order(contacts::id.asc())
                    .select(ContactRow::as_select())
                    .load(&mut conn)
                    .await
            }
        }
        .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_contact).collect()
    }

    async fn update(
        &self,
        id: ContactId,
        changes: &ContactChanges,
    ) -> Result<Option<Contact>, ContactRepositoryError> {
        if changes.is_empty() {
            // Diesel rejects empty changesets.
            return self.find_by_id(id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ContactRow> = diesel::update(contacts::table.find(id.get()))
            .set(ContactUpdate::from(changes))
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_contact).transpose()
    }

    async fn delete(&self, id: ContactId) -> Result<bool, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(contacts::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}
