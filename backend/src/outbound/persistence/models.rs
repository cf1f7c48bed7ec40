//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{ContactChanges, ContactDetails};

use super::schema::contacts;

/// Row struct for reading from the contacts table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(crate) struct ContactRow {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub kind: String,
}

/// Insertable struct for creating contact records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub name: &'a str,
    pub phone: &'a str,
    pub email: &'a str,
    pub kind: &'a str,
}

impl<'a> From<&'a ContactDetails> for NewContactRow<'a> {
    fn from(details: &'a ContactDetails) -> Self {
        Self {
            name: details.name(),
            phone: details.phone(),
            email: details.email(),
            kind: details.kind(),
        }
    }
}

/// Changeset for partial updates; `None` columns are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = contacts)]
pub(crate) struct ContactUpdate<'a> {
    pub name: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub kind: Option<&'a str>,
}

impl<'a> From<&'a ContactChanges> for ContactUpdate<'a> {
    fn from(changes: &'a ContactChanges) -> Self {
        Self {
            name: changes.name(),
            phone: changes.phone(),
            email: changes.email(),
            kind: changes.kind(),
        }
    }
}
