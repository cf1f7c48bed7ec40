//! SQLite persistence adapters using Diesel ORM.
//!
//! This module provides the concrete implementation of the domain's
//! [`ContactRepository`](crate::domain::ports::ContactRepository) port backed
//! by SQLite via Diesel, with async support through `diesel-async` and `bb8`
//! connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: the repository only translates between Diesel rows and
//!   domain types. Validation lives in the domain.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Embedded migrations**: `DbPool::new` brings the schema up to date before
//!   handing out connections.
//!
//! # Example
//!
//! ```ignore
//! use contacts::outbound::persistence::{DbPool, DieselContactRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("contacts.db")).await?;
//! let repo = DieselContactRepository::new(pool);
//! ```

mod diesel_contact_repository;
mod models;
mod pool;
mod schema;

pub use diesel_contact_repository::DieselContactRepository;
pub use pool::{DbConnection, DbPool, PoolConfig, PoolError};
