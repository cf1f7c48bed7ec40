//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`. Each
//! test gets its own SQLite file inside a temporary directory, so tests never
//! share state and can run in parallel.

#![allow(dead_code, reason = "each test crate uses a different subset")]

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use contacts::Trace;
use contacts::domain::ports::ContactRepository;
use contacts::domain::{Contact, ContactDetails, ContactService};
use contacts::inbound::http::configure;
use contacts::inbound::http::state::HttpState;
use contacts::outbound::persistence::{DbPool, DieselContactRepository, PoolConfig};
use tempfile::TempDir;

/// Temporary SQLite database with migrations applied.
pub struct TestDatabase {
    _dir: TempDir,
    pub pool: DbPool,
}

impl TestDatabase {
    /// Create a fresh database file and pool.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let url = dir
            .path()
            .join("contacts.db")
            .to_string_lossy()
            .into_owned();
        let pool = DbPool::new(PoolConfig::new(url).with_max_size(2))
            .await
            .expect("build pool");
        Self { _dir: dir, pool }
    }

    /// Repository over this database.
    pub fn repository(&self) -> DieselContactRepository {
        DieselContactRepository::new(self.pool.clone())
    }

    /// HTTP state wired to a service over this database.
    pub fn http_state(&self) -> web::Data<HttpState> {
        let service = Arc::new(ContactService::new(Arc::new(self.repository())));
        web::Data::new(HttpState::new(service.clone(), service))
    }

    /// Insert a contact directly through the repository.
    pub async fn seed(&self, name: &str, phone: &str, email: &str, kind: &str) -> Contact {
        let details = ContactDetails::new(name, phone, email, kind).expect("valid seed contact");
        self.repository()
            .create(&details)
            .await
            .expect("seed contact")
    }

    /// Insert the canonical "John Doe" contact.
    pub async fn seed_john_doe(&self) -> Contact {
        self.seed("John Doe", "1234567890", "john@example.com", "Personal")
            .await
    }
}

/// Build the full application (pages, JSON API, trace middleware).
pub fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(state).wrap(Trace).configure(configure)
}
