//! Builders wiring the persistence adapter into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use contacts::domain::ContactService;
use contacts::inbound::http::state::HttpState;
use contacts::outbound::persistence::{DbPool, DieselContactRepository};

/// Build HTTP state backed by the SQLite contact repository.
///
/// One [`ContactService`] instance serves both the command and query ports.
pub(crate) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    let repository = Arc::new(DieselContactRepository::new(pool.clone()));
    let service = Arc::new(ContactService::new(repository));
    web::Data::new(HttpState::new(service.clone(), service))
}
