//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContactCommand, ContactQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contacts: Arc<dyn ContactCommand>,
    pub contacts_query: Arc<dyn ContactQuery>,
}

impl HttpState {
    /// Construct state from the contact ports.
    ///
    /// A single service usually implements both ports; pass the same `Arc`
    /// twice in that case.
    pub fn new(contacts: Arc<dyn ContactCommand>, contacts_query: Arc<dyn ContactQuery>) -> Self {
        Self {
            contacts,
            contacts_query,
        }
    }
}
