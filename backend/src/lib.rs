//! Contact book service: domain, adapters, and HTTP wiring.
//!
//! The crate follows a hexagonal layout. [`domain`] owns the contact model,
//! its ports, and the service implementing them; [`inbound::http`] exposes the
//! JSON API and HTML pages; [`outbound::persistence`] stores contacts in SQLite
//! through Diesel.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
