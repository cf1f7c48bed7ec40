//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the contact JSON API, the health probes, and the
//! error payload schemas. The HTML pages are not part of the document.
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::contacts::{ContactRequest, ContactResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contacts API",
        description = "CRUD access to the contact book and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::get_contact,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::update_contact,
        crate::inbound::http::contacts::delete_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ContactRequest, ContactResponse, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "contacts", description = "Contact book operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
