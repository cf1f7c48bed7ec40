//! Contact JSON API handlers.
//!
//! ```text
//! GET    /api/contacts
//! GET    /api/contacts/{id}
//! POST   /api/contacts
//! PUT    /api/contacts/{id}
//! DELETE /api/contacts/{id}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Contact, ContactDraft, ContactFilter};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_contact_id;

/// Request payload for creating or updating a contact.
///
/// Every field is optional at the transport level; creation requires all
/// four while updates apply only the fields present.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ContactRequest {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "9876543210")]
    pub phone: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    /// Free-form category label such as "Personal" or "Work".
    #[serde(rename = "type")]
    #[schema(example = "Personal")]
    pub kind: Option<String>,
}

impl From<ContactRequest> for ContactDraft {
    fn from(value: ContactRequest) -> Self {
        Self {
            name: value.name,
            phone: value.phone,
            email: value.email,
            kind: value.kind,
        }
    }
}

/// Response payload for a stored contact.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ContactResponse {
    #[schema(example = 1)]
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Contact> for ContactResponse {
    fn from(value: Contact) -> Self {
        let (id, details) = value.into_parts();
        Self {
            id: id.get(),
            name: details.name().to_owned(),
            phone: details.phone().to_owned(),
            email: details.email().to_owned(),
            kind: details.kind().to_owned(),
        }
    }
}

/// Query parameters for listing contacts.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring matched against contact names.
    pub search: Option<String>,
}

impl SearchParams {
    pub(crate) fn filter(&self) -> ContactFilter {
        ContactFilter::from_search(self.search.as_deref())
    }
}

/// List contacts, optionally filtered by name.
#[utoipa::path(
    get,
    path = "/api/contacts",
    params(SearchParams),
    responses(
        (status = 200, description = "Contacts in insertion order", body = [ContactResponse]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> ApiResult<web::Json<Vec<ContactResponse>>> {
    let contacts = state.contacts_query.list_contacts(params.filter()).await?;
    Ok(web::Json(
        contacts.into_iter().map(ContactResponse::from).collect(),
    ))
}

/// Fetch a single contact.
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    params(("id" = i32, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "Contact", body = ContactResponse),
        (status = 404, description = "Contact not found", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "getContact"
)]
#[get("/contacts/{id}")]
pub async fn get_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ContactResponse>> {
    let id = parse_contact_id(&path)?;
    let contact = state.contacts_query.get_contact(id).await?;
    Ok(web::Json(ContactResponse::from(contact)))
}

/// Create a contact.
#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = ContactRequest,
    responses(
        (
            status = 201,
            description = "Contact created",
            headers(("Location" = String, description = "URL of the new contact")),
            body = ContactResponse
        ),
        (status = 400, description = "Missing or blank field", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "createContact"
)]
#[post("/contacts")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<HttpResponse> {
    let contact = state
        .contacts
        .create_contact(payload.into_inner().into())
        .await?;
    let location = format!("/api/contacts/{}", contact.id());
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(ContactResponse::from(contact)))
}

/// Update the supplied fields of a contact.
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    params(("id" = i32, Path, description = "Contact identifier")),
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Updated contact", body = ContactResponse),
        (status = 400, description = "Blank field", body = ErrorSchema),
        (status = 404, description = "Contact not found", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "updateContact"
)]
#[put("/contacts/{id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<web::Json<ContactResponse>> {
    let id = parse_contact_id(&path)?;
    let contact = state
        .contacts
        .update_contact(id, payload.into_inner().into())
        .await?;
    Ok(web::Json(ContactResponse::from(contact)))
}

/// Delete a contact.
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    params(("id" = i32, Path, description = "Contact identifier")),
    responses(
        (status = 204, description = "Contact deleted"),
        (status = 404, description = "Contact not found", body = ErrorSchema)
    ),
    tags = ["contacts"],
    operation_id = "deleteContact"
)]
#[delete("/contacts/{id}")]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_contact_id(&path)?;
    state.contacts.delete_contact(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "contacts_tests.rs"]
mod tests;
