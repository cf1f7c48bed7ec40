//! HTML page handlers.
//!
//! ```text
//! GET  /
//! GET  /contacts?search={q}
//! POST /add
//! GET  /update/{id}
//! POST /update/{id}
//! GET  /delete/{id}
//! ```
//!
//! Successful mutations redirect to `/` with `303 See Other`. Validation
//! failures re-render the submitted form with status 400; every other failure
//! renders an error page carrying the same status as the JSON API.

use actix_web::error::UrlencodedError;
use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse, ResponseError, get, post, web};
use serde::Deserialize;

use crate::domain::{ContactDraft, ContactFilter, Error, ErrorCode, TRACE_ID_HEADER};
use crate::inbound::http::contacts::SearchParams;
use crate::inbound::http::error::{redact_if_internal, status_for};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{form_error, parse_contact_id};
use crate::inbound::http::views::{self, FormValues, IndexView};

/// Domain error rendered as an HTML page.
#[derive(Debug)]
pub struct PageError(Error);

impl From<Error> for PageError {
    fn from(value: Error) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        status_for(self.0.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error = redact_if_internal(&self.0);
        let mut builder = HttpResponse::build(status);
        if let Some(id) = error.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        let title = status.canonical_reason().unwrap_or("Error");
        builder
            .content_type(ContentType::html())
            .body(views::error_page(title, error.message()))
    }
}

/// Result alias for page handlers.
pub type PageResult<T> = Result<T, PageError>;

/// Form payload for the add and edit forms.
///
/// Unknown fields such as the submit button's name are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl From<ContactForm> for ContactDraft {
    fn from(value: ContactForm) -> Self {
        Self {
            name: value.name,
            phone: value.phone,
            email: value.email,
            kind: value.kind,
        }
    }
}

/// `FormConfig` error handler rendering malformed submissions as a 400 page.
pub(crate) fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    PageError::from(form_error(&err)).into()
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body)
}

fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

async fn render_index(
    state: &HttpState,
    filter: ContactFilter,
    search_term: Option<&str>,
) -> PageResult<HttpResponse> {
    let contacts = state.contacts_query.list_contacts(filter).await?;
    Ok(html(
        StatusCode::OK,
        views::index_page(&IndexView {
            contacts: &contacts,
            search: search_term,
            ..IndexView::default()
        }),
    ))
}

/// Render every contact alongside the add and search forms.
#[get("/")]
pub async fn index(state: web::Data<HttpState>) -> PageResult<HttpResponse> {
    render_index(&state, ContactFilter::all(), None).await
}

/// Render contacts whose name contains the search term.
#[get("/contacts")]
pub async fn search(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> PageResult<HttpResponse> {
    render_index(&state, params.filter(), params.search.as_deref()).await
}

/// Create a contact from the add form.
#[post("/add")]
pub async fn add_contact(
    state: web::Data<HttpState>,
    form: web::Form<ContactForm>,
) -> PageResult<HttpResponse> {
    let draft = ContactDraft::from(form.into_inner());
    let values = FormValues::from(&draft);
    match state.contacts.create_contact(draft).await {
        Ok(_) => Ok(redirect_home()),
        Err(error) if error.code() == ErrorCode::InvalidRequest => {
            let contacts = state.contacts_query.list_contacts(ContactFilter::all()).await?;
            Ok(html(
                StatusCode::BAD_REQUEST,
                views::index_page(&IndexView {
                    contacts: &contacts,
                    search: None,
                    form: values,
                    error: Some(error.message()),
                }),
            ))
        }
        Err(error) => Err(error.into()),
    }
}

/// Render the edit form for a contact.
#[get("/update/{id}")]
pub async fn edit_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let id = parse_contact_id(&path)?;
    let contact = state.contacts_query.get_contact(id).await?;
    Ok(html(
        StatusCode::OK,
        views::edit_page(id, &FormValues::from(&contact), None),
    ))
}

/// Apply the edit form to a contact.
#[post("/update/{id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: web::Form<ContactForm>,
) -> PageResult<HttpResponse> {
    let id = parse_contact_id(&path)?;
    let draft = ContactDraft::from(form.into_inner());
    let values = FormValues::from(&draft);
    match state.contacts.update_contact(id, draft).await {
        Ok(_) => Ok(redirect_home()),
        Err(error) if error.code() == ErrorCode::InvalidRequest => Ok(html(
            StatusCode::BAD_REQUEST,
            views::edit_page(id, &values, Some(error.message())),
        )),
        Err(error) => Err(error.into()),
    }
}

/// Delete a contact from its row link.
#[get("/delete/{id}")]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> PageResult<HttpResponse> {
    let id = parse_contact_id(&path)?;
    state.contacts.delete_contact(id).await?;
    Ok(redirect_home())
}

#[cfg(test)]
#[path = "pages_tests.rs"]
mod tests;
