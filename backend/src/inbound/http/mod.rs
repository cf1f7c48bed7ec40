//! HTTP inbound adapter exposing the contact JSON API and HTML pages.

pub mod contacts;
pub mod error;
pub mod health;
pub mod pages;
pub mod schemas;
pub mod state;
pub mod validation;
mod views;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// JSON API scope mounted under `/api`.
///
/// Malformed JSON bodies are reported as `invalid_request` errors.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(web::JsonConfig::default().error_handler(validation::json_error_handler))
        .service(contacts::list_contacts)
        .service(contacts::get_contact)
        .service(contacts::create_contact)
        .service(contacts::update_contact)
        .service(contacts::delete_contact)
}

/// Register the JSON API and the HTML pages.
///
/// Handlers expect an [`state::HttpState`] in `web::Data`.
///
/// # Examples
/// ```no_run
/// use actix_web::App;
///
/// let app = App::new().configure(contacts::inbound::http::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(pages::form_error_handler))
        .service(api_scope())
        .service(pages::index)
        .service(pages::search)
        .service(pages::add_contact)
        .service(pages::edit_contact)
        .service(pages::update_contact)
        .service(pages::delete_contact);
}
