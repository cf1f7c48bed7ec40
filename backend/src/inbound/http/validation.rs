//! Shared validation helpers for inbound HTTP adapters.
//!
//! Extractor failures are turned into domain errors here so the JSON API and
//! the HTML pages report them with the same codes as service-level failures.

use actix_web::HttpRequest;
use actix_web::error::{JsonPayloadError, UrlencodedError};
use serde_json::json;
use tracing::debug;

use crate::domain::{ContactId, Error};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidJson,
    InvalidForm,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidJson => "invalid_json",
            ErrorCode::InvalidForm => "invalid_form",
        }
    }
}

fn malformed_body_error(message: &str, code: ErrorCode) -> Error {
    Error::invalid_request(message.to_owned()).with_details(json!({
        "code": code.as_str(),
    }))
}

/// Parse a contact identifier from a raw path segment.
///
/// Identifiers that are not integers cannot name a stored contact, so they are
/// reported as "not found" rather than as malformed requests.
pub(crate) fn parse_contact_id(value: &str) -> Result<ContactId, Error> {
    value
        .parse::<i32>()
        .map(ContactId::new)
        .map_err(|_| Error::not_found(format!("contact {value} not found")))
}

/// Map JSON body extraction failures to `invalid_request`.
pub(crate) fn json_error(err: &JsonPayloadError) -> Error {
    debug!(error = %err, "rejected JSON payload");
    malformed_body_error("request body must be a JSON object", ErrorCode::InvalidJson)
}

/// Map form body extraction failures to `invalid_request`.
pub(crate) fn form_error(err: &UrlencodedError) -> Error {
    debug!(error = %err, "rejected form payload");
    malformed_body_error("request body must be a URL-encoded form", ErrorCode::InvalidForm)
}

/// `JsonConfig` error handler for the JSON API.
pub(crate) fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    json_error(&err).into()
}
