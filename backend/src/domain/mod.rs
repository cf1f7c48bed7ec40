//! Domain primitives, ports, and services.
//!
//! Purpose: define the contact entity and the use-cases around it without any
//! dependency on HTTP or SQL. Inbound adapters call the driving ports
//! ([`ports::ContactCommand`], [`ports::ContactQuery`]); outbound adapters
//! implement the driven port ([`ports::ContactRepository`]).
//!
//! Public surface:
//! - `Contact`, `ContactId`, `ContactDetails`, `ContactChanges`,
//!   `ContactDraft`, `ContactFilter`: the contact model.
//! - `ContactService`: implementation of the driving ports.
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `TraceId`: request correlation identifier.

pub mod contact;
mod contact_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::contact::{
    Contact, ContactChanges, ContactDetails, ContactDraft, ContactField, ContactFilter,
    ContactId, ContactValidationError,
};
pub use self::contact_service::ContactService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;

/// Response header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
