//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Contact book entries.
    ///
    /// `id` is an `AUTOINCREMENT` rowid, so identifiers of deleted contacts
    /// are never handed out again.
    contacts (id) {
        id -> Integer,
        name -> Text,
        phone -> Text,
        email -> Text,
        /// Free-form category label; `type` is reserved in Rust.
        #[sql_name = "type"]
        kind -> Text,
    }
}
