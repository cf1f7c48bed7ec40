//! Server-rendered HTML for the contact pages.
//!
//! Rendering is plain string building; every value that originates from a
//! user passes through [`escape`] before it reaches the markup.

use std::fmt::Write as _;

use crate::domain::{Contact, ContactDraft, ContactId};

/// Escape text for use in HTML element content and quoted attributes.
pub(crate) fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// Values echoed back into a form, typically after a failed submission.
#[derive(Debug, Clone, Default)]
pub(crate) struct FormValues {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub kind: String,
}

impl From<&ContactDraft> for FormValues {
    fn from(draft: &ContactDraft) -> Self {
        let value = |field: &Option<String>| field.clone().unwrap_or_default();
        Self {
            name: value(&draft.name),
            phone: value(&draft.phone),
            email: value(&draft.email),
            kind: value(&draft.kind),
        }
    }
}

impl From<&Contact> for FormValues {
    fn from(contact: &Contact) -> Self {
        let details = contact.details();
        Self {
            name: details.name().to_owned(),
            phone: details.phone().to_owned(),
            email: details.email().to_owned(),
            kind: details.kind().to_owned(),
        }
    }
}

/// Data for the index page.
#[derive(Debug, Default)]
pub(crate) struct IndexView<'a> {
    pub contacts: &'a [Contact],
    pub search: Option<&'a str>,
    pub form: FormValues,
    pub error: Option<&'a str>,
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         {body}\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}

fn error_banner(error: Option<&str>) -> String {
    error
        .map(|message| format!("<p class=\"error\" role=\"alert\">{}</p>\n", escape(message)))
        .unwrap_or_default()
}

fn contact_fields(form: &FormValues) -> String {
    let mut out = String::new();
    for (label, name, value) in [
        ("Name", "name", &form.name),
        ("Phone", "phone", &form.phone),
        ("Email", "email", &form.email),
        ("Type", "type", &form.kind),
    ] {
        let _ = writeln!(
            out,
            "<label>{label} <input type=\"text\" name=\"{name}\" value=\"{}\" required></label>",
            escape(value)
        );
    }
    out
}

fn contact_rows(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "<tr><td colspan=\"5\">No contacts found.</td></tr>\n".to_owned();
    }

    let mut out = String::new();
    for contact in contacts {
        let details = contact.details();
        let id = contact.id();
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td><a href=\"/update/{id}\">Edit</a> <a href=\"/delete/{id}\">Delete</a></td></tr>",
            escape(details.name()),
            escape(details.phone()),
            escape(details.email()),
            escape(details.kind()),
        );
    }
    out
}

/// Render the contact list with the add and search forms.
pub(crate) fn index_page(view: &IndexView<'_>) -> String {
    let search = escape(view.search.unwrap_or_default());
    let mut body = String::from("<h1>Contacts</h1>\n");
    body.push_str(&error_banner(view.error));
    let _ = write!(
        body,
        "<form method=\"get\" action=\"/contacts\">\n\
         <input type=\"search\" name=\"search\" value=\"{search}\" placeholder=\"Search by name\">\n\
         <button type=\"submit\">Search</button>\n\
         </form>\n\
         <h2>Add contact</h2>\n\
         <form method=\"post\" action=\"/add\">\n\
         {fields}\
         <button type=\"submit\" name=\"submit\" value=\"add\">Add</button>\n\
         </form>\n\
         <table>\n\
         <thead><tr><th>Name</th><th>Phone</th><th>Email</th><th>Type</th><th></th></tr></thead>\n\
         <tbody>\n\
         {rows}\
         </tbody>\n\
         </table>\n",
        fields = contact_fields(&view.form),
        rows = contact_rows(view.contacts),
    );
    layout("Contacts", &body)
}

/// Render the edit form for one contact.
pub(crate) fn edit_page(id: ContactId, form: &FormValues, error: Option<&str>) -> String {
    let mut body = format!("<h1>Edit contact {id}</h1>\n");
    body.push_str(&error_banner(error));
    let _ = write!(
        body,
        "<form method=\"post\" action=\"/update/{id}\">\n\
         {fields}\
         <button type=\"submit\" name=\"submit\" value=\"update\">Save</button>\n\
         </form>\n\
         <p><a href=\"/\">Back to contacts</a></p>\n",
        fields = contact_fields(form),
    );
    layout("Edit contact", &body)
}

/// Render a standalone error page.
pub(crate) fn error_page(title: &str, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to contacts</a></p>\n",
        escape(title),
        escape(message),
    );
    layout(title, &body)
}
