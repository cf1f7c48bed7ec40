//! Contact data model.
//!
//! A [`Contact`] pairs a store-assigned [`ContactId`] with validated
//! [`ContactDetails`]. Raw input arrives as a [`ContactDraft`]; it becomes
//! either a full set of details (creation) or a set of [`ContactChanges`]
//! (partial update). Both conversions trim surrounding whitespace and treat a
//! blank value as missing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four user-editable contact fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Phone,
    Email,
    Type,
}

impl ContactField {
    /// Wire name of the field, shared by the JSON API, forms, and storage.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Type => "type",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors returned when building contact values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    /// A required field was absent, empty, or whitespace-only.
    MissingField { field: ContactField },
}

impl ContactValidationError {
    /// The field that failed validation.
    pub fn field(&self) -> ContactField {
        match self {
            Self::MissingField { field } => *field,
        }
    }
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "missing required field: {field}"),
        }
    }
}

impl std::error::Error for ContactValidationError {}

/// Store-assigned contact identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(i32);

impl ContactId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for ContactId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unvalidated contact input as received from a form or JSON body.
///
/// `None` means the field was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub kind: Option<String>,
}

fn normalise(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

fn require(value: Option<String>, field: ContactField) -> Result<String, ContactValidationError> {
    normalise(value).ok_or(ContactValidationError::MissingField { field })
}

/// Supplied values must be non-blank; absent values stay absent.
fn optional(
    value: Option<String>,
    field: ContactField,
) -> Result<Option<String>, ContactValidationError> {
    value.map(|raw| require(Some(raw), field)).transpose()
}

/// Complete, validated contact fields.
///
/// ## Invariants
/// - Every field is non-empty and carries no surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    name: String,
    phone: String,
    email: String,
    kind: String,
}

impl ContactDetails {
    /// Validate and construct details from individual values.
    ///
    /// # Examples
    /// ```
    /// use contacts::domain::ContactDetails;
    ///
    /// let details = ContactDetails::new(" John Doe ", "1234567890", "john@example.com", "Personal")
    ///     .expect("valid details");
    /// assert_eq!(details.name(), "John Doe");
    /// assert!(ContactDetails::new("John Doe", "", "john@example.com", "Personal").is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        kind: impl Into<String>,
    ) -> Result<Self, ContactValidationError> {
        Self::try_from(ContactDraft {
            name: Some(name.into()),
            phone: Some(phone.into()),
            email: Some(email.into()),
            kind: Some(kind.into()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Free-form category label, exposed as `type` on the wire.
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl TryFrom<ContactDraft> for ContactDetails {
    type Error = ContactValidationError;

    fn try_from(draft: ContactDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require(draft.name, ContactField::Name)?,
            phone: require(draft.phone, ContactField::Phone)?,
            email: require(draft.email, ContactField::Email)?,
            kind: require(draft.kind, ContactField::Type)?,
        })
    }
}

/// Validated partial update. Absent fields are left untouched by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactChanges {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    kind: Option<String>,
}

impl ContactChanges {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none() && self.kind.is_none()
    }
}

impl TryFrom<ContactDraft> for ContactChanges {
    type Error = ContactValidationError;

    fn try_from(draft: ContactDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            name: optional(draft.name, ContactField::Name)?,
            phone: optional(draft.phone, ContactField::Phone)?,
            email: optional(draft.email, ContactField::Email)?,
            kind: optional(draft.kind, ContactField::Type)?,
        })
    }
}

/// A stored contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    details: ContactDetails,
}

impl Contact {
    pub fn new(id: ContactId, details: ContactDetails) -> Self {
        Self { id, details }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn into_parts(self) -> (ContactId, ContactDetails) {
        (self.id, self.details)
    }
}

/// Listing filter.
///
/// Matching is a case-insensitive substring test on the contact name. A blank
/// search term yields the unfiltered listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    name_contains: Option<String>,
}

impl ContactFilter {
    /// Filter matching every contact.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from an optional user-supplied search term.
    ///
    /// # Examples
    /// ```
    /// use contacts::domain::ContactFilter;
    ///
    /// assert_eq!(ContactFilter::from_search(Some("  ")), ContactFilter::all());
    /// assert_eq!(ContactFilter::from_search(Some(" John ")).name_contains(), Some("John"));
    /// ```
    pub fn from_search(term: Option<&str>) -> Self {
        Self {
            name_contains: normalise(term.map(str::to_owned)),
        }
    }

    /// The trimmed search term, if any.
    pub fn name_contains(&self) -> Option<&str> {
        self.name_contains.as_deref()
    }
}
