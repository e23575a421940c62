//! Core contact types for contactbook.
//!
//! A [`Contact`] is the unit stored in the contacts file. Names are matched
//! case-insensitively everywhere through [`normalize_name`].

use serde::{Deserialize, Serialize};

/// A single contact record.
///
/// Serializes to `{"name": ..., "phone": ..., "email": ...}`. A missing
/// `email` field deserializes as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name, also the lookup key.
    pub name: String,
    /// Phone number as entered.
    pub phone: String,
    /// Email address; empty when not provided.
    #[serde(default)]
    pub email: String,
}

impl Contact {
    /// Create a new contact.
    #[must_use]
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Whether this contact's name matches `name`, ignoring case.
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        normalize_name(&self.name) == normalize_name(name)
    }

    /// Apply an update, keeping existing values for empty fields.
    pub fn apply(&mut self, update: ContactUpdate) {
        if let Some(phone) = update.phone.filter(|p| !p.is_empty()) {
            self.phone = phone;
        }
        if let Some(email) = update.email.filter(|e| !e.is_empty()) {
            self.email = email;
        }
    }
}

/// Replacement values for an existing contact.
///
/// `None` and `Some("")` both mean "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    /// New phone number.
    pub phone: Option<String>,
    /// New email address.
    pub email: Option<String>,
}

impl ContactUpdate {
    /// Build an update from raw console input.
    #[must_use]
    pub fn from_input(phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            email: Some(email.into()),
        }
    }
}

/// Normalize a name for comparison.
///
/// All lookups go through this helper so matching rules stay in one place.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}
