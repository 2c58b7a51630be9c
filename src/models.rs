//! Frontend Models
//!
//! Data structures matching the `/api/users` wire format.

use serde::{Deserialize, Serialize};

/// Registered attendee (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl Attendee {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct CreateAttendeeBody<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct UpdateAttendeeBody<'a> {
    #[serde(rename = "_id")]
    pub id: &'a str,
    pub name: &'a str,
}

/// Delete uses a plain `id` key, unlike update
#[derive(Debug, Serialize)]
pub struct DeleteAttendeeBody<'a> {
    pub id: &'a str,
}

/// Body returned with a non-ok status
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> String {
        self.error.unwrap_or_else(|| "unknown error".to_string())
    }
}
