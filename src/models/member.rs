//! Member model and its validated input fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A persisted club member.
///
/// This is also the wire representation: `id` is assigned by the store and
/// only ever appears in responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub is_active: bool,
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.firstname, self.lastname)
    }
}

/// Writable member fields after shape checks, ready for length validation.
///
/// `is_active` is `None` when the client omitted it: creation then defaults
/// to inactive and updates keep the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct MemberFields {
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub firstname: String,
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub lastname: String,
    pub is_active: Option<bool>,
}

/// Response body of the activate action.
#[derive(Debug, Clone, Serialize)]
pub struct StatusMessage {
    pub status: String,
}

impl StatusMessage {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}
