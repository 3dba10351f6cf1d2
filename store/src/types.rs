//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently
//! from the mock-server crate; the integration tests catch schema drift.
//! Todo ids are opaque strings — new items mint a UUID v4 client-side, but
//! nothing assumes the backend sticks to that format.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle status of a todo.
///
/// The backend's member set is open-ended; `Other` carries any status
/// string this crate does not know, so unknown values survive a
/// deserialize/reserialize round-trip instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Draft,
    Completed,
    /// Any status string without a variant of its own. Must not hold a
    /// known member's wire string — equality is variant-based, so
    /// `Other("COMPLETED")` would not match [`Status::Completed`].
    /// Deserialization already normalizes; [`Status::from`] does the same
    /// for plain strings.
    #[serde(untagged)]
    Other(String),
}

impl From<&str> for Status {
    /// Normalizing constructor: known wire strings map to their variants,
    /// anything else to [`Status::Other`].
    fn from(wire: &str) -> Self {
        match wire {
            "DRAFT" => Self::Draft,
            "COMPLETED" => Self::Completed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "DRAFT"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// A single todo item as the API represents it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub status: Status,
}

impl Todo {
    /// New draft todo with a client-minted v4 id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            status: Status::Draft,
        }
    }
}

/// Partial-update payload for `PATCH /todos/{id}`.
///
/// `id` selects the resource and never enters the request body; the wire
/// body is whatever subset of `{title, status}` is present. Omitted fields
/// stay unchanged on the server.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTodo {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

/// One list-query result: the returned records plus the backend's total.
///
/// `total_items` is the numeric parse of the `x-total-count` response
/// header and is NaN when the header is absent or not a number. It is
/// passed through unguarded.
#[derive(Debug, Clone)]
pub struct TodoPage {
    pub data: Vec<Todo>,
    pub total_items: f64,
}
