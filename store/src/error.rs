//! Error type for the todo API client.
//!
//! # Design
//! One enum covers the whole "request failed" space: the store layer does
//! not distinguish a 404 from a 500 from a refused connection, it logs and
//! re-raises whatever the client produced. Non-2xx responses keep the raw
//! status and body; 404 has no variant of its own — it surfaces as
//! `Http { status: 404, .. }` exactly as the backend returned it.

use thiserror::Error;

/// Errors surfaced by `TodosApi` and re-raised unchanged by `TodoStore`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connect failure, DNS, broken transfer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be decoded into the expected type.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The query parameters could not be serialized.
    #[error("invalid query parameters: {0}")]
    Query(String),
}
