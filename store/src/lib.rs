//! Client-side state store for a todo backend.
//!
//! # Overview
//! Two layers, composed linearly: [`TodosApi`] translates five CRUD
//! operations into HTTP requests against a fixed base URL, and
//! [`TodoStore`] owns the session's in-memory collection, delegating every
//! mutation to the API and mirroring list responses wholesale into local
//! state.
//!
//! # Design
//! - The store is the only stateful piece; the API client holds nothing
//!   but a `reqwest::Client` and the base URL.
//! - Create/update/delete do not patch the local collection — only
//!   `query_todos` and `set_todos` install new state. Callers re-query
//!   after writes.
//! - One error taxonomy, [`ApiError`]; the store logs each failure once
//!   and re-raises it unchanged.
//! - Query parameters use qs-style bracket encoding so nested filters
//!   round-trip to the backend intact.

pub mod api;
pub mod error;
pub mod query;
pub mod store;
pub mod types;

pub use api::{TodosApi, DEFAULT_BASE_URL, TOTAL_COUNT_HEADER};
pub use error::ApiError;
pub use store::TodoStore;
pub use types::{Status, Todo, TodoPage, UpdateTodo};
