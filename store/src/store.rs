//! Session-scoped todo state.
//!
//! # Design
//! `TodoStore` pairs the in-memory collection with the API client that
//! feeds it. Clones share one collection (`Arc` inside), so a store built
//! once at startup and handed around behaves as the session singleton
//! without any ambient global. The collection is only ever replaced
//! wholesale: `query_todos` and `set_todos` install a new snapshot, while
//! create/update/delete leave the cache alone — callers re-query when they
//! want a write to show up locally.
//!
//! The lock is held for plain memory operations only, never across an
//! await, so concurrent operations interleave freely: two in-flight
//! `query_todos` calls race and the later completion wins the replace.
//! Every backend failure passes through one diagnostic point here before
//! being re-raised unchanged.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::warn;

use crate::api::TodosApi;
use crate::error::ApiError;
use crate::types::{Status, Todo, TodoPage, UpdateTodo};

/// In-memory todo collection backed by the REST API.
#[derive(Debug, Clone)]
pub struct TodoStore {
    api: TodosApi,
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl TodoStore {
    /// A fresh store holds one placeholder record — the state a new
    /// session renders before its first query.
    pub fn new(api: TodosApi) -> Self {
        Self {
            api,
            todos: Arc::new(RwLock::new(vec![Todo::new("Test")])),
        }
    }

    /// Create `new_todo` on the backend and return the server's echo.
    ///
    /// The cached collection is not touched on success; refresh with
    /// [`query_todos`](Self::query_todos) to see the write locally.
    pub async fn add_todo(&self, new_todo: &Todo) -> Result<Todo, ApiError> {
        log_failure("add_todo", self.api.create(new_todo).await)
    }

    /// Fetch the filtered list and make it the new local collection.
    ///
    /// The replace is wholesale — no merge — so the local order is exactly
    /// the response order. `total_items` carries the backend's
    /// `x-total-count` through untouched (NaN when the header is missing).
    /// On failure the previous collection stays in place.
    pub async fn query_todos<P: Serialize>(&self, params: &P) -> Result<TodoPage, ApiError> {
        let page = log_failure("query_todos", self.api.list(params).await)?;
        *self.todos.write() = page.data.clone();
        Ok(page)
    }

    /// Delete on the backend. The record stays cached until the next
    /// query.
    pub async fn remove_todo_by_id(&self, id: &str) -> Result<(), ApiError> {
        log_failure("remove_todo_by_id", self.api.remove(id).await)
    }

    /// Apply a partial update on the backend. The cache keeps the stale
    /// record until the next query.
    pub async fn update_todo(&self, edited_todo: &UpdateTodo) -> Result<Todo, ApiError> {
        log_failure("update_todo", self.api.update(edited_todo).await)
    }

    /// Replace the collection unconditionally.
    pub fn set_todos(&self, todos: Vec<Todo>) {
        *self.todos.write() = todos;
    }

    /// Snapshot of the current collection.
    pub fn todos(&self) -> Vec<Todo> {
        self.todos.read().clone()
    }

    /// First record with a matching id, if any.
    pub fn get_todo_by_id(&self, id: &str) -> Option<Todo> {
        self.todos.read().iter().find(|todo| todo.id == id).cloned()
    }

    /// The `COMPLETED` subset, recomputed from the live collection on
    /// every read — it can never go stale.
    pub fn completed_todos(&self) -> Vec<Todo> {
        self.todos
            .read()
            .iter()
            .filter(|todo| todo.status == Status::Completed)
            .cloned()
            .collect()
    }
}

/// Single diagnostic point: every failed backend call is logged once here,
/// then re-raised to the caller.
fn log_failure<T>(operation: &'static str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(error) = &result {
        warn!(operation, error = %error, "todo backend call failed");
    }
    result
}
