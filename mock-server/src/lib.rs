//! In-memory fake of the todo backend.
//!
//! # Design
//! Implements the HTTP contract the store crate is written against: CRUD
//! on `/todos` with PATCH for partial updates, qs-style query filtering on
//! the list route, and an `x-total-count` header carrying the filtered
//! total. DTOs are defined independently from the store crate — statuses
//! are plain strings here because the real backend's member set is wider
//! than any client knows — and the store's integration tests catch schema
//! drift. Records keep insertion order so list responses are
//! deterministic.

use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

const TOTAL_COUNT_HEADER: &str = "x-total-count";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub status: String,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    /// Client-minted id; one is assigned when absent.
    pub id: Option<String>,
    pub title: String,
    #[serde(default = "draft")]
    pub status: String,
}

fn draft() -> String {
    "DRAFT".to_string()
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub status: Option<String>,
}

/// Query parameters understood by `GET /todos`; anything else is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListParams {
    pub filter: Option<ListFilter>,
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListFilter {
    pub status: Option<Vec<String>>,
}

pub type Db = Arc<RwLock<Vec<Todo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(
    State(db): State<Db>,
    RawQuery(query): RawQuery,
) -> Result<([(&'static str, String); 1], Json<Vec<Todo>>), StatusCode> {
    let params: ListParams = serde_qs::from_str(query.as_deref().unwrap_or(""))
        .map_err(|_| StatusCode::BAD_REQUEST)?;

    let todos = db.read().await;
    let mut matches: Vec<Todo> = todos
        .iter()
        .filter(|todo| matches_filter(todo, params.filter.as_ref()))
        .cloned()
        .collect();

    // x-total-count reports the filtered total, before _limit truncation.
    let total = matches.len();
    if let Some(limit) = params.limit {
        matches.truncate(limit);
    }
    Ok(([(TOTAL_COUNT_HEADER, total.to_string())], Json(matches)))
}

fn matches_filter(todo: &Todo, filter: Option<&ListFilter>) -> bool {
    match filter.and_then(|f| f.status.as_ref()) {
        Some(statuses) => statuses.iter().any(|status| *status == todo.status),
        None => true,
    }
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = Todo {
        id: input.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        title: input.title,
        status: input.status,
    };
    db.write().await.push(todo.clone());
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Todo>, StatusCode> {
    let todos = db.read().await;
    todos
        .iter()
        .find(|todo| todo.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.write().await;
    let todo = todos
        .iter_mut()
        .find(|todo| todo.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(status) = input.status {
        todo.status = status;
    }
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.write().await;
    let position = todos
        .iter()
        .position(|todo| todo.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(todos.remove(position)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: "t-1".to_string(),
            title: "Test".to_string(),
            status: "DRAFT".to_string(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "t-1");
        assert_eq!(json["title"], "Test");
        assert_eq!(json["status"], "DRAFT");
    }

    #[test]
    fn create_todo_defaults_status_to_draft() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"No status field"}"#).unwrap();
        assert_eq!(input.title, "No status field");
        assert_eq!(input.status, "DRAFT");
        assert!(input.id.is_none());
    }

    #[test]
    fn create_todo_accepts_client_id_and_status() {
        let input: CreateTodo =
            serde_json::from_str(r#"{"id":"t-9","title":"Done","status":"COMPLETED"}"#).unwrap();
        assert_eq!(input.id.as_deref(), Some("t-9"));
        assert_eq!(input.status, "COMPLETED");
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"status":"DRAFT"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_all_fields_optional() {
        let input: UpdateTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.status.is_none());
    }

    #[test]
    fn update_todo_partial_fields() {
        let input: UpdateTodo = serde_json::from_str(r#"{"title":"New title"}"#).unwrap();
        assert_eq!(input.title.as_deref(), Some("New title"));
        assert!(input.status.is_none());
    }

    #[test]
    fn list_params_decode_nested_filter_and_limit() {
        let params: ListParams =
            serde_qs::from_str("filter[status][0]=DRAFT&filter[status][1]=COMPLETED&_limit=2")
                .unwrap();
        let statuses = params.filter.unwrap().status.unwrap();
        assert_eq!(statuses, vec!["DRAFT", "COMPLETED"]);
        assert_eq!(params.limit, Some(2));
    }

    #[test]
    fn list_params_ignore_unknown_keys() {
        let params: ListParams = serde_qs::from_str("q=milk&filter[status][0]=DRAFT").unwrap();
        let statuses = params.filter.unwrap().status.unwrap();
        assert_eq!(statuses, vec!["DRAFT"]);
    }

    #[test]
    fn list_params_decode_empty_query() {
        let params: ListParams = serde_qs::from_str("").unwrap();
        assert!(params.filter.is_none());
        assert!(params.limit.is_none());
    }

    #[test]
    fn filter_matches_on_status_membership() {
        let todo = Todo {
            id: "t-1".to_string(),
            title: "One".to_string(),
            status: "COMPLETED".to_string(),
        };
        let filter = ListFilter {
            status: Some(vec!["DRAFT".to_string(), "COMPLETED".to_string()]),
        };
        assert!(matches_filter(&todo, Some(&filter)));

        let narrow = ListFilter {
            status: Some(vec!["DRAFT".to_string()]),
        };
        assert!(!matches_filter(&todo, Some(&narrow)));
        assert!(matches_filter(&todo, None));
    }
}
