//! Asynchronous HTTP client for the todo resource.
//!
//! # Design
//! `TodosApi` holds a `reqwest::Client` and a base URL and carries no other
//! state between calls — every operation is a fresh request with no retry,
//! no caching and no timeout beyond the transport default. Response
//! handling happens in two steps: a 2xx gate that captures the raw body of
//! failures, then JSON decoding, so callers always get either the typed
//! payload or an `ApiError` describing exactly what came back.

use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::query::to_query_string;
use crate::types::{Todo, TodoPage, UpdateTodo};

/// Base endpoint of the backend this crate is written against.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Response header carrying the total result count for list queries.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodosApi {
    http: Client,
    base_url: String,
}

impl Default for TodosApi {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl TodosApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /todos` — create from the full payload, id included; returns
    /// the server's echoed (or reassigned) representation.
    pub async fn create(&self, todo: &Todo) -> Result<Todo, ApiError> {
        let response = self
            .http
            .post(format!("{}/todos", self.base_url))
            .json(todo)
            .send()
            .await?;
        decode_body(check_status(response).await?).await
    }

    /// `PATCH /todos/{id}` — apply whatever subset of `{title, status}` is
    /// present in `todo`.
    pub async fn update(&self, todo: &UpdateTodo) -> Result<Todo, ApiError> {
        let response = self
            .http
            .patch(format!("{}/todos/{}", self.base_url, todo.id))
            .json(todo)
            .send()
            .await?;
        decode_body(check_status(response).await?).await
    }

    /// `GET /todos?<query>` — list with qs-encoded parameters.
    ///
    /// Besides the JSON array body this also surfaces the `x-total-count`
    /// header; pass an empty map to list without filtering.
    pub async fn list<P: Serialize>(&self, params: &P) -> Result<TodoPage, ApiError> {
        let query = to_query_string(params)?;
        let url = if query.is_empty() {
            format!("{}/todos", self.base_url)
        } else {
            format!("{}/todos?{query}", self.base_url)
        };
        let response = self.http.get(url).send().await?;
        let response = check_status(response).await?;
        let total_items = parse_total_count(response.headers());
        let data = decode_body(response).await?;
        Ok(TodoPage { data, total_items })
    }

    /// `GET /todos/{id}` — a missing id surfaces as the backend's HTTP
    /// error, it is not mapped to anything special.
    pub async fn get(&self, id: &str) -> Result<Todo, ApiError> {
        let response = self
            .http
            .get(format!("{}/todos/{id}", self.base_url))
            .send()
            .await?;
        decode_body(check_status(response).await?).await
    }

    /// `DELETE /todos/{id}` — the response payload (deleted todo or
    /// confirmation object) is discarded; success only means the backend
    /// accepted the deletion.
    pub async fn remove(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(format!("{}/todos/{id}", self.base_url))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Pass 2xx responses through; turn anything else into `ApiError::Http`
/// with the raw body attached.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Http {
        status: status.as_u16(),
        body,
    })
}

async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Numeric parse of `x-total-count`: NaN when the header is absent or not
/// a number, mirrored unguarded into `TodoPage::total_items`.
fn parse_total_count(headers: &HeaderMap) -> f64 {
    headers
        .get(TOTAL_COUNT_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let api = TodosApi::new("http://localhost:8000/");
        assert_eq!(api.base_url(), "http://localhost:8000");
    }

    #[test]
    fn default_points_at_the_fixed_backend() {
        assert_eq!(TodosApi::default().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn total_count_parses_decimal_header() {
        let mut headers = HeaderMap::new();
        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static("17"));
        assert_eq!(parse_total_count(&headers), 17.0);
    }

    #[test]
    fn total_count_tolerates_surrounding_whitespace() {
        let mut headers = HeaderMap::new();
        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static(" 3 "));
        assert_eq!(parse_total_count(&headers), 3.0);
    }

    #[test]
    fn total_count_missing_is_nan() {
        assert!(parse_total_count(&HeaderMap::new()).is_nan());
    }

    #[test]
    fn total_count_non_numeric_is_nan() {
        let mut headers = HeaderMap::new();
        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static("banana"));
        assert!(parse_total_count(&headers).is_nan());
    }
}
