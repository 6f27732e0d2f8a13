use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::domain::{DirectoryEntry, EntryId, FilterCriteria};
use super::{Directory, DirectoryError};
use crate::error::AppError;

/// Router builder exposing directory search over HTTP.
pub fn directory_router(directory: Arc<Directory>) -> Router {
    Router::new()
        .route("/api/v1/directory", get(search_handler))
        .route("/api/v1/directory/filters", get(filters_handler))
        .route("/api/v1/directory/:entry_id", get(entry_handler))
        .route(
            "/api/v1/directory/:entry_id/connect",
            post(connect_handler),
        )
        .with_state(directory)
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchResponse {
    pub(crate) total: usize,
    pub(crate) matched: usize,
    pub(crate) criteria: FilterCriteria,
    pub(crate) entries: Vec<DirectoryEntry>,
}

pub(crate) async fn search_handler(
    State(directory): State<Arc<Directory>>,
    Query(criteria): Query<FilterCriteria>,
) -> Json<SearchResponse> {
    let entries: Vec<DirectoryEntry> = directory.search(&criteria).into_iter().cloned().collect();
    Json(SearchResponse {
        total: directory.entries().len(),
        matched: entries.len(),
        criteria,
        entries,
    })
}

pub(crate) async fn filters_handler(State(directory): State<Arc<Directory>>) -> Response {
    Json(directory.filter_options()).into_response()
}

pub(crate) async fn entry_handler(
    State(directory): State<Arc<Directory>>,
    Path(entry_id): Path<u32>,
) -> Response {
    match directory.find(EntryId(entry_id)) {
        Some(entry) => (StatusCode::OK, Json(entry.clone())).into_response(),
        None => not_found(DirectoryError::UnknownEntry(EntryId(entry_id))),
    }
}

pub(crate) async fn connect_handler(
    State(directory): State<Arc<Directory>>,
    Path(entry_id): Path<u32>,
) -> Response {
    match directory.request_connection(EntryId(entry_id)) {
        Ok(request) => (StatusCode::ACCEPTED, Json(request)).into_response(),
        Err(err) => not_found(err),
    }
}

fn not_found(err: DirectoryError) -> Response {
    AppError::from(err).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = directory_router(Arc::new(Directory::seeded()))
            .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn search_applies_query_criteria() {
        let (status, body) =
            get_json("/api/v1/directory?search=tech&category=Electronics").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 8);
        assert_eq!(body["matched"], 1);
        assert_eq!(body["entries"][0]["name"], "TechComponents Ltd");
    }

    #[tokio::test]
    async fn search_without_query_lists_everything() {
        let (_, body) = get_json("/api/v1/directory").await;
        assert_eq!(body["matched"], 8);
        assert_eq!(body["entries"][0]["id"], 1);
    }

    #[tokio::test]
    async fn sentinel_values_are_url_decoded() {
        let (_, body) =
            get_json("/api/v1/directory?category=Food%20%26%20Beverage&size=All%20Sizes").await;
        assert_eq!(body["matched"], 1);
        assert_eq!(body["entries"][0]["name"], "FreshFood Distributors");
    }

    #[tokio::test]
    async fn unknown_entry_is_not_found() {
        let (status, body) = get_json("/api/v1/directory/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap_or_default().contains("42"));
    }

    #[tokio::test]
    async fn filters_endpoint_lists_options() {
        let (status, body) = get_json("/api/v1/directory/filters").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sizes"][0], "All Sizes");
    }
}
