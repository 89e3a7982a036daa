//! Authors API endpoints
//!
//! The `{id}` path segment is a zero-based position. Out-of-range positions
//! answer with the route's usual status and an empty body.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{AppJson, AppPath};
use crate::{
    models::author::{Author, AuthorPayload},
    AppState,
};

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "Authors list", body = Vec<Author>)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> Json<Vec<Author>> {
    Json(state.services.authors.list().await)
}

/// Create an author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = AuthorPayload,
    responses(
        (status = 201, description = "Author created", body = Author)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    AppJson(data): AppJson<AuthorPayload>,
) -> (StatusCode, Json<Author>) {
    let author = state.services.authors.create(&data).await;
    (StatusCode::CREATED, Json(author))
}

/// Get author by position
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Zero-based position")),
    responses(
        (status = 200, description = "Author at the position; empty body when out of range", body = Author)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Response {
    found_or_empty(StatusCode::OK, state.services.authors.get_by_index(id).await)
}

/// Update author at position
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Zero-based position")),
    request_body = AuthorPayload,
    responses(
        (status = 201, description = "Updated author; empty body when out of range", body = Author)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(data): AppJson<AuthorPayload>,
) -> Response {
    let author = state.services.authors.update_by_index(id, &data).await;
    found_or_empty(StatusCode::CREATED, author)
}

/// Delete author at position
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Zero-based position")),
    responses(
        (status = 200, description = "Removed author; empty body when out of range", body = Author)
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> Response {
    found_or_empty(StatusCode::OK, state.services.authors.delete_by_index(id).await)
}

/// JSON body when there is an author, otherwise no body at all
fn found_or_empty(status: StatusCode, author: Option<Author>) -> Response {
    match author {
        Some(author) => (status, Json(author)).into_response(),
        None => status.into_response(),
    }
}
