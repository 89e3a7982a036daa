//! Publishers API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::{AppJson, AppPath};
use crate::{
    error::AppResult,
    models::publisher::{Publisher, PublisherPayload},
    AppState,
};

/// List all publishers
#[utoipa::path(
    get,
    path = "/publishers",
    tag = "publishers",
    responses(
        (status = 200, description = "Publishers list", body = Vec<Publisher>)
    )
)]
pub async fn list_publishers(State(state): State<AppState>) -> Json<Vec<Publisher>> {
    Json(state.services.publishers.list().await)
}

/// Create a publisher
#[utoipa::path(
    post,
    path = "/publishers",
    tag = "publishers",
    request_body = PublisherPayload,
    responses(
        (status = 201, description = "Publisher created", body = Publisher)
    )
)]
pub async fn create_publisher(
    State(state): State<AppState>,
    AppJson(data): AppJson<PublisherPayload>,
) -> (StatusCode, Json<Publisher>) {
    let publisher = state.services.publishers.create(data).await;
    (StatusCode::CREATED, Json(publisher))
}

/// Get publisher by position
#[utoipa::path(
    get,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i64, Path, description = "Zero-based position")),
    responses(
        (status = 200, description = "Publisher details", body = Publisher),
        (status = 400, description = "Id out of range", body = String)
    )
)]
pub async fn get_publisher(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Publisher>> {
    let publisher = state.services.publishers.get_by_index(id).await?;
    Ok(Json(publisher))
}

/// Update publisher at position
#[utoipa::path(
    put,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i64, Path, description = "Zero-based position")),
    request_body = PublisherPayload,
    responses(
        (status = 201, description = "Publisher updated", body = Publisher),
        (status = 400, description = "Id out of range", body = String)
    )
)]
pub async fn update_publisher(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(data): AppJson<PublisherPayload>,
) -> AppResult<(StatusCode, Json<Publisher>)> {
    let publisher = state.services.publishers.update_by_index(id, &data).await?;
    Ok((StatusCode::CREATED, Json(publisher)))
}

/// Delete publisher at position
#[utoipa::path(
    delete,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i64, Path, description = "Zero-based position")),
    responses(
        (status = 200, description = "Removed publisher", body = Publisher),
        (status = 400, description = "Id out of range", body = String)
    )
)]
pub async fn delete_publisher(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<Publisher>> {
    let publisher = state.services.publishers.delete_by_index(id).await?;
    Ok(Json(publisher))
}
