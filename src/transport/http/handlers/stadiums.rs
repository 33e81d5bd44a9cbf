use crate::domain::{validate_create_payload, CreateStadiumRequest, Stadium};
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value as JsonValue;

/// Turns the raw body into a normalized request: malformed JSON is a 400,
/// rule violations a 422.
fn decode_payload(
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> Result<CreateStadiumRequest, ApiError> {
    let Json(value) = payload?;
    Ok(validate_create_payload(&value)?)
}

#[utoipa::path(
    get,
    path = "/stadiums",
    responses(
        (status = 200, description = "All stadiums", body = [Stadium]),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn list_stadiums_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Stadium>>, ApiError> {
    let stadiums = state.store.list().await?;
    tracing::debug!(count = stadiums.len(), "listed stadiums");
    Ok(Json(stadiums))
}

#[utoipa::path(
    post,
    path = "/stadiums",
    request_body = CreateStadiumRequest,
    responses(
        (status = 200, description = "Stadium created", body = Stadium),
        (status = 400, description = "Malformed body or duplicate name", body = ApiResponse),
        (status = 422, description = "Validation failed", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_stadium_handler(
    State(state): State<AppState>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<Stadium>, ApiError> {
    let request = decode_payload(payload)?;
    let stadium = state.store.create(&request).await?;
    tracing::info!(id = stadium.id, name = %stadium, "created stadium");
    Ok(Json(stadium))
}

#[utoipa::path(
    get,
    path = "/stadiums/{id}",
    params(
        ("id" = i64, Path, description = "Stadium id")
    ),
    responses(
        (status = 200, description = "Stadium found", body = Stadium),
        (status = 404, description = "No stadium with this id", body = ApiResponse)
    )
)]
pub async fn get_stadium_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Stadium>, ApiError> {
    Ok(Json(state.store.get(id).await?))
}

#[utoipa::path(
    put,
    path = "/stadiums/{id}",
    params(
        ("id" = i64, Path, description = "Stadium id")
    ),
    request_body = CreateStadiumRequest,
    responses(
        (status = 200, description = "Stadium updated", body = Stadium),
        (status = 400, description = "Malformed body or duplicate name", body = ApiResponse),
        (status = 404, description = "No stadium with this id", body = ApiResponse),
        (status = 422, description = "Validation failed", body = ApiResponse)
    )
)]
pub async fn update_stadium_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<Stadium>, ApiError> {
    // A missing id wins over a bad body.
    state.store.get(id).await?;
    let request = decode_payload(payload)?;
    let stadium = state.store.update(id, &request).await?;
    tracing::info!(id, name = %stadium, "updated stadium");
    Ok(Json(stadium))
}

#[utoipa::path(
    delete,
    path = "/stadiums/{id}",
    params(
        ("id" = i64, Path, description = "Stadium id")
    ),
    responses(
        (status = 200, description = "Stadium deleted", body = ApiResponse),
        (status = 404, description = "No stadium with this id", body = ApiResponse)
    )
)]
pub async fn delete_stadium_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse>, ApiError> {
    state.store.delete(id).await?;
    tracing::info!(id, "deleted stadium");
    Ok(Json(ApiResponse::ok()))
}
