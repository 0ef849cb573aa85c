//! Health and store statistics handlers.

use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::{
    database::{Database, StoreStats},
    errors::AppError,
};

/// Health check.
#[utoipa::path(
    get,
    path = "/health",
    tag = "meta",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Entity counts across the store.
#[utoipa::path(
    get,
    path = "/stats",
    tag = "meta",
    responses(
        (status = 200, description = "Entity counts", body = StoreStats)
    )
)]
pub async fn get_stats(Extension(db): Extension<Database>) -> Result<Json<StoreStats>, AppError> {
    let stats = db.stats().await?;
    Ok(Json(stats))
}
