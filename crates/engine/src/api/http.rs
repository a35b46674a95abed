//! HTTP routes.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use moonfinder_domain::MoonId;
use moonfinder_shared::{DataEnvelope, MoonBrief, MoonRecord};

use crate::app::App;
use crate::repositories::MoonError;
use crate::use_cases::moons::render_record;

/// Create all data API routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health))
        .route("/all", get(list_brief))
        .route("/moons", get(list_moons))
        .route("/moons/{id}", get(get_moon))
        .route("/random", get(random_moon))
}

async fn health() -> &'static str {
    "OK"
}

async fn list_brief(
    State(app): State<Arc<App>>,
) -> Result<Json<DataEnvelope<MoonBrief>>, ApiError> {
    let moons = app.repositories.moons.list_all_brief().await?;
    Ok(Json(DataEnvelope::new(
        moons.iter().map(MoonBrief::from).collect(),
    )))
}

async fn list_moons(
    State(app): State<Arc<App>>,
) -> Result<Json<DataEnvelope<MoonRecord>>, ApiError> {
    let moons = app.repositories.moons.list_all().await?;
    Ok(Json(DataEnvelope::new(
        moons.iter().map(render_record).collect(),
    )))
}

async fn get_moon(
    State(app): State<Arc<App>>,
    Path(id): Path<i64>,
) -> Result<Json<DataEnvelope<MoonRecord>>, ApiError> {
    let id = MoonId::new(id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let moon = app.use_cases.moons.selector.pick_by_id(id).await?;
    Ok(Json(DataEnvelope::from_option(
        moon.as_ref().map(render_record),
    )))
}

async fn random_moon(
    State(app): State<Arc<App>>,
) -> Result<Json<DataEnvelope<MoonRecord>>, ApiError> {
    let moon = app.use_cases.moons.selector.pick_random().await?;
    tracing::debug!(moon_id = %moon.id, "Served random moon");
    Ok(Json(DataEnvelope::new(vec![render_record(&moon)])))
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => {
                (axum::http::StatusCode::NOT_FOUND, "Not found").into_response()
            }
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error",
                )
                    .into_response()
            }
        }
    }
}

impl From<crate::infrastructure::ports::RepoError> for ApiError {
    fn from(e: crate::infrastructure::ports::RepoError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<MoonError> for ApiError {
    fn from(e: MoonError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
