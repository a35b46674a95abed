//! API layer - HTTP entry points.

pub mod assets;
pub mod http;
pub mod voice;

use std::sync::Arc;

use axum::{routing::get_service, Router};
use tower_http::services::ServeFile;

use crate::app::App;

/// Full router: data API, static assets, and the voice endpoint at `/`.
///
/// `GET /` serves the landing page and `POST /` takes voice requests.
pub fn router(app: Arc<App>) -> Router {
    let index = ServeFile::new(app.static_dir.join(assets::INDEX_FILE));

    http::routes()
        .merge(assets::routes(&app.static_dir))
        .route("/", get_service(index).post(voice::handle))
        .fallback(|| async { http::ApiError::NotFound })
        .with_state(app)
}
