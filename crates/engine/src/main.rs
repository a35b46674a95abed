//! Moonfinder Engine - Main entry point.

use std::path::Path;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moonfinder_engine::api;
use moonfinder_engine::infrastructure::{
    config::EngineConfig,
    random::SystemRandom,
    sqlite::{open_catalog, SqliteMoonRepo},
};
use moonfinder_engine::use_cases::moons::verify_catalog;
use moonfinder_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be started from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moonfinder_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Moonfinder Engine");

    let config = EngineConfig::from_env()?;

    tracing::info!(path = %config.db_path.display(), "Opening moon catalog");
    let pool = open_catalog(&config.db_path).await?;

    let app = Arc::new(App::new(
        Arc::new(SqliteMoonRepo::new(pool)),
        Arc::new(SystemRandom::new()),
        &config.public_base_url,
        config.static_dir.clone(),
    ));

    // Refuse to serve an empty catalog
    let report = verify_catalog(&app.repositories.moons).await?;
    tracing::info!(
        moons = report.moon_count,
        unknown_kingdoms = report.unknown_kingdoms.len(),
        "Moon catalog loaded"
    );

    warn_missing_assets(&config.static_dir);

    let mut router = api::router(app).layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }

    // Start server
    let addr = config.socket_addr()?;
    tracing::info!(
        "Listening on {} (cues served from {})",
        addr,
        config.public_base_url
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn warn_missing_assets(static_dir: &Path) {
    for path in api::assets::missing_files(static_dir) {
        tracing::warn!(path = %path.display(), "Static asset is missing");
    }
}

fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins?;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
