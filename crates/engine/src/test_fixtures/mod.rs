//! Shared fixtures for router tests.
//!
//! Builds an [`App`] over a seeded in-memory catalog, a fixed random source
//! and a temporary static directory holding placeholder assets.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use moonfinder_domain::AudioCue;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::api;
use crate::app::App;
use crate::infrastructure::random::FixedRandom;
use crate::infrastructure::sqlite::testing::{moon_row, seeded_pool, MoonRow};
use crate::infrastructure::sqlite::SqliteMoonRepo;

pub const BASE_URL: &str = "https://moons.example.com";

/// Router plus the temporary directory it serves from.
pub struct TestServer {
    pub router: Router,
    _static_dir: TempDir,
}

pub fn sample_rows() -> Vec<MoonRow> {
    vec![
        moon_row(1, "Peek-A-Boo", "Cap", 1, "False"),
        moon_row(2, "Our First Power Moon", "Cascade", 2, "False"),
        moon_row(5, "Shiverian Treasure Chest", "Snow", 3, "True"),
        moon_row(9, "Arrival at Rabbit Ridge!", "Dark Side", 4, "True"),
    ]
}

/// Write a small marker file for every asset the server serves.
fn write_static_files(dir: &TempDir) {
    for cue in AudioCue::ALL {
        std::fs::write(dir.path().join(cue.file_name()), cue.file_name()).expect("cue file");
    }
    std::fs::write(dir.path().join(api::assets::MAP_FILE), "map").expect("map file");
    std::fs::write(
        dir.path().join(api::assets::INDEX_FILE),
        "<html>moonfinder</html>",
    )
    .expect("index file");
}

pub async fn test_server(rows: &[MoonRow], random: u64) -> TestServer {
    let static_dir = TempDir::new().expect("temp dir");
    write_static_files(&static_dir);

    let repo = Arc::new(SqliteMoonRepo::new(seeded_pool(rows).await));
    let app = Arc::new(App::new(
        repo,
        Arc::new(FixedRandom(random)),
        BASE_URL,
        static_dir.path().to_path_buf(),
    ));

    TestServer {
        router: api::router(app),
        _static_dir: static_dir,
    }
}

impl TestServer {
    pub async fn get(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        self.send(Request::get(uri).body(Body::empty()).expect("request"))
            .await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> (StatusCode, Vec<u8>) {
        let request = Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, bytes) = self.get(uri).await;
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible router");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, bytes.to_vec())
    }
}
