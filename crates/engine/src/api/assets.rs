//! Static assets: cue audio, the kingdom map and the landing page.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{routing::get_service, Router};
use moonfinder_domain::AudioCue;
use tower_http::services::ServeFile;

use crate::app::App;

pub const MAP_FILE: &str = "map.jpg";
pub const INDEX_FILE: &str = "index.html";

/// Cue and map routes, served from `static_dir`.
pub fn routes(static_dir: &Path) -> Router<Arc<App>> {
    let router = Router::new().route(
        "/map",
        get_service(ServeFile::new(static_dir.join(MAP_FILE))),
    );

    AudioCue::ALL.into_iter().fold(router, |router, cue| {
        router.route(
            cue.path(),
            get_service(ServeFile::new(static_dir.join(cue.file_name()))),
        )
    })
}

/// Every file the static routes expect under `static_dir`.
pub fn expected_files(static_dir: &Path) -> Vec<PathBuf> {
    AudioCue::ALL
        .iter()
        .map(|cue| cue.file_name())
        .chain([MAP_FILE, INDEX_FILE])
        .map(|name| static_dir.join(name))
        .collect()
}

/// Expected static files that do not exist.
pub fn missing_files(static_dir: &Path) -> Vec<PathBuf> {
    expected_files(static_dir)
        .into_iter()
        .filter(|path| !path.is_file())
        .collect()
}
