//! Application state and composition.

use std::path::PathBuf;
use std::sync::Arc;

use crate::infrastructure::ports::{MoonRepo, RandomPort};
use crate::repositories::Moons;
use crate::use_cases::moons::{MoonRenderer, MoonSelector, MoonUseCases};

/// Main application state.
///
/// Holds the catalog and use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    /// Directory holding the cue audio, map image and index page.
    pub static_dir: PathBuf,
}

/// Container for all repository modules.
pub struct Repositories {
    pub moons: Arc<Moons>,
}

/// Container for all use cases.
pub struct UseCases {
    pub moons: MoonUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        moon_repo: Arc<dyn MoonRepo>,
        random: Arc<dyn RandomPort>,
        public_base_url: &str,
        static_dir: PathBuf,
    ) -> Self {
        let moons = Arc::new(Moons::new(moon_repo, random));

        let selector = Arc::new(MoonSelector::new(moons.clone()));
        let renderer = Arc::new(MoonRenderer::new(public_base_url));

        Self {
            repositories: Repositories { moons },
            use_cases: UseCases {
                moons: MoonUseCases::new(selector, renderer),
            },
            static_dir,
        }
    }
}
