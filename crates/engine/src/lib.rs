//! Moonfinder Engine library.
//!
//! Serves the moon catalog to a voice skill and a small data API.
//!
//! ## Structure
//!
//! - `repositories/` - Catalog access wrapping port traits
//! - `use_cases/` - Moon selection and rendering
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod repositories;
pub mod use_cases;

/// Test fixtures for router tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
