//! Moonfinder domain layer.
//!
//! Pure types with no I/O: the [`Moon`] record, the closed set of
//! [`Kingdom`]s with their spoken aliases, and the [`AudioCue`] chosen for
//! each moon type.

extern crate self as moonfinder_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{Moon, MoonSummary};
pub use error::DomainError;
pub use ids::MoonId;
pub use value_objects::{title_case, AudioCue, Kingdom, MoonName, DEFAULT_KINGDOM};
