//! Repository modules - Data access wrappers around port traits.
//!
//! Each repository wraps a port trait and provides the interface
//! use cases use to read persisted records.

pub mod moons;

pub use moons::{MoonError, Moons};
