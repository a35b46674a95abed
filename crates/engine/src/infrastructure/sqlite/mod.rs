//! SQLite persistence adapters
//!
//! The moon catalog is a pre-seeded SQLite file opened read-only.

mod connection;
mod moon_repo;

pub use connection::open_catalog;
pub use moon_repo::SqliteMoonRepo;

#[cfg(test)]
pub mod testing;
