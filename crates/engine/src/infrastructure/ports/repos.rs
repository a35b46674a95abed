//! Repository port traits for database access.

use async_trait::async_trait;
use moonfinder_domain::{Moon, MoonId, MoonSummary};

use super::error::RepoError;

// =============================================================================
// Moon Catalog
// =============================================================================

/// Read-only access to the moon catalog.
///
/// Positional lookups (`get_nth*`) order rows by id, so an offset in
/// `0..count` always lands on an existing row whatever gaps the ids have.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoonRepo: Send + Sync {
    async fn count(&self) -> Result<u64, RepoError>;
    async fn get(&self, id: MoonId) -> Result<Option<Moon>, RepoError>;
    async fn get_nth(&self, offset: u64) -> Result<Option<Moon>, RepoError>;

    // Kingdom filtered (exact, case-sensitive match on the stored name)
    async fn count_in_kingdom(&self, kingdom: &str) -> Result<u64, RepoError>;
    async fn get_nth_in_kingdom(
        &self,
        kingdom: &str,
        offset: u64,
    ) -> Result<Option<Moon>, RepoError>;

    // Listings
    async fn list(&self) -> Result<Vec<Moon>, RepoError>;
    async fn list_brief(&self) -> Result<Vec<MoonSummary>, RepoError>;
    async fn list_kingdoms(&self) -> Result<Vec<String>, RepoError>;
}
