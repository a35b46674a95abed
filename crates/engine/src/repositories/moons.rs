//! Moon catalog operations.
//!
//! Wraps the [`MoonRepo`] port with the random selections the use cases
//! need. Random picks choose a position among the rows that exist rather
//! than an id in `1..=count`, so catalogs with id gaps keep every row
//! reachable.

use std::sync::Arc;

use moonfinder_domain::{Moon, MoonId, MoonSummary};

use crate::infrastructure::ports::{MoonRepo, RandomPort, RepoError};

/// Read-only moon catalog.
pub struct Moons {
    repo: Arc<dyn MoonRepo>,
    random: Arc<dyn RandomPort>,
}

impl Moons {
    pub fn new(repo: Arc<dyn MoonRepo>, random: Arc<dyn RandomPort>) -> Self {
        Self { repo, random }
    }

    pub async fn count_all(&self) -> Result<u64, RepoError> {
        self.repo.count().await
    }

    pub async fn get_by_id(&self, id: MoonId) -> Result<Option<Moon>, RepoError> {
        self.repo.get(id).await
    }

    /// Uniformly random moon from the whole catalog.
    ///
    /// # Errors
    ///
    /// `MoonError::EmptyCatalog` when there are no rows at all.
    pub async fn get_random(&self) -> Result<Moon, MoonError> {
        let count = self.repo.count().await?;
        if count == 0 {
            return Err(MoonError::EmptyCatalog);
        }

        let offset = self.random.gen_range(0, count - 1);
        self.repo.get_nth(offset).await?.ok_or_else(|| {
            RepoError::database(
                "moons.get_random",
                format!("no row at offset {} of {}", offset, count),
            )
            .into()
        })
    }

    /// Uniformly random moon whose stored kingdom equals `kingdom` exactly.
    pub async fn get_random_in_kingdom(
        &self,
        kingdom: &str,
    ) -> Result<Option<Moon>, MoonError> {
        let count = self.repo.count_in_kingdom(kingdom).await?;
        if count == 0 {
            return Ok(None);
        }

        let offset = self.random.gen_range(0, count - 1);
        Ok(self.repo.get_nth_in_kingdom(kingdom, offset).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Moon>, RepoError> {
        self.repo.list().await
    }

    pub async fn list_all_brief(&self) -> Result<Vec<MoonSummary>, RepoError> {
        self.repo.list_brief().await
    }

    /// Distinct kingdom names present in the catalog.
    pub async fn list_kingdoms(&self) -> Result<Vec<String>, RepoError> {
        self.repo.list_kingdoms().await
    }
}

/// Errors that can occur while picking moons.
#[derive(Debug, thiserror::Error)]
pub enum MoonError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
    #[error("The moon catalog is empty")]
    EmptyCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockMoonRepo, MockRandomPort};
    use crate::infrastructure::random::FixedRandom;
    use moonfinder_domain::MoonName;

    fn moon(id: i64, kingdom: &str) -> Moon {
        Moon::new(
            MoonId::new(id).unwrap(),
            MoonName::new(format!("Moon {}", id)).unwrap(),
            kingdom,
            1,
            false,
        )
    }

    #[tokio::test]
    async fn random_pick_uses_offset_within_row_count() {
        let mut repo = MockMoonRepo::new();
        repo.expect_count().returning(|| Ok(3));
        repo.expect_get_nth()
            .withf(|offset| *offset == 2)
            .returning(|_| Ok(Some(moon(9, "Snow"))));

        let mut random = MockRandomPort::new();
        random
            .expect_gen_range()
            .withf(|min, max| *min == 0 && *max == 2)
            .return_const(2u64);

        let moons = Moons::new(Arc::new(repo), Arc::new(random));
        assert_eq!(moons.get_random().await.unwrap().id.get(), 9);
    }

    #[tokio::test]
    async fn random_pick_on_empty_catalog_fails() {
        let mut repo = MockMoonRepo::new();
        repo.expect_count().returning(|| Ok(0));
        repo.expect_get_nth().never();

        let moons = Moons::new(Arc::new(repo), Arc::new(FixedRandom(0)));
        assert!(matches!(
            moons.get_random().await,
            Err(MoonError::EmptyCatalog)
        ));
    }

    #[tokio::test]
    async fn random_pick_propagates_store_faults() {
        let mut repo = MockMoonRepo::new();
        repo.expect_count()
            .returning(|| Err(RepoError::database("moons.count", "unavailable")));

        let moons = Moons::new(Arc::new(repo), Arc::new(FixedRandom(0)));
        assert!(matches!(
            moons.get_random().await,
            Err(MoonError::Repo(RepoError::Database { .. }))
        ));
    }

    #[tokio::test]
    async fn kingdom_pick_with_no_rows_is_none() {
        let mut repo = MockMoonRepo::new();
        repo.expect_count_in_kingdom()
            .withf(|kingdom: &str| kingdom == "Nowhere")
            .returning(|_| Ok(0));
        repo.expect_get_nth_in_kingdom().never();

        let moons = Moons::new(Arc::new(repo), Arc::new(FixedRandom(0)));
        assert!(moons.get_random_in_kingdom("Nowhere").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn kingdom_pick_uses_offset_within_kingdom_count() {
        let mut repo = MockMoonRepo::new();
        repo.expect_count_in_kingdom().returning(|_| Ok(4));
        repo.expect_get_nth_in_kingdom()
            .withf(|kingdom: &str, offset: &u64| kingdom == "Snow" && *offset == 3)
            .returning(|_, _| Ok(Some(moon(40, "Snow"))));

        let mut random = MockRandomPort::new();
        random
            .expect_gen_range()
            .withf(|min, max| *min == 0 && *max == 3)
            .return_const(3u64);

        let moons = Moons::new(Arc::new(repo), Arc::new(random));
        let picked = moons.get_random_in_kingdom("Snow").await.unwrap().unwrap();
        assert_eq!(picked.id.get(), 40);
    }
}
