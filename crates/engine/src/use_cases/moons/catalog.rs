//! Startup consistency check of the moon catalog.

use moonfinder_domain::Kingdom;

use crate::repositories::{MoonError, Moons};

/// What the catalog looked like at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    pub moon_count: u64,
    /// Stored kingdom names outside the canonical set. Queries can still
    /// reach these by exact title-cased name but never through an alias.
    pub unknown_kingdoms: Vec<String>,
}

/// Verify the catalog can serve requests.
///
/// # Errors
///
/// `MoonError::EmptyCatalog` when the catalog has no rows.
pub async fn verify_catalog(moons: &Moons) -> Result<CatalogReport, MoonError> {
    let moon_count = moons.count_all().await?;
    if moon_count == 0 {
        return Err(MoonError::EmptyCatalog);
    }

    let unknown_kingdoms: Vec<String> = moons
        .list_kingdoms()
        .await?
        .into_iter()
        .filter(|name| Kingdom::from_canonical(name).is_none())
        .collect();

    for kingdom in &unknown_kingdoms {
        tracing::warn!(kingdom = %kingdom, "Catalog holds a kingdom outside the canonical set");
    }

    Ok(CatalogReport {
        moon_count,
        unknown_kingdoms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::infrastructure::ports::MockMoonRepo;
    use crate::infrastructure::random::FixedRandom;

    fn moons(repo: MockMoonRepo) -> Moons {
        Moons::new(Arc::new(repo), Arc::new(FixedRandom(0)))
    }

    #[tokio::test]
    async fn empty_catalog_is_rejected() {
        let mut repo = MockMoonRepo::new();
        repo.expect_count().returning(|| Ok(0));
        repo.expect_list_kingdoms().never();

        assert!(matches!(
            verify_catalog(&moons(repo)).await,
            Err(MoonError::EmptyCatalog)
        ));
    }

    #[tokio::test]
    async fn reports_kingdoms_outside_canonical_set() {
        let mut repo = MockMoonRepo::new();
        repo.expect_count().returning(|| Ok(12));
        repo.expect_list_kingdoms().returning(|| {
            Ok(vec![
                "Cap".to_string(),
                "Dark Side".to_string(),
                "Shiveria".to_string(),
                "snow".to_string(),
            ])
        });

        let report = verify_catalog(&moons(repo)).await.unwrap();
        assert_eq!(report.moon_count, 12);
        assert_eq!(
            report.unknown_kingdoms,
            vec!["Shiveria".to_string(), "snow".to_string()]
        );
    }
}
