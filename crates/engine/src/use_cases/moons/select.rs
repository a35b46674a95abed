//! Moon selection for the voice and REST surfaces.

use std::sync::Arc;

use moonfinder_domain::{title_case, Kingdom, Moon, MoonId};

use crate::repositories::{MoonError, Moons};

/// Picks moons at random, by kingdom query, or by id.
pub struct MoonSelector {
    moons: Arc<Moons>,
}

impl MoonSelector {
    pub fn new(moons: Arc<Moons>) -> Self {
        Self { moons }
    }

    pub async fn pick_random(&self) -> Result<Moon, MoonError> {
        self.moons.get_random().await
    }

    /// Pick a random moon from the kingdom a spoken phrase refers to.
    ///
    /// The phrase is first tried as a kingdom name in title case, then as a
    /// lowercase alias. Phrases that match nothing yield `Ok(None)`.
    pub async fn pick_by_query(&self, raw: &str) -> Result<Option<Moon>, MoonError> {
        let titled = title_case(raw);
        if let Some(moon) = self.moons.get_random_in_kingdom(&titled).await? {
            return Ok(Some(moon));
        }

        let alias = raw.to_lowercase();
        match Kingdom::resolve_alias(&alias) {
            Ok(kingdom) => {
                tracing::debug!(query = %raw, kingdom = %kingdom, "Resolved kingdom alias");
                self.moons.get_random_in_kingdom(kingdom.as_str()).await
            }
            Err(_) => {
                tracing::debug!(query = %raw, "No kingdom matches query");
                Ok(None)
            }
        }
    }

    pub async fn pick_by_id(&self, id: MoonId) -> Result<Option<Moon>, MoonError> {
        Ok(self.moons.get_by_id(id).await?)
    }
}
