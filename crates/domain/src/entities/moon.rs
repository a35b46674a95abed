//! Moon entity - One collectible record of the catalog
//!
//! The catalog is a pre-seeded, read-only table:
//!
//! ```sql
//! CREATE TABLE moons (
//!     id          INTEGER PRIMARY KEY,
//!     name        TEXT NOT NULL,
//!     kingdom     TEXT NOT NULL,
//!     moon_type   INTEGER NOT NULL,
//!     is_postgame TEXT NOT NULL  -- "True" / "False"
//! );
//! ```

use serde::{Deserialize, Serialize};

use moonfinder_domain::{AudioCue, MoonId, MoonName};

/// Stored text for a postgame moon.
const POSTGAME_TRUE: &str = "True";
/// Stored text for a moon reachable before the credits.
const POSTGAME_FALSE: &str = "False";

/// A collectible moon.
///
/// Simple data struct: every combination of field values read from the
/// catalog is valid, so the fields are public. `kingdom` holds the stored,
/// title-cased name and is not forced into [`Kingdom`](crate::Kingdom) so that rows with a
/// kingdom outside the known set still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moon {
    pub id: MoonId,
    pub name: MoonName,
    pub kingdom: String,
    /// Category code; selects the audio cue. Observed values are 1-5.
    pub moon_type: i64,
    /// Only reachable after the final boss.
    pub is_postgame: bool,
}

impl Moon {
    pub fn new(
        id: MoonId,
        name: MoonName,
        kingdom: impl Into<String>,
        moon_type: i64,
        is_postgame: bool,
    ) -> Self {
        Self {
            id,
            name,
            kingdom: kingdom.into(),
            moon_type,
            is_postgame,
        }
    }

    /// Cue played when this moon is announced.
    pub fn audio_cue(&self) -> AudioCue {
        AudioCue::for_moon_type(self.moon_type)
    }

    /// Read the stored postgame flag. Only the exact text `"True"` is true.
    pub fn parse_postgame_flag(stored: &str) -> bool {
        stored == POSTGAME_TRUE
    }

    /// The postgame flag in its stored text form.
    pub fn postgame_flag(&self) -> &'static str {
        if self.is_postgame {
            POSTGAME_TRUE
        } else {
            POSTGAME_FALSE
        }
    }

    pub fn summary(&self) -> MoonSummary {
        MoonSummary {
            id: self.id,
            name: self.name.clone(),
            kingdom: self.kingdom.clone(),
        }
    }
}

/// Listing projection of a moon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoonSummary {
    pub id: MoonId,
    pub name: MoonName,
    pub kingdom: String,
}
