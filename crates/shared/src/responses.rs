//! Data API response types
//!
//! Every data endpoint answers with the same envelope, `{"data": [...]}`,
//! including lookups that found nothing (`{"data": []}`).

use serde::{Deserialize, Serialize};

use moonfinder_domain::{DomainError, Moon, MoonId, MoonName, MoonSummary};

// =============================================================================
// Envelope
// =============================================================================

/// `{"data": [...]}` wrapper used by all data endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Vec<T>,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Envelope holding zero or one item.
    pub fn from_option(item: Option<T>) -> Self {
        Self {
            data: item.into_iter().collect(),
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// Flat record of every stored moon column.
///
/// `is_postgame` keeps its stored text form (`"True"`/`"False"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoonRecord {
    pub id: i64,
    pub name: String,
    pub kingdom: String,
    pub moon_type: i64,
    pub is_postgame: String,
}

impl From<&Moon> for MoonRecord {
    fn from(moon: &Moon) -> Self {
        Self {
            id: moon.id.get(),
            name: moon.name.to_string(),
            kingdom: moon.kingdom.clone(),
            moon_type: moon.moon_type,
            is_postgame: moon.postgame_flag().to_string(),
        }
    }
}

impl TryFrom<MoonRecord> for Moon {
    type Error = DomainError;

    fn try_from(record: MoonRecord) -> Result<Self, Self::Error> {
        Ok(Moon::new(
            MoonId::new(record.id)?,
            MoonName::new(record.name)?,
            record.kingdom,
            record.moon_type,
            Moon::parse_postgame_flag(&record.is_postgame),
        ))
    }
}

/// Listing projection: id, name and kingdom only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoonBrief {
    pub id: i64,
    pub name: String,
    pub kingdom: String,
}

impl From<&MoonSummary> for MoonBrief {
    fn from(summary: &MoonSummary) -> Self {
        Self {
            id: summary.id.get(),
            name: summary.name.to_string(),
            kingdom: summary.kingdom.clone(),
        }
    }
}
