//! Kingdom names and the spoken alias table.
//!
//! Stored moons carry the canonical, title-cased kingdom name ("Cap",
//! "Dark Side", "Bowser's"). Voice input arrives in arbitrary casing and
//! sometimes names a landmark instead of the kingdom ("shiveria"), so
//! lookups go through [`title_case`] first and [`Kingdom::resolve_alias`]
//! second.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Kingdom used when a voice request leaves the kingdom slot empty.
pub const DEFAULT_KINGDOM: Kingdom = Kingdom::Cap;

/// Title-case text the way the catalog stores kingdom names.
///
/// Splits on the space character only, uppercases the first character of
/// each token and lowercases the rest, then rejoins with single spaces.
/// Leading, trailing and repeated spaces produce empty tokens, which are
/// kept, so `" cap"` becomes `" Cap"`.
pub fn title_case(text: &str) -> String {
    text.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// The closed set of canonical kingdoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Kingdom {
    Cap,
    Cascade,
    Sand,
    Lake,
    Wooded,
    Cloud,
    Lost,
    Ruined,
    Metro,
    Snow,
    Seaside,
    Luncheon,
    Bowsers,
    Moon,
    Mushroom,
    DarkSide,
    DarkerSide,
}

/// Lowercase spoken phrase → kingdom.
const ALIASES: &[(&str, Kingdom)] = &[
    ("culmina crater", Kingdom::DarkerSide),
    ("rabbit ridge", Kingdom::DarkSide),
    ("honeylune ridge", Kingdom::Moon),
    ("bowser's castle", Kingdom::Bowsers),
    ("volbono", Kingdom::Luncheon),
    ("tostarena", Kingdom::Sand),
    ("bonneton", Kingdom::Cap),
    ("fossil falls", Kingdom::Cascade),
    ("nimbus arena", Kingdom::Cloud),
    ("crumbleden", Kingdom::Ruined),
    ("lake lamode", Kingdom::Lake),
    ("bubblaine", Kingdom::Seaside),
    ("shiveria", Kingdom::Snow),
    ("peach's castle", Kingdom::Mushroom),
    ("steam gardens", Kingdom::Wooded),
    ("forgotten isle", Kingdom::Lost),
    ("new donk city", Kingdom::Metro),
];

impl Kingdom {
    pub const ALL: [Kingdom; 17] = [
        Kingdom::Cap,
        Kingdom::Cascade,
        Kingdom::Sand,
        Kingdom::Lake,
        Kingdom::Wooded,
        Kingdom::Cloud,
        Kingdom::Lost,
        Kingdom::Ruined,
        Kingdom::Metro,
        Kingdom::Snow,
        Kingdom::Seaside,
        Kingdom::Luncheon,
        Kingdom::Bowsers,
        Kingdom::Moon,
        Kingdom::Mushroom,
        Kingdom::DarkSide,
        Kingdom::DarkerSide,
    ];

    /// The name as stored in the catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cap => "Cap",
            Self::Cascade => "Cascade",
            Self::Sand => "Sand",
            Self::Lake => "Lake",
            Self::Wooded => "Wooded",
            Self::Cloud => "Cloud",
            Self::Lost => "Lost",
            Self::Ruined => "Ruined",
            Self::Metro => "Metro",
            Self::Snow => "Snow",
            Self::Seaside => "Seaside",
            Self::Luncheon => "Luncheon",
            Self::Bowsers => "Bowser's",
            Self::Moon => "Moon",
            Self::Mushroom => "Mushroom",
            Self::DarkSide => "Dark Side",
            Self::DarkerSide => "Darker Side",
        }
    }

    /// Exact, case-sensitive match against the stored names.
    pub fn from_canonical(name: &str) -> Option<Kingdom> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }

    /// Resolve a lowercase spoken alias to its kingdom.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownAlias` when the phrase is not in the table.
    pub fn resolve_alias(phrase: &str) -> Result<Kingdom, DomainError> {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == phrase)
            .map(|(_, kingdom)| *kingdom)
            .ok_or_else(|| DomainError::unknown_alias(phrase))
    }

    /// Every alias phrase with the kingdom it resolves to.
    pub fn aliases() -> impl Iterator<Item = (&'static str, Kingdom)> {
        ALIASES.iter().copied()
    }
}

impl fmt::Display for Kingdom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Kingdom {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(s)
            .ok_or_else(|| DomainError::validation(format!("Unknown kingdom: {}", s)))
    }
}

impl TryFrom<String> for Kingdom {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Kingdom> for String {
    fn from(kingdom: Kingdom) -> String {
        kingdom.as_str().to_string()
    }
}
