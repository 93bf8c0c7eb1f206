use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordering applied to the filtered catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Ascending id
    #[default]
    #[serde(rename = "id")]
    ById,
    /// Ascending, locale-aware name
    #[serde(rename = "name")]
    ByName,
    /// Descending stat slot 0
    #[serde(rename = "hp")]
    ByHp,
    /// Descending stat slot 1
    #[serde(rename = "attack")]
    ByAttack,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::ById,
        SortKey::ByName,
        SortKey::ByHp,
        SortKey::ByAttack,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::ById => "id",
            SortKey::ByName => "name",
            SortKey::ByHp => "hp",
            SortKey::ByAttack => "attack",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown sort key: {} (expected id, name, hp or attack)", s))
    }
}
