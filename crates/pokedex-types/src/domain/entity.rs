use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of base-stat slots every entity carries.
pub const STAT_SLOTS: usize = 6;

/// Canonical stat order. Consumers read slots by position, never by name.
pub const STAT_ORDER: [&str; STAT_SLOTS] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

/// Upper bound of a single base stat.
pub const MAX_BASE_STAT: u8 = u8::MAX;

/// Catalog identifier (always >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u32);

impl EntityId {
    /// Returns `None` for 0, which the catalog never issues.
    pub fn new(id: u32) -> Option<Self> {
        (id >= 1).then_some(Self(id))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EntityId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: u32 = s
            .trim_start_matches('#')
            .parse()
            .map_err(|_| format!("not a catalog id: {}", s))?;
        EntityId::new(raw).ok_or_else(|| format!("catalog ids start at 1, got {}", raw))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeTag {
    pub name: String,
}

impl TypeTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub name: String,
    pub base_value: u8,
}

impl Stat {
    pub fn new(name: impl Into<String>, base_value: u8) -> Self {
        Self {
            name: name.into(),
            base_value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityTag {
    pub name: String,
}

impl AbilityTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Fully resolved catalog record.
///
/// `stats` is a fixed array so the six-slot contract (hp, attack, defense,
/// special-attack, special-defense, speed) cannot be broken after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub types: Vec<TypeTag>,
    pub stats: [Stat; STAT_SLOTS],
    pub abilities: Vec<AbilityTag>,
    /// Decimetres
    pub height: u32,
    /// Decigrams
    pub weight: u32,
    pub sprite_url: Option<String>,
}

impl Entity {
    pub fn hp(&self) -> u8 {
        self.stats[0].base_value
    }

    pub fn attack(&self) -> u8 {
        self.stats[1].base_value
    }

    pub fn defense(&self) -> u8 {
        self.stats[2].base_value
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t.name == type_name)
    }
}
