// Wire shapes of the remote catalog API.
// Only the fields the catalog reads are modelled; everything else is ignored by serde.

use crate::domain::{AbilityTag, Entity, EntityId, STAT_SLOTS, Stat, TypeTag};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Lightweight pointer returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityReference {
    pub name: String,
    pub url: String,
}

impl EntityReference {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub results: Vec<EntityReference>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: i64,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

impl Sprites {
    /// Official artwork first, then the default sprite.
    pub fn best(&self) -> Option<&str> {
        self.other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|artwork| artwork.front_default.as_deref())
            .or(self.front_default.as_deref())
    }
}

/// Detail endpoint payload.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    pub height: i64,
    pub weight: i64,
    #[serde(default)]
    pub sprites: Option<Sprites>,
}

impl TryFrom<DetailResponse> for Entity {
    type Error = Error;

    fn try_from(detail: DetailResponse) -> Result<Self> {
        let id = u32::try_from(detail.id)
            .ok()
            .and_then(EntityId::new)
            .ok_or_else(|| Error::InvalidId(detail.id, detail.name.clone()))?;

        if detail.stats.len() != STAT_SLOTS {
            return Err(Error::StatSlots {
                name: detail.name,
                found: detail.stats.len(),
            });
        }

        // Positional: slot order is taken as delivered.
        let mut stats = Vec::with_capacity(STAT_SLOTS);
        for slot in detail.stats {
            let value = u8::try_from(slot.base_stat).map_err(|_| Error::StatOutOfRange {
                name: detail.name.clone(),
                stat: slot.stat.name.clone(),
                value: slot.base_stat,
            })?;
            stats.push(Stat::new(slot.stat.name, value));
        }
        let stats: [Stat; STAT_SLOTS] = stats
            .try_into()
            .map_err(|rest: Vec<Stat>| Error::StatSlots {
                name: detail.name.clone(),
                found: rest.len(),
            })?;

        let height = measure(&detail.name, "height", detail.height)?;
        let weight = measure(&detail.name, "weight", detail.weight)?;
        let sprite_url = detail
            .sprites
            .as_ref()
            .and_then(Sprites::best)
            .map(str::to_string);

        Ok(Entity {
            id,
            name: detail.name,
            types: detail
                .types
                .into_iter()
                .map(|slot| TypeTag::new(slot.type_.name))
                .collect(),
            stats,
            abilities: detail
                .abilities
                .into_iter()
                .map(|slot| AbilityTag::new(slot.ability.name))
                .collect(),
            height,
            weight,
            sprite_url,
        })
    }
}

fn measure(name: &str, field: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| Error::NegativeMeasure {
        name: name.to_string(),
        field,
        value,
    })
}
