//! Entity builders and sample catalogs.

use pokedex_types::{AbilityTag, Entity, EntityId, STAT_ORDER, Stat, TypeTag};
use serde_json::{Value, json};

/// Fluent builder for [`Entity`] with plausible defaults.
#[derive(Debug, Clone)]
pub struct EntityBuilder {
    id: u32,
    name: String,
    types: Vec<String>,
    stats: [u8; 6],
    abilities: Vec<String>,
    height: u32,
    weight: u32,
    sprite_url: Option<String>,
}

impl EntityBuilder {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            types: vec!["normal".to_string()],
            stats: [50; 6],
            abilities: vec!["run-away".to_string()],
            height: 10,
            weight: 100,
            sprite_url: None,
        }
    }

    pub fn types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn hp(mut self, value: u8) -> Self {
        self.stats[0] = value;
        self
    }

    pub fn attack(mut self, value: u8) -> Self {
        self.stats[1] = value;
        self
    }

    pub fn stats(mut self, stats: [u8; 6]) -> Self {
        self.stats = stats;
        self
    }

    pub fn abilities(mut self, abilities: &[&str]) -> Self {
        self.abilities = abilities.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn size(mut self, height: u32, weight: u32) -> Self {
        self.height = height;
        self.weight = weight;
        self
    }

    pub fn sprite(mut self, url: &str) -> Self {
        self.sprite_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> Entity {
        Entity {
            id: EntityId::new(self.id).expect("fixture ids start at 1"),
            name: self.name,
            types: self.types.into_iter().map(TypeTag::new).collect(),
            stats: std::array::from_fn(|slot| Stat::new(STAT_ORDER[slot], self.stats[slot])),
            abilities: self.abilities.into_iter().map(AbilityTag::new).collect(),
            height: self.height,
            weight: self.weight,
            sprite_url: self.sprite_url,
        }
    }
}

/// Shorthand for the fields the view engine reads.
pub fn entity(id: u32, name: &str, types: &[&str], hp: u8, attack: u8) -> Entity {
    EntityBuilder::new(id, name)
        .types(types)
        .hp(hp)
        .attack(attack)
        .build()
}

/// A small catalog with real base stats, in id order.
pub fn sample_catalog() -> Vec<Entity> {
    vec![
        entity(1, "bulbasaur", &["grass", "poison"], 45, 49),
        entity(4, "charmander", &["fire"], 39, 52),
        entity(5, "charmeleon", &["fire"], 58, 64),
        entity(6, "charizard", &["fire", "flying"], 78, 84),
        entity(7, "squirtle", &["water"], 44, 48),
        entity(25, "pikachu", &["electric"], 35, 55),
        entity(35, "clefairy", &["fairy"], 70, 45),
        entity(63, "abra", &["psychic"], 25, 20),
        entity(131, "lapras", &["water", "ice"], 130, 85),
        entity(143, "snorlax", &["normal"], 160, 110),
        entity(147, "dratini", &["dragon"], 41, 64),
        entity(149, "dragonite", &["dragon", "flying"], 91, 134),
    ]
}

/// `n` generic entities with ids `1..=n`.
pub fn numbered_catalog(n: u32) -> Vec<Entity> {
    (1..=n)
        .map(|id| EntityBuilder::new(id, &format!("creature-{:03}", id)).build())
        .collect()
}

/// Detail payload in the remote API's shape.
pub fn detail_json(entity: &Entity) -> Value {
    json!({
        "id": entity.id.get(),
        "name": entity.name,
        "height": entity.height,
        "weight": entity.weight,
        "types": entity.types.iter().enumerate().map(|(slot, t)| json!({
            "slot": slot + 1,
            "type": { "name": t.name }
        })).collect::<Vec<_>>(),
        "stats": entity.stats.iter().map(|s| json!({
            "base_stat": s.base_value,
            "effort": 0,
            "stat": { "name": s.name }
        })).collect::<Vec<_>>(),
        "abilities": entity.abilities.iter().map(|a| json!({
            "ability": { "name": a.name },
            "is_hidden": false
        })).collect::<Vec<_>>(),
        "sprites": {
            "front_default": null,
            "other": { "official-artwork": { "front_default": entity.sprite_url } }
        }
    })
}
