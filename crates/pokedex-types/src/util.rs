use crate::{EntityId, MAX_BASE_STAT};

/// Shown when an entity has neither artwork nor a default sprite.
pub const PLACEHOLDER_SPRITE: &str = "/fallback-pokeball.png";

/// Zero-padded display id, e.g. `#007`
pub fn format_entity_id(id: EntityId) -> String {
    format!("#{:03}", id.get())
}

/// Decimetres to metres
pub fn height_in_metres(decimetres: u32) -> f64 {
    f64::from(decimetres) / 10.0
}

/// Catalog weight units to kilograms (value / 10)
pub fn weight_in_kilograms(decigrams: u32) -> f64 {
    f64::from(decigrams) / 10.0
}

/// Width of a stat bar as a percentage of the maximum base value, capped at 100.
pub fn stat_percent(base_value: u8) -> f64 {
    (f64::from(base_value) / f64::from(MAX_BASE_STAT) * 100.0).min(100.0)
}

/// Human label for stat and ability names: only the first hyphen becomes a space.
pub fn humanize_label(name: &str) -> String {
    name.replacen('-', " ", 1)
}

pub fn sprite_or_placeholder(sprite_url: Option<&str>) -> &str {
    sprite_url.unwrap_or(PLACEHOLDER_SPRITE)
}
