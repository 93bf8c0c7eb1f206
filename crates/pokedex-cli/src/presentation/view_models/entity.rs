use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EntityDetailViewModel {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub height_m: f64,
    pub weight_kg: f64,
    pub stats: Vec<StatViewModel>,
    pub abilities: Vec<String>,
    /// Artwork, default sprite, or the placeholder
    pub sprite_url: String,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct StatViewModel {
    pub name: String,
    pub base_value: u8,
    /// Bar width relative to the maximum base stat
    pub percent: f64,
}
