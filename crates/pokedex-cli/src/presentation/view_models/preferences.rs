use pokedex_types::Theme;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FavoriteToggleViewModel {
    pub id: u32,
    pub is_favorite: bool,
    pub favorites_count: usize,
}

#[derive(Debug, Serialize)]
pub struct FavoritesViewModel {
    pub ids: Vec<u32>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ThemeViewModel {
    pub theme: Theme,
    pub changed: bool,
}

#[derive(Debug, Serialize)]
pub struct GuideViewModel {
    pub favorites_count: usize,
    pub theme: Theme,
}
