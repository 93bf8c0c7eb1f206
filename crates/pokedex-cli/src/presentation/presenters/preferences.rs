use crate::presentation::view_models::{
    CommandResultViewModel, FavoriteToggleViewModel, FavoritesViewModel, Guidance,
    GuideViewModel, StatusBadge, ThemeViewModel,
};
use pokedex_types::{EntityId, FavoriteSet, Theme, format_entity_id};

pub fn present_favorite_toggle(
    id: EntityId,
    favorites: &FavoriteSet,
) -> CommandResultViewModel<FavoriteToggleViewModel> {
    let is_favorite = favorites.contains(id);
    let badge = if is_favorite {
        StatusBadge::success(format!("{} added to favorites", format_entity_id(id)))
    } else {
        StatusBadge::info(format!("{} removed from favorites", format_entity_id(id)))
    };

    CommandResultViewModel::new(FavoriteToggleViewModel {
        id: id.get(),
        is_favorite,
        favorites_count: favorites.len(),
    })
    .with_badge(badge)
}

pub fn present_favorites(favorites: &FavoriteSet) -> CommandResultViewModel<FavoritesViewModel> {
    let content = FavoritesViewModel {
        ids: favorites.iter().map(EntityId::get).collect(),
        count: favorites.len(),
    };

    let result = CommandResultViewModel::new(content);
    if favorites.is_empty() {
        result.with_suggestion(Guidance::new("Add one", "pokedex favorite <id>"))
    } else {
        result
    }
}

pub fn present_theme(theme: Theme, changed: bool) -> CommandResultViewModel<ThemeViewModel> {
    CommandResultViewModel::new(ThemeViewModel { theme, changed })
}

pub fn present_guide(favorites: &FavoriteSet, theme: Theme) -> CommandResultViewModel<GuideViewModel> {
    CommandResultViewModel::new(GuideViewModel {
        favorites_count: favorites.len(),
        theme,
    })
    .with_suggestion(Guidance::new("Browse interactively", "pokedex browse"))
    .with_suggestion(Guidance::new("Search by name", "pokedex list --search char"))
    .with_suggestion(Guidance::new("Show one entry", "pokedex show pikachu"))
}
