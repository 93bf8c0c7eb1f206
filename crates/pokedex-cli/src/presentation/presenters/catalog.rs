use crate::presentation::view_models::{
    CatalogPageViewModel, CommandResultViewModel, EntitySummaryViewModel, Guidance,
    ScrollViewModel, StatusBadge, TypeChipViewModel, TypeListViewModel,
};
use pokedex_runtime::{Controller, FetchStatus};
use pokedex_store::PreferenceStore;
use pokedex_types::{Entity, FavoriteSet};

pub fn present_catalog_page<P: PreferenceStore>(
    controller: &mut Controller<P>,
) -> CommandResultViewModel<CatalogPageViewModel> {
    let view = controller.view().clone();
    let catalog = controller.catalog();
    let params = controller.params();
    let favorites = controller.favorites();

    let content = CatalogPageViewModel {
        status: catalog.status(),
        error_message: catalog.error_message().map(str::to_string),
        search_term: params.search_term.clone(),
        selected_type: params.selected_type.clone(),
        sort_key: params.sort_key,
        page_size: params.page_size,
        filtered_count: view.filtered_count,
        has_more: view.has_more,
        favorites_count: favorites.len(),
        theme: controller.theme(),
        dropped: catalog.dropped(),
        entries: view
            .entities
            .iter()
            .map(|e| summarize(e, favorites))
            .collect(),
    };

    let mut result = CommandResultViewModel::new(content);

    if catalog.status() == FetchStatus::Error {
        let message = catalog.error_message().unwrap_or("Fetch failed");
        result = result
            .with_badge(StatusBadge::error(message))
            .with_suggestion(Guidance::new("Try again", "retry"));
    } else if view.is_empty() && !catalog.is_empty() {
        result = result
            .with_badge(StatusBadge::warning("No Pokémon match the current filters"))
            .with_suggestion(Guidance::new("Clear the search", "clear"));
    } else if view.has_more {
        result = result.with_suggestion(Guidance::new("Show more", "more"));
    }

    result
}

pub fn summarize(entity: &Entity, favorites: &FavoriteSet) -> EntitySummaryViewModel {
    EntitySummaryViewModel {
        id: entity.id.get(),
        name: entity.name.clone(),
        types: entity.types.iter().map(|t| t.name.clone()).collect(),
        hp: entity.hp(),
        attack: entity.attack(),
        is_favorite: favorites.contains(entity.id),
    }
}

pub fn present_type_list<P: PreferenceStore>(
    controller: &Controller<P>,
) -> CommandResultViewModel<TypeListViewModel> {
    let selected = &controller.params().selected_type;
    let types = controller
        .type_filters()
        .into_iter()
        .map(|chip| TypeChipViewModel {
            name: chip.name.to_string(),
            glyph: chip.glyph.to_string(),
            selected: chip.name == selected.as_str(),
        })
        .collect();

    let content = TypeListViewModel {
        selected_type: selected.clone(),
        show_more: controller.show_more_types(),
        types,
    };

    let result = CommandResultViewModel::new(content);
    if controller.show_more_types() {
        result
    } else {
        result.with_suggestion(Guidance::new("More types", "pokedex types --more"))
    }
}

pub fn present_scroll<P: PreferenceStore>(
    controller: &Controller<P>,
) -> CommandResultViewModel<ScrollViewModel> {
    let content = ScrollViewModel {
        scroll_y: controller.scroll_y(),
        past_threshold: controller.is_scrolled_past_threshold(),
    };

    let result = CommandResultViewModel::new(content);
    if controller.is_scrolled_past_threshold() {
        result.with_suggestion(Guidance::new("Back to top", "top"))
    } else {
        result
    }
}
