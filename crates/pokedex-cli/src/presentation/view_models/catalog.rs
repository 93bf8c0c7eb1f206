use pokedex_runtime::FetchStatus;
use pokedex_types::{SortKey, Theme};
use serde::Serialize;

/// One page of the derived view plus the counters shown around it.
#[derive(Debug, Serialize)]
pub struct CatalogPageViewModel {
    pub status: FetchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub search_term: String,
    pub selected_type: String,
    pub sort_key: SortKey,
    pub page_size: usize,
    pub filtered_count: usize,
    pub has_more: bool,
    pub favorites_count: usize,
    pub theme: Theme,
    /// Entities the last fetch cycle could not resolve
    pub dropped: usize,
    pub entries: Vec<EntitySummaryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct EntitySummaryViewModel {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub hp: u8,
    pub attack: u8,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct TypeListViewModel {
    pub selected_type: String,
    pub show_more: bool,
    pub types: Vec<TypeChipViewModel>,
}

#[derive(Debug, Serialize)]
pub struct TypeChipViewModel {
    pub name: String,
    pub glyph: String,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct ScrollViewModel {
    pub scroll_y: f64,
    /// Whether the "back to top" affordance is offered
    pub past_threshold: bool,
}
