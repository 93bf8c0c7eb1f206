use crate::filter::filter_entities;
use crate::params::ViewParameters;
use crate::sort::sort_entities;
use pokedex_types::Entity;
use serde::Serialize;

/// The ordered subset eligible for display plus the counters shown around it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DerivedView {
    pub entities: Vec<Entity>,
    /// Size of the filtered (pre-pagination) set
    pub filtered_count: usize,
    /// More entities exist beyond the current page size
    pub has_more: bool,
}

impl DerivedView {
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn is_single_result(&self) -> bool {
        self.entities.len() == 1
    }
}

/// Filter, stable-sort, then take the first `page_size` entities.
pub fn derive(entities: &[Entity], params: &ViewParameters) -> Vec<Entity> {
    derive_view(entities, params).entities
}

pub fn derive_view(entities: &[Entity], params: &ViewParameters) -> DerivedView {
    let mut filtered = filter_entities(entities, &params.search_term, &params.selected_type);
    sort_entities(&mut filtered, params.sort_key);

    let filtered_count = filtered.len();
    let page: Vec<Entity> = filtered
        .into_iter()
        .take(params.page_size)
        .cloned()
        .collect();

    DerivedView {
        entities: page,
        filtered_count,
        has_more: params.page_size < filtered_count,
    }
}
