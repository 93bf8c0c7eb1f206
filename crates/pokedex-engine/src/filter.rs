use pokedex_types::{ALL_TYPES, Entity};

/// Case-insensitive substring match on the name. An empty term matches everything.
pub fn matches_search(entity: &Entity, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    entity
        .name
        .to_lowercase()
        .contains(&search_term.to_lowercase())
}

pub fn matches_type(entity: &Entity, selected_type: &str) -> bool {
    selected_type == ALL_TYPES || entity.has_type(selected_type)
}

/// Stage 1: keep entities satisfying both predicates, in catalog order.
pub fn filter_entities<'a>(
    entities: &'a [Entity],
    search_term: &str,
    selected_type: &str,
) -> Vec<&'a Entity> {
    entities
        .iter()
        .filter(|e| matches_search(e, search_term) && matches_type(e, selected_type))
        .collect()
}
