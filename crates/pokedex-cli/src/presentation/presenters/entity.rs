use crate::presentation::view_models::{
    CommandResultViewModel, EntityDetailViewModel, StatViewModel,
};
use pokedex_types::{Entity, height_in_metres, sprite_or_placeholder, stat_percent, weight_in_kilograms};

pub fn present_entity_detail(
    entity: &Entity,
    is_favorite: bool,
) -> CommandResultViewModel<EntityDetailViewModel> {
    let content = EntityDetailViewModel {
        id: entity.id.get(),
        name: entity.name.clone(),
        types: entity.types.iter().map(|t| t.name.clone()).collect(),
        height_m: height_in_metres(entity.height),
        weight_kg: weight_in_kilograms(entity.weight),
        stats: entity
            .stats
            .iter()
            .map(|s| StatViewModel {
                name: s.name.clone(),
                base_value: s.base_value,
                percent: stat_percent(s.base_value),
            })
            .collect(),
        abilities: entity.abilities.iter().map(|a| a.name.clone()).collect(),
        sprite_url: sprite_or_placeholder(entity.sprite_url.as_deref()).to_string(),
        is_favorite,
    };

    CommandResultViewModel::new(content)
}
