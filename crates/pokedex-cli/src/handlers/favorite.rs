use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_favorite_toggle;
use anyhow::Result;
use pokedex_runtime::Controller;
use pokedex_store::PreferenceStore;
use pokedex_types::EntityId;

/// Favorites are keyed by id alone, so no catalog fetch is needed.
pub fn handle<P: PreferenceStore>(
    controller: &mut Controller<P>,
    id: EntityId,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    controller.toggle_favorite(id);
    renderer.render(&present_favorite_toggle(id, controller.favorites()))
}
