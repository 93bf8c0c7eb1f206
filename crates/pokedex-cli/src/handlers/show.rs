use crate::handlers::load_catalog;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_entity_detail;
use anyhow::{Result, bail};
use pokedex_runtime::{Controller, Session};
use pokedex_store::PreferenceStore;
use pokedex_types::EntityId;

pub async fn handle<P: PreferenceStore>(
    session: &mut Session<P>,
    target: &str,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    load_catalog(session).await?;

    let controller = session.controller_mut();
    if !open_target(controller, target) {
        bail!("No Pokémon matches '{}'", target);
    }
    render_selection(controller, renderer)
}

/// Select by id (`25`, `#025`) or by case-insensitive name. Returns whether anything is selected.
pub fn open_target<P: PreferenceStore>(controller: &mut Controller<P>, target: &str) -> bool {
    let id = target.parse::<EntityId>().ok().or_else(|| {
        controller
            .catalog()
            .find_by_name(target.trim())
            .map(|e| e.id)
    });

    match id {
        Some(id) => {
            controller.select_entity(id);
            controller.selection().is_some_and(|e| e.id == id)
        }
        None => false,
    }
}

pub fn render_selection<P: PreferenceStore>(
    controller: &Controller<P>,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    if let Some(entity) = controller.selection() {
        renderer.render(&present_entity_detail(
            entity,
            controller.is_favorite(entity.id),
        ))?;
    }
    Ok(())
}
