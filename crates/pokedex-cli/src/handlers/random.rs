use crate::handlers::load_catalog;
use crate::handlers::show::render_selection;
use crate::presentation::ConsoleRenderer;
use anyhow::{Result, bail};
use pokedex_runtime::{Event, Session};
use pokedex_store::PreferenceStore;

pub async fn handle<P: PreferenceStore>(
    session: &mut Session<P>,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    load_catalog(session).await?;

    let controller = session.controller_mut();
    controller.apply(Event::RequestRandomEntity);
    if controller.selection().is_none() {
        bail!("The catalog is empty");
    }
    render_selection(controller, renderer)
}
