use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_guide;
use anyhow::Result;
use pokedex_runtime::Controller;
use pokedex_store::PreferenceStore;

pub fn handle<P: PreferenceStore>(
    controller: &Controller<P>,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    renderer.render(&present_guide(controller.favorites(), controller.theme()))
}
