use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_type_list;
use anyhow::Result;
use pokedex_runtime::{Controller, Event};
use pokedex_store::PreferenceStore;

pub fn handle<P: PreferenceStore>(
    controller: &mut Controller<P>,
    more: bool,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    if more {
        controller.apply(Event::ToggleMoreTypes);
    }
    renderer.render(&present_type_list(controller))
}
