use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_theme;
use anyhow::Result;
use pokedex_runtime::Controller;
use pokedex_store::PreferenceStore;

pub fn handle<P: PreferenceStore>(
    controller: &mut Controller<P>,
    toggle: bool,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let theme = if toggle {
        controller.toggle_theme()
    } else {
        controller.theme()
    };
    renderer.render(&present_theme(theme, toggle))
}
