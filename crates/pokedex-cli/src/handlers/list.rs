use crate::handlers::{load_catalog, type_filter};
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::present_catalog_page;
use crate::types::SortArg;
use anyhow::Result;
use pokedex_runtime::{Event, Session};
use pokedex_store::PreferenceStore;

pub struct ListArgs {
    pub search: Option<String>,
    pub type_name: String,
    pub sort: SortArg,
    pub pages: u32,
}

pub async fn handle<P: PreferenceStore>(
    session: &mut Session<P>,
    args: ListArgs,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    load_catalog(session).await?;

    let controller = session.controller_mut();
    if let Some(term) = args.search {
        controller.apply(Event::SetSearchTerm(term));
    }
    controller.apply(Event::SelectType(type_filter(&args.type_name)));
    controller.apply(Event::SetSortKey(args.sort.into()));
    for _ in 1..args.pages {
        controller.apply(Event::LoadMore);
    }

    renderer.render(&present_catalog_page(controller))
}
