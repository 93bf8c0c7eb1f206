use crate::handlers::show::{open_target, render_selection};
use crate::handlers::type_filter;
use crate::presentation::ConsoleRenderer;
use crate::presentation::presenters::{
    present_catalog_page, present_favorite_toggle, present_favorites, present_scroll,
    present_theme, present_type_list,
};
use anyhow::Result;
use pokedex_runtime::{Event, Session};
use pokedex_store::PreferenceStore;
use pokedex_types::{EntityId, SortKey};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
search <text>     filter by name (case-insensitive)
clear             clear the search
type <name|all>   filter by type
more-types        reveal the secondary types
sort <id|name|hp|attack>
more              load the next page
list              show the current page
open <id|name>    show one entry
close             back to the list
random            show a random entry
fav <id>          add or remove a favorite
favorites         list favorite ids
theme             switch dark/light
scroll <offset>   report a viewport offset
top               scroll back to top
retry             fetch the catalog again
quit";

/// One parsed line of the interactive session.
#[derive(Debug, Clone, PartialEq)]
pub enum BrowseCommand {
    Dispatch(Event),
    /// Select by id or name; names need the catalog to resolve
    Open(String),
    List,
    Favorites,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// The search argument is taken verbatim after the first space, so
/// `search  mr` searches for `" mr"`.
pub fn parse_command(line: &str) -> Result<Option<BrowseCommand>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let line = line.trim_start();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let arg = rest.trim();

    let command = match word {
        "search" | "s" => BrowseCommand::Dispatch(Event::SetSearchTerm(rest.to_string())),
        "clear" => BrowseCommand::Dispatch(Event::ClearSearch),
        "type" | "t" => {
            if arg.is_empty() {
                return Err("usage: type <name|all>".to_string());
            }
            BrowseCommand::Dispatch(Event::SelectType(type_filter(arg)))
        }
        "more-types" => BrowseCommand::Dispatch(Event::ToggleMoreTypes),
        "sort" => {
            let key = arg.parse::<SortKey>()?;
            BrowseCommand::Dispatch(Event::SetSortKey(key))
        }
        "more" | "m" => BrowseCommand::Dispatch(Event::LoadMore),
        "list" | "ls" => BrowseCommand::List,
        "open" | "o" => {
            if arg.is_empty() {
                return Err("usage: open <id|name>".to_string());
            }
            BrowseCommand::Open(arg.to_string())
        }
        "close" => BrowseCommand::Dispatch(Event::DismissDetail),
        "random" | "r" => BrowseCommand::Dispatch(Event::RequestRandomEntity),
        "fav" | "f" => {
            let id = arg.parse::<EntityId>()?;
            BrowseCommand::Dispatch(Event::ToggleFavorite(id))
        }
        "favorites" => BrowseCommand::Favorites,
        "theme" => BrowseCommand::Dispatch(Event::ToggleTheme),
        "scroll" => {
            let y = arg
                .parse::<f64>()
                .ok()
                .filter(|y| y.is_finite())
                .ok_or_else(|| format!("not a scroll offset: {}", arg))?;
            BrowseCommand::Dispatch(Event::ScrollPositionChanged(y))
        }
        "top" => BrowseCommand::Dispatch(Event::ScrollToTop),
        "retry" => BrowseCommand::Dispatch(Event::RetryFetch),
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" | "q" => BrowseCommand::Quit,
        other => return Err(format!("unknown command '{}' (try 'help')", other)),
    };

    Ok(Some(command))
}

pub async fn handle<P: PreferenceStore>(
    session: &mut Session<P>,
    renderer: &ConsoleRenderer,
    interactive: bool,
) -> Result<()> {
    session.refresh().await;
    renderer.render(&present_catalog_page(session.controller_mut()))?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                eprintln!("{}", message);
                continue;
            }
        };

        if command == BrowseCommand::Quit {
            break;
        }
        respond(session, command, renderer).await?;
    }

    Ok(())
}

async fn respond<P: PreferenceStore>(
    session: &mut Session<P>,
    command: BrowseCommand,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    match command {
        BrowseCommand::Help => {
            println!("{}", HELP);
            Ok(())
        }
        BrowseCommand::Quit => Ok(()),
        BrowseCommand::List => renderer.render(&present_catalog_page(session.controller_mut())),
        BrowseCommand::Favorites => {
            renderer.render(&present_favorites(session.controller().favorites()))
        }
        BrowseCommand::Open(target) => {
            let controller = session.controller_mut();
            if open_target(controller, &target) {
                render_selection(controller, renderer)
            } else {
                eprintln!("No Pokémon matches '{}'", target);
                Ok(())
            }
        }
        BrowseCommand::Dispatch(event) => {
            let echo = event.clone();
            session.dispatch(event).await;
            render_after(session, echo, renderer)
        }
    }
}

fn render_after<P: PreferenceStore>(
    session: &mut Session<P>,
    event: Event,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let controller = session.controller_mut();
    match event {
        Event::RequestRandomEntity => {
            if controller.selection().is_none() {
                eprintln!("The catalog is empty");
            }
            render_selection(controller, renderer)
        }
        Event::SelectEntity(_) => render_selection(controller, renderer),
        Event::ToggleFavorite(id) => {
            renderer.render(&present_favorite_toggle(id, controller.favorites()))
        }
        Event::ToggleTheme => renderer.render(&present_theme(controller.theme(), true)),
        Event::ToggleMoreTypes => renderer.render(&present_type_list(controller)),
        Event::ScrollPositionChanged(_) | Event::ScrollToTop => {
            renderer.render(&present_scroll(controller))
        }
        Event::SetSearchTerm(_)
        | Event::ClearSearch
        | Event::SelectType(_)
        | Event::SetSortKey(_)
        | Event::LoadMore
        | Event::DismissDetail
        | Event::RetryFetch => renderer.render(&present_catalog_page(controller)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(line: &str) -> BrowseCommand {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("   \n").unwrap(), None);
    }

    #[test]
    fn test_search_keeps_argument_verbatim() {
        assert_eq!(
            parsed("search Char"),
            BrowseCommand::Dispatch(Event::SetSearchTerm("Char".to_string()))
        );
        assert_eq!(
            parsed("search  mr"),
            BrowseCommand::Dispatch(Event::SetSearchTerm(" mr".to_string()))
        );
        assert_eq!(
            parsed("search"),
            BrowseCommand::Dispatch(Event::SetSearchTerm(String::new()))
        );
    }

    #[test]
    fn test_every_event_has_a_command() {
        let id = EntityId::new(25).unwrap();
        let cases = [
            ("clear", Event::ClearSearch),
            ("type Fire", Event::SelectType("fire".to_string())),
            ("more-types", Event::ToggleMoreTypes),
            ("sort hp", Event::SetSortKey(SortKey::ByHp)),
            ("random", Event::RequestRandomEntity),
            ("close", Event::DismissDetail),
            ("fav #025", Event::ToggleFavorite(id)),
            ("theme", Event::ToggleTheme),
            ("more", Event::LoadMore),
            ("scroll 640", Event::ScrollPositionChanged(640.0)),
            ("top", Event::ScrollToTop),
            ("retry", Event::RetryFetch),
        ];

        for (line, event) in cases {
            assert_eq!(parsed(line), BrowseCommand::Dispatch(event), "{}", line);
        }
    }

    #[test]
    fn test_open_takes_id_or_name() {
        assert_eq!(parsed("open 25"), BrowseCommand::Open("25".to_string()));
        assert_eq!(
            parsed("o  pikachu "),
            BrowseCommand::Open("pikachu".to_string())
        );
    }

    #[test]
    fn test_session_commands() {
        assert_eq!(parsed("ls"), BrowseCommand::List);
        assert_eq!(parsed("favorites"), BrowseCommand::Favorites);
        assert_eq!(parsed("?"), BrowseCommand::Help);
        assert_eq!(parsed("quit"), BrowseCommand::Quit);
    }

    #[test]
    fn test_invalid_arguments_are_rejected() {
        assert!(parse_command("sort speed").is_err());
        assert!(parse_command("fav 0").is_err());
        assert!(parse_command("fav pikachu").is_err());
        assert!(parse_command("scroll down").is_err());
        assert!(parse_command("type").is_err());
        assert!(parse_command("jump").is_err());
    }
}
