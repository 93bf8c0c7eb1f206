use super::args::{Cli, Commands};
use super::handlers;
use crate::handlers::list::ListArgs;
use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use pokedex_runtime::{Config, Controller, Session, resolve_data_dir};
use pokedex_store::Database;
use std::future::Future;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let stdout_is_terminal = std::io::stdout().is_terminal();
    let renderer = ConsoleRenderer::new(
        cli.format,
        cli.format == OutputFormat::Plain && stdout_is_terminal,
    );
    tracing::debug!(data_dir = %data_dir.display(), format = %cli.format, "starting");

    let Some(command) = cli.command else {
        let controller = open_controller(&data_dir)?;
        return handlers::guide::handle(&controller, &renderer);
    };

    match command {
        Commands::List {
            search,
            type_name,
            sort,
            pages,
        } => {
            let mut session = open_session(&data_dir)?;
            let args = ListArgs {
                search,
                type_name,
                sort,
                pages,
            };
            block_on(handlers::list::handle(&mut session, args, &renderer))
        }

        Commands::Show { target } => {
            let mut session = open_session(&data_dir)?;
            block_on(handlers::show::handle(&mut session, &target, &renderer))
        }

        Commands::Random => {
            let mut session = open_session(&data_dir)?;
            block_on(handlers::random::handle(&mut session, &renderer))
        }

        Commands::Browse => {
            let mut session = open_session(&data_dir)?;
            let interactive = cli.format == OutputFormat::Plain
                && std::io::stdin().is_terminal()
                && stdout_is_terminal;
            block_on(handlers::browse::handle(&mut session, &renderer, interactive))
        }

        Commands::Favorite { id } => {
            let mut controller = open_controller(&data_dir)?;
            handlers::favorite::handle(&mut controller, id, &renderer)
        }

        Commands::Favorites => {
            let controller = open_controller(&data_dir)?;
            handlers::favorites::handle(&controller, &renderer)
        }

        Commands::Theme { toggle } => {
            let mut controller = open_controller(&data_dir)?;
            handlers::theme::handle(&mut controller, toggle, &renderer)
        }

        Commands::Types { more } => {
            let mut controller = open_controller(&data_dir)?;
            handlers::types::handle(&mut controller, more, &renderer)
        }
    }
}

/// Preferences only; commands that never touch the network use this.
fn open_controller(data_dir: &Path) -> Result<Controller<Database>> {
    let db = Database::open(&Config::database_path_in(data_dir))?;
    Ok(Controller::new(db))
}

fn open_session(data_dir: &Path) -> Result<Session<Database>> {
    let config = Config::load_from(&Config::path_in(data_dir))?;
    tracing::debug!(api = %config.api_base_url, limit = config.page_limit, "loaded config");
    Ok(Session::open(&config, data_dir)?)
}

fn block_on<F: Future<Output = Result<()>>>(future: F) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(future)
}
