// pokedex CLI
// Thin shell over pokedex-runtime: each subcommand drives the controller with
// events and renders the resulting state through the presentation layer.

mod args;
mod commands;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
pub use handlers::browse::{BrowseCommand, parse_command};
