use crate::types::{LogLevel, OutputFormat, SortArg};
use clap::{Parser, Subcommand};
use pokedex_types::EntityId;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse, filter and favorite creatures from the remote catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Where config.toml and the preferences database live [default: $POKEDEX_PATH, then the platform data dir]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the catalog and print one page of the filtered, sorted view
    List {
        /// Case-insensitive name substring
        #[arg(long, short)]
        search: Option<String>,

        /// Type filter, or "all"
        #[arg(long = "type", short = 't', default_value = "all")]
        type_name: String,

        #[arg(long, default_value = "id")]
        sort: SortArg,

        /// Number of pages to load (20 entities each)
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        pages: u32,
    },

    /// Show one entity by id (`25`, `#025`) or name
    Show { target: String },

    /// Show a uniformly random entity of the catalog
    Random,

    /// Add or remove a favorite
    Favorite { id: EntityId },

    /// List favorite ids
    Favorites,

    /// Print the theme, or flip it with --toggle
    Theme {
        #[arg(long)]
        toggle: bool,
    },

    /// List the type filters
    Types {
        /// Include the secondary types
        #[arg(long)]
        more: bool,
    },

    /// Interactive session: one line per action, `help` for the list
    Browse,
}
