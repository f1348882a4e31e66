use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for city-explorer
#[derive(Debug, Parser)]
#[command(
    name = "city-explorer",
    version,
    about = "Search, extend and reset a persisted list of cities"
)]
pub struct CliArgs {
    /// JSON file holding the persisted key-value store
    #[arg(short = 's', long = "store", global = true, default_value = "city-explorer.json")]
    pub store: PathBuf,

    /// Log persistence activity (overrides RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print city names, optionally filtered by a case-insensitive substring
    List {
        #[arg(short = 'q', long = "query")]
        query: Option<String>,
    },

    /// Append a city; both fields must be non-blank
    Add {
        name: String,
        description: String,
    },

    /// Restore the four default cities
    Reset,

    /// Print the widget's HTML for the current list
    Render {
        #[arg(short = 'q', long = "query")]
        query: Option<String>,
    },
}
