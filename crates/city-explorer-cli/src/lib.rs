//! city-explorer-cli
//! =================
//!
//! Command-line front-end for `city-explorer-core`. It drives the same
//! `CityExplorer` component as the browser widget, persisting to a JSON file
//! instead of `localStorage`.
//!
//! ```text
//! city-explorer list
//! city-explorer list --query ka
//! city-explorer add Negombo "Coastal city"
//! city-explorer reset
//! city-explorer --store ~/cities.json render
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;

use crate::args::{CliArgs, Commands};
use city_explorer_core::{
    render_html, AddOutcome, CityExplorer, ExplorerView, FileStore, KeyValueStore, ListItem,
};
use std::io::Write;

/// Sets up `env_logger`; `--verbose` forces debug output for this workspace.
pub fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_module("city_explorer_core", log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

/// Executes one command against the store named in `args`.
pub fn run(args: CliArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let mut explorer = CityExplorer::mount(FileStore::new(&args.store));

    match args.command {
        Commands::List { query } => {
            explorer.set_search_query(query.unwrap_or_default());
            print_list(&explorer, out)?;
        }

        Commands::Add { name, description } => {
            explorer.set_new_city_name(name);
            explorer.set_new_city_description(description);
            match explorer.add_city() {
                AddOutcome::Added(city) => writeln!(out, "Added {} (id {})", city.name, city.id)?,
                AddOutcome::Rejected => anyhow::bail!("{}", explorer.error()),
            }
        }

        Commands::Reset => {
            explorer.reset();
            writeln!(out, "Restored {} default cities", explorer.cities().len())?;
        }

        Commands::Render { query } => {
            explorer.set_search_query(query.unwrap_or_default());
            writeln!(out, "{}", render_html(&ExplorerView::from_explorer(&explorer)))?;
        }
    }

    Ok(())
}

fn print_list<S: KeyValueStore>(
    explorer: &CityExplorer<S>,
    out: &mut impl Write,
) -> std::io::Result<()> {
    for item in ExplorerView::from_explorer(explorer).items {
        match item {
            ListItem::City { name, .. } => writeln!(out, "{name}")?,
            ListItem::Placeholder { text } => writeln!(out, "{text}")?,
        }
    }
    Ok(())
}
