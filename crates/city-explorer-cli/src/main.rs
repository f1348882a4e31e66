//! city-explorer — command-line front-end for city-explorer-core
//!
//! Usage examples
//! --------------
//!
//! - List all cities, or those matching a substring
//!   $ city-explorer list
//!   $ city-explorer list --query ka
//!
//! - Add a city (name and description must both be non-blank)
//!   $ city-explorer add Negombo "Coastal city"
//!
//! - Restore the four default cities
//!   $ city-explorer reset
//!
//! The list lives in `city-explorer.json` in the working directory unless
//! `--store <path>` says otherwise.
use city_explorer_cli::args::CliArgs;
use city_explorer_cli::{init_logging, run};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);
    run(args, &mut std::io::stdout().lock())
}
