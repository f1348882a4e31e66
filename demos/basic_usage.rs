//! Basic usage example for city-explorer
//!
//! Walks the widget through a session against an in-memory store, then
//! mounts a second instance on the same store to show persistence.

use city_explorer::prelude::*;
use city_explorer::{render_html, STORAGE_KEY};

fn print_filtered<S: KeyValueStore>(explorer: &CityExplorer<S>) {
    let hits = explorer.filtered_cities();
    if hits.is_empty() {
        println!("  No cities found");
    }
    for city in hits {
        println!("  {} (id {})", city.name(), city.id());
    }
}

fn main() -> Result<()> {
    println!("=== City Explorer Basic Usage ===\n");

    let mut explorer = CityExplorer::mount(MemoryStore::new());
    println!("--- Initial cities ---");
    print_filtered(&explorer);

    println!("\n--- Adding Negombo ---");
    explorer.set_new_city_name("Negombo");
    explorer.set_new_city_description("Coastal city");
    match explorer.add_city() {
        AddOutcome::Added(city) => println!("  ✓ added {} with id {}", city.name(), city.id()),
        AddOutcome::Rejected => println!("  ✗ {}", explorer.error()),
    }

    println!("\n--- Adding a blank city ---");
    explorer.set_new_city_name("   ");
    if !explorer.add_city().is_added() {
        println!("  ✗ {}", explorer.error());
    }

    println!("\n--- Search \"ne\" ---");
    explorer.set_search_query("ne");
    print_filtered(&explorer);

    println!("\n--- Rendered widget ---");
    println!("{}", render_html(&ExplorerView::from_explorer(&explorer)));

    println!("\n--- Stored value ---");
    let store = explorer.into_store();
    println!("  {}", store.get(STORAGE_KEY).unwrap_or_default());

    println!("\n--- Fresh mount, then reset ---");
    let mut explorer = CityExplorer::mount(store);
    println!("  {} cities after reload", explorer.cities().len());
    explorer.reset();
    print_filtered(&explorer);

    Ok(())
}
