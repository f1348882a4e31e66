// crates/city-explorer-core/src/persistence.rs

//! # Persistence
//!
//! Reads and writes the whole city list as one JSON array under
//! [`STORAGE_KEY`]. Loading never fails: anything that is not a non-empty
//! array of cities falls back to [`default_cities`].

use crate::error::Result;
use crate::model::{default_cities, City, CityList};
use crate::store::KeyValueStore;

/// Key the city list is stored under.
pub const STORAGE_KEY: &str = "cities";

/// Parses a stored value into a city list.
pub fn decode_cities(raw: &str) -> Result<CityList> {
    Ok(serde_json::from_str(raw)?)
}

/// Serializes the full list to the stored JSON array form.
pub fn encode_cities(cities: &[City]) -> Result<String> {
    Ok(serde_json::to_string(cities)?)
}

/// Loads the initial list for a fresh mount.
///
/// Absent, malformed and empty values all yield the four defaults. Malformed
/// data is logged, never surfaced.
pub fn load_cities<S: KeyValueStore + ?Sized>(store: &S) -> CityList {
    let Some(raw) = store.get(STORAGE_KEY) else {
        log::debug!("no stored cities, using defaults");
        return default_cities();
    };

    match decode_cities(&raw) {
        Ok(cities) if !cities.is_empty() => {
            log::debug!("loaded {} cities from storage", cities.len());
            cities
        }
        Ok(_) => {
            log::debug!("stored city list is empty, using defaults");
            default_cities()
        }
        Err(e) => {
            log::warn!("stored cities are malformed ({e}), using defaults");
            default_cities()
        }
    }
}

/// Overwrites the stored list with `cities`.
pub fn save_cities<S: KeyValueStore + ?Sized>(store: &mut S, cities: &[City]) -> Result<()> {
    let raw = encode_cities(cities)?;
    store.set(STORAGE_KEY, &raw)?;
    log::debug!("persisted {} cities", cities.len());
    Ok(())
}
