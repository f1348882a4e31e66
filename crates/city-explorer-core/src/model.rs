// crates/city-explorer-core/src/model.rs
use serde::{Deserialize, Serialize};

/// A city entry as shown in the list and stored under the `"cities"` key.
///
/// The serialized shape is exactly `{ "id": number, "name": string, "description": string }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: u64,
    pub name: String,
    pub description: String,
}

/// Ordered list of cities. Insertion order is display order.
pub type CityList = Vec<City>;

impl City {
    pub fn new(id: u64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

const DEFAULT_CITIES: [(u64, &str, &str); 4] = [
    (1, "Colombo", "The bustling commercial capital of Sri Lanka."),
    (2, "Kandy", "Home to the sacred Temple of the Tooth and lush hills."),
    (3, "Galle", "A historic coastal city with a famous Dutch Fort."),
    (4, "Jaffna", "A vibrant cultural hub in the northern part of the island."),
];

/// The four built-in cities used on first mount and on reset.
pub fn default_cities() -> CityList {
    DEFAULT_CITIES
        .iter()
        .map(|&(id, name, description)| City::new(id, name, description))
        .collect()
}

/// Identifier for the next appended city: `max(ids) + 1`, or `1` for an empty list.
///
/// Not a stable counter. Ids freed by external edits to storage may be reused.
pub fn next_id(cities: &[City]) -> u64 {
    cities
        .iter()
        .map(|c| c.id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}
