// crates/city-explorer-core/src/explorer.rs

//! # CityExplorer
//!
//! The component state and its event handlers. Every handler runs to
//! completion synchronously; every successful mutation of the city list is
//! followed by exactly one full write to the injected store.

use crate::error::ExplorerError;
use crate::filter::filter_cities;
use crate::model::{default_cities, next_id, City, CityList};
use crate::persistence::{load_cities, save_cities};
use crate::store::KeyValueStore;

/// Error banner text for an add with a blank field.
pub const MISSING_FIELDS_MESSAGE: &str = "Both city name and description are required.";

/// Result of [`CityExplorer::add_city`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// The city was appended (and persisted).
    Added(City),
    /// A field was blank after trimming; nothing changed but the error banner.
    Rejected,
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }
}

/// A searchable, user-editable city list bound to a key-value store.
#[derive(Debug)]
pub struct CityExplorer<S: KeyValueStore> {
    store: S,
    cities: CityList,
    search_query: String,
    new_city_name: String,
    new_city_description: String,
    error: String,
}

impl<S: KeyValueStore> CityExplorer<S> {
    /// Creates the component, seeding the list from `store` or the defaults.
    ///
    /// Mounting only reads; the store is first written on the first mutation.
    pub fn mount(store: S) -> Self {
        let cities = load_cities(&store);
        Self {
            store,
            cities,
            search_query: String::new(),
            new_city_name: String::new(),
            new_city_description: String::new(),
            error: String::new(),
        }
    }

    /* ----------------------------------------------------------------------
       Input events
    ---------------------------------------------------------------------- */

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_new_city_name(&mut self, name: impl Into<String>) {
        self.new_city_name = name.into();
    }

    pub fn set_new_city_description(&mut self, description: impl Into<String>) {
        self.new_city_description = description.into();
    }

    /* ----------------------------------------------------------------------
       Button events
    ---------------------------------------------------------------------- */

    /// Handles "Add City": validates the form and appends a new city.
    pub fn add_city(&mut self) -> AddOutcome {
        let city = match self.validated_city() {
            Ok(city) => city,
            Err(e) => {
                self.error = e.to_string();
                return AddOutcome::Rejected;
            }
        };

        self.error.clear();
        self.cities.push(city.clone());
        self.new_city_name.clear();
        self.new_city_description.clear();
        self.persist();
        AddOutcome::Added(city)
    }

    /// Handles "Reset": restores the default cities and clears all inputs.
    pub fn reset(&mut self) {
        self.cities = default_cities();
        self.search_query.clear();
        self.new_city_name.clear();
        self.new_city_description.clear();
        self.error.clear();
        self.persist();
    }

    fn validated_city(&self) -> Result<City, ExplorerError> {
        let name = self.new_city_name.trim();
        let description = self.new_city_description.trim();
        if name.is_empty() || description.is_empty() {
            return Err(ExplorerError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }
        Ok(City::new(next_id(&self.cities), name, description))
    }

    // Write failures are not surfaced; the in-memory list stays authoritative.
    fn persist(&mut self) {
        if let Err(e) = save_cities(&mut self.store, &self.cities) {
            log::warn!("failed to persist cities: {e}");
        }
    }

    /* ----------------------------------------------------------------------
       Derived state and accessors
    ---------------------------------------------------------------------- */

    /// Cities matching the current search query, in list order.
    pub fn filtered_cities(&self) -> Vec<&City> {
        filter_cities(&self.cities, &self.search_query)
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn new_city_name(&self) -> &str {
        &self.new_city_name
    }

    pub fn new_city_description(&self) -> &str {
        &self.new_city_description
    }

    /// Current error banner text; empty when no banner is shown.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
