// crates/city-explorer-core/src/lib.rs

//! # city-explorer-core
//!
//! The whole City Explorer widget, minus the browser glue:
//!
//! - [`model`]: the [`City`] record and the four built-in default cities
//! - [`filter`]: case-insensitive substring filtering of the list
//! - [`store`]: the injected [`KeyValueStore`] collaborator and its adapters
//! - [`persistence`]: fail-soft loading and full-overwrite saving under `"cities"`
//! - [`explorer`]: the [`CityExplorer`] component (state + mutation handlers)
//! - [`view`]: the view model and HTML renderer for the presentation layer
//!
//! ```rust
//! use city_explorer_core::prelude::*;
//!
//! let mut explorer = CityExplorer::mount(MemoryStore::new());
//! assert_eq!(explorer.cities().len(), 4);
//!
//! explorer.set_new_city_name("Negombo");
//! explorer.set_new_city_description("Coastal city");
//! assert!(explorer.add_city().is_added());
//!
//! explorer.set_search_query("ne");
//! let names: Vec<_> = explorer.filtered_cities().iter().map(|c| c.name()).collect();
//! assert_eq!(names, ["Negombo"]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod explorer;
pub mod filter;
pub mod model;
pub mod persistence;
pub mod store;
pub mod view;

// Re-exports
pub use crate::error::{ExplorerError, Result};
pub use crate::explorer::{AddOutcome, CityExplorer, MISSING_FIELDS_MESSAGE};
pub use crate::filter::{filter_cities, NameMatch};
pub use crate::model::{default_cities, next_id, City, CityList};
pub use crate::persistence::{load_cities, save_cities, STORAGE_KEY};
#[cfg(feature = "fs")]
pub use crate::store::FileStore;
pub use crate::store::{KeyValueStore, MemoryStore};
pub use crate::view::{render_html, ExplorerView, ListItem};

pub mod prelude {
    pub use crate::error::{ExplorerError, Result};
    pub use crate::explorer::{AddOutcome, CityExplorer};
    pub use crate::filter::NameMatch;
    pub use crate::model::City;
    #[cfg(feature = "fs")]
    pub use crate::store::FileStore;
    pub use crate::store::{KeyValueStore, MemoryStore};
    pub use crate::view::ExplorerView;
}
