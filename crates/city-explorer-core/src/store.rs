// crates/city-explorer-core/src/store.rs

//! # Key-Value Stores
//!
//! The durable store is an injected collaborator, not a global. The browser
//! binding implements [`KeyValueStore`] over `window.localStorage`; native
//! front-ends use [`FileStore`]; tests use [`MemoryStore`].

use crate::error::Result;
use std::collections::HashMap;

/// Synchronous string key-value storage (the `localStorage` contract).
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrites the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-process store. Nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a single entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(feature = "fs")]
pub use file::FileStore;

#[cfg(feature = "fs")]
mod file {
    use super::KeyValueStore;
    use crate::error::Result;
    use std::collections::BTreeMap;
    use std::path::{Path, PathBuf};

    /// A JSON object file holding all keys, e.g. `{"cities": "[...]"}`.
    ///
    /// Every `set` rewrites the whole file. A missing or unparsable file reads
    /// as an empty store.
    #[derive(Clone, Debug)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_entries(&self) -> BTreeMap<String, String> {
            let Ok(text) = std::fs::read_to_string(&self.path) else {
                return BTreeMap::new();
            };
            match serde_json::from_str(&text) {
                Ok(entries) => entries,
                Err(e) => {
                    log::warn!("ignoring unreadable store {}: {e}", self.path.display());
                    BTreeMap::new()
                }
            }
        }
    }

    impl KeyValueStore for FileStore {
        fn get(&self, key: &str) -> Option<String> {
            self.read_entries().remove(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            let mut entries = self.read_entries();
            entries.insert(key.to_string(), value.to_string());
            let text = serde_json::to_string_pretty(&entries)?;
            std::fs::write(&self.path, text)?;
            Ok(())
        }
    }
}
