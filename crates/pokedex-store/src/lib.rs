// Persistent preference store
// Durable key-value entries for the favorites set and the theme flag.

mod db;
pub mod error;
mod memory;
mod prefs;

pub use db::Database;
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use prefs::{FAVORITES_KEY, PreferenceStore, THEME_KEY};

/// Durable string-keyed storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
