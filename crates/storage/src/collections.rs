//! CollectionStore - typed JSON collections over a KeyValueStore

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{Dataset, Result, Theme};
use tracing::{debug, warn};

use crate::store::{keys, KeyValueStore};

/// Serializes whole collections into their storage slots
#[derive(Debug, Clone, Default)]
pub struct CollectionStore<S> {
    store: S,
}

impl<S: KeyValueStore> CollectionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Deserialize the collection under `key`; `None` if the slot is empty
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.store.get(key)? {
            Some(raw) => {
                let value: Option<T> = serde_json::from_str(&raw)?;
                Ok(value)
            }
            None => Ok(None),
        }
    }

    /// Like `load`, falling back to an empty collection
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        Ok(self.load(key)?.unwrap_or_default())
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    /// Store an already-serialized document as-is
    pub fn save_raw(&self, key: &str, raw: &str) -> Result<()> {
        self.store.set(key, raw)
    }

    /// Rewrite all four collections, one independent write per slot
    ///
    /// Stops at the first failing slot. Slots written before it stay written.
    pub fn save_dataset(&self, dataset: &Dataset) -> Result<()> {
        self.save(keys::ALUMNI, &dataset.alumni)?;
        self.save(keys::EVENTS, &dataset.events)?;
        self.save(keys::MENTORSHIP_REQUESTS, &dataset.mentorship_requests)?;
        self.save(keys::DONATIONS, &dataset.donations)?;
        debug!(
            alumni = dataset.alumni.len(),
            events = dataset.events.len(),
            requests = dataset.mentorship_requests.len(),
            donations = dataset.donations.len(),
            "dataset saved"
        );
        Ok(())
    }

    /// Stored theme, `light` when absent or unrecognized
    pub fn load_theme(&self) -> Result<Theme> {
        match self.store.get(keys::THEME)? {
            Some(raw) => Ok(raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "unknown theme in storage, using light");
                Theme::Light
            })),
            None => Ok(Theme::Light),
        }
    }

    pub fn save_theme(&self, theme: Theme) -> Result<()> {
        self.store.set(keys::THEME, theme.as_str())
    }
}
