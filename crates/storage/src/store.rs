//! KeyValueStore - the persistence port
//!
//! A string-to-string store with the semantics of browser local storage:
//! every `set` replaces the whole value under a key.

use std::sync::Arc;

use shared::Result;

/// Storage slot names
pub mod keys {
    pub const ALUMNI: &str = "alumni";
    pub const EVENTS: &str = "events";
    pub const MENTORSHIP_REQUESTS: &str = "mentorshipRequests";
    pub const DONATIONS: &str = "donations";
    pub const THEME: &str = "theme";

    /// The four collection slots, in save order
    pub const COLLECTIONS: [&str; 4] = [ALUMNI, EVENTS, MENTORSHIP_REQUESTS, DONATIONS];
}

/// Durable key-value storage
///
/// Methods take `&self`; implementations handle their own interior
/// mutability so a store can be shared with the controller that owns it.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;

    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
