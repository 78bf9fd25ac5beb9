//! # Alumni Network Storage
//!
//! The durable key-value layer behind every collection.
//!
//! ```text
//! Port                  │  Adapters
//! ──────────────────────┼────────────────────────
//! trait KeyValueStore   │  InMemoryStore
//!   fn get()            │  FileStore
//!   fn set()            │
//! ```
//!
//! `CollectionStore` puts typed JSON (de)serialization on top of any
//! `KeyValueStore`, and `SeedSource` supplies the first-run alumni dataset.

pub mod collections;
pub mod file_store;
pub mod in_memory;
pub mod seed;
pub mod store;

pub use collections::CollectionStore;
pub use file_store::FileStore;
pub use in_memory::InMemoryStore;
pub use seed::{FileSeed, SeedSource, StaticSeed};
pub use store::{keys, KeyValueStore};
