//! # Alumni Network Core
//!
//! Application state and the operations that mutate it.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  AlumniNetwork (controller)                              │
//! │    ├── AppState         - dataset, queue, theme, section │
//! │    ├── CollectionStore  - persistence (storage crate)    │
//! │    ├── DirectoryQuery   - read views (directory crate)   │
//! │    └── Presenter        - swappable rendering port       │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dashboard;
pub mod debounce;
pub mod network;
pub mod presenter;
pub mod state;
pub mod verification;

pub use dashboard::DashboardStats;
pub use debounce::Debouncer;
pub use network::{AlumniNetwork, DirectoryView};
pub use presenter::{Notice, NoticeLevel, NullPresenter, Presenter, Section};
pub use state::AppState;
pub use verification::VerificationQueue;

// Re-export dependencies
pub use directory::{DirectoryFilter, DirectoryQuery, FilterOptions, MentorshipKind, MentorshipQuery, SortKey};
pub use storage::{CollectionStore, FileSeed, FileStore, InMemoryStore, KeyValueStore, SeedSource, StaticSeed};
