//! # Alumni Network Shared
//!
//! Common types used across all alumni-network crates: the record types that
//! make up a dataset, the error taxonomy and application configuration.

pub mod alumni;
pub mod config;
pub mod dataset;
pub mod donation;
pub mod error;
pub mod event;
pub mod mentorship;
pub mod theme;

// Re-exports
pub use alumni::*;
pub use config::*;
pub use dataset::*;
pub use donation::*;
pub use error::*;
pub use event::*;
pub use mentorship::*;
pub use theme::*;
