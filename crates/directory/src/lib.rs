//! # Alumni Network Directory
//!
//! Read-only views over the alumni collection.
//!
//! ## Components
//!
//! - `DirectoryQuery` - Filter, sort and paginate the directory
//! - `MentorshipQuery` - Mentor/mentee listing for the mentorship view
//! - `FilterOptions` - Distinct industries and locations for filter choices

pub mod filter;
pub mod mentorship;
pub mod options;
pub mod query;

pub use filter::{BatchRange, DirectoryFilter, SortKey, TagTerms};
pub use mentorship::{MentorshipKind, MentorshipQuery};
pub use options::FilterOptions;
pub use query::{page_count, DirectoryPage, DirectoryQuery, PAGE_SIZE};
