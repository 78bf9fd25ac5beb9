//! DirectoryQuery - filter, sort, then paginate the alumni collection

use shared::AlumniRecord;
use tracing::debug;

use crate::filter::{DirectoryFilter, SortKey};

/// Records per directory page
pub const PAGE_SIZE: usize = 9;

/// Number of pagination controls for `total` matching records
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// One page of directory results
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryPage<'a> {
    /// 1-based page number that was requested
    pub page: usize,
    pub records: Vec<&'a AlumniRecord>,
    /// Matching records across all pages
    pub total: usize,
}

impl DirectoryPage<'_> {
    pub fn page_count(&self) -> usize {
        page_count(self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A directory request: predicates, sort order and page
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryQuery {
    pub filter: DirectoryFilter,
    pub sort: SortKey,
    pub page: usize,
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self {
            filter: DirectoryFilter::default(),
            sort: SortKey::None,
            page: 1,
        }
    }
}

impl DirectoryQuery {
    pub fn new(filter: DirectoryFilter) -> Self {
        Self {
            filter,
            ..Default::default()
        }
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn on_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Run the query. Pages past the end are empty, page 0 is page 1.
    pub fn run<'a>(&self, alumni: &'a [AlumniRecord]) -> DirectoryPage<'a> {
        let mut filtered = self.filter.apply(alumni);
        self.sort.sort(&mut filtered);

        let total = filtered.len();
        let page = self.page.max(1);
        let start = (page - 1).saturating_mul(PAGE_SIZE);

        let records: Vec<&AlumniRecord> = filtered.into_iter().skip(start).take(PAGE_SIZE).collect();

        debug!(total, page, shown = records.len(), "directory query");

        DirectoryPage { page, records, total }
    }
}
