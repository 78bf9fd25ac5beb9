//! Directory filters and sort keys

use std::cmp::Ordering;
use std::str::FromStr;

use shared::{AlumniError, AlumniRecord};

/// Inclusive batch-year range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRange {
    pub start: i32,
    pub end: i32,
}

impl BatchRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Parse `"2015-2020"`. Anything else yields `None` (no constraint).
    pub fn parse(input: &str) -> Option<Self> {
        let (start, end) = input.trim().split_once('-')?;
        let start = start.trim().parse().ok()?;
        let end = end.trim().parse().ok()?;
        Some(Self { start, end })
    }

    pub fn contains(&self, batch: i32) -> bool {
        batch >= self.start && batch <= self.end
    }
}

/// Lower-cased, trimmed tag terms; a record matches if it has ANY of them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTerms(Vec<String>);

impl TagTerms {
    /// Parse a comma-separated tag input. Empty terms are dropped.
    pub fn parse(input: &str) -> Self {
        Self(
            input
                .to_lowercase()
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn terms(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// An empty term set matches everything
    pub fn matches(&self, record: &AlumniRecord) -> bool {
        self.0.is_empty() || self.0.iter().any(|t| record.has_tag(t))
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagTerms {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }
}

/// Predicate set for the directory; `None` means "no constraint"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryFilter {
    pub name_contains: Option<String>,
    pub batch_range: Option<BatchRange>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub tags_any: TagTerms,
    pub verified: Option<bool>,
}

fn non_empty(input: &str) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input.to_string())
    }
}

impl DirectoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from raw form inputs, where `""` means "any"
    pub fn from_inputs(
        search: &str,
        batch: &str,
        industry: &str,
        location: &str,
        tags: &str,
        verified: &str,
    ) -> Self {
        Self {
            name_contains: non_empty(search),
            batch_range: BatchRange::parse(batch),
            industry: non_empty(industry),
            location: non_empty(location),
            tags_any: TagTerms::parse(tags),
            verified: match verified {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name_contains = Some(name.into());
        self
    }

    pub fn with_batch_range(mut self, range: BatchRange) -> Self {
        self.batch_range = Some(range);
        self
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags_any = tags.into_iter().collect();
        self
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }

    /// True if `record` satisfies every predicate, checked in the
    /// canonical order: name, batch, industry, location, tags, verified
    pub fn matches(&self, record: &AlumniRecord) -> bool {
        if let Some(search) = &self.name_contains {
            if !record.name.to_lowercase().contains(&search.to_lowercase()) {
                return false;
            }
        }
        if let Some(range) = &self.batch_range {
            if !range.contains(record.batch) {
                return false;
            }
        }
        if let Some(industry) = &self.industry {
            if &record.industry != industry {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if &record.location != location {
                return false;
            }
        }
        if !self.tags_any.matches(record) {
            return false;
        }
        self.verified.map_or(true, |verified| record.verified == verified)
    }

    /// Records satisfying every predicate, in input order
    pub fn apply<'a>(&self, alumni: &'a [AlumniRecord]) -> Vec<&'a AlumniRecord> {
        alumni.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Directory sort order; every key sorts descending
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Keep the filtered order
    #[default]
    None,
    NewestBatchFirst,
    MostActiveFirst,
    MostConnectedFirst,
}

impl SortKey {
    fn compare(&self, a: &AlumniRecord, b: &AlumniRecord) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::NewestBatchFirst => b.batch.cmp(&a.batch),
            SortKey::MostActiveFirst => b.activity.total_cmp(&a.activity),
            SortKey::MostConnectedFirst => b.connections.total_cmp(&a.connections),
        }
    }

    /// Stable sort, so ties keep their filtered order
    pub fn sort(&self, records: &mut [&AlumniRecord]) {
        if *self != SortKey::None {
            records.sort_by(|a, b| self.compare(a, b));
        }
    }
}

impl FromStr for SortKey {
    type Err = AlumniError;

    /// Accepts the sort select values `""`, `newest`, `active`, `connected`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "none" => Ok(SortKey::None),
            "newest" => Ok(SortKey::NewestBatchFirst),
            "active" => Ok(SortKey::MostActiveFirst),
            "connected" => Ok(SortKey::MostConnectedFirst),
            other => Err(AlumniError::InvalidInput(format!("unknown sort key '{}'", other))),
        }
    }
}
