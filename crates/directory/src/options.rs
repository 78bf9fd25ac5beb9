//! Choices offered by the industry and location filters

use std::collections::BTreeSet;

use shared::AlumniRecord;

/// Distinct, sorted industries and locations present in the directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub industries: Vec<String>,
    pub locations: Vec<String>,
}

impl FilterOptions {
    pub fn from_alumni(alumni: &[AlumniRecord]) -> Self {
        let industries: BTreeSet<&str> = alumni.iter().map(|a| a.industry.as_str()).collect();
        let locations: BTreeSet<&str> = alumni.iter().map(|a| a.location.as_str()).collect();

        Self {
            industries: industries.into_iter().map(str::to_string).collect(),
            locations: locations.into_iter().map(str::to_string).collect(),
        }
    }
}
