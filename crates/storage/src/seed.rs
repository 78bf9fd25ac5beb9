//! Seed sources - the bundled dataset used on first run

use std::path::PathBuf;

use async_trait::async_trait;
use shared::{AlumniRecord, Result};
use tracing::info;

/// Supplies the seed alumni document (a JSON array of alumni records)
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Fetch the raw seed document
    async fn fetch(&self) -> Result<String>;
}

/// Seed read from a file on disk
#[derive(Debug, Clone)]
pub struct FileSeed {
    path: PathBuf,
}

impl FileSeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SeedSource for FileSeed {
    async fn fetch(&self) -> Result<String> {
        info!(path = %self.path.display(), "fetching seed data");
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

/// Seed held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSeed {
    document: String,
}

impl StaticSeed {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }

    pub fn from_records(records: &[AlumniRecord]) -> Result<Self> {
        Ok(Self::new(serde_json::to_string(records)?))
    }
}

#[async_trait]
impl SeedSource for StaticSeed {
    async fn fetch(&self) -> Result<String> {
        Ok(self.document.clone())
    }
}
