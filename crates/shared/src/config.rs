//! Configuration types for the alumni network

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AlumniError, Result};

/// Caps for the append-only collections
///
/// `None` leaves a collection unbounded. When a cap is set, appending past
/// it drops the oldest entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionPolicy {
    #[serde(default)]
    pub max_mentorship_requests: Option<usize>,
    #[serde(default)]
    pub max_donations: Option<usize>,
    #[serde(default)]
    pub max_attendees_per_event: Option<usize>,
}

impl RetentionPolicy {
    /// Trim `items` from the front until it fits within `cap`
    pub fn enforce<T>(items: &mut Vec<T>, cap: Option<usize>) -> usize {
        match cap {
            Some(max) if items.len() > max => {
                let excess = items.len() - max;
                items.drain(..excess);
                excess
            }
            _ => 0,
        }
    }
}

/// Application configuration (`alumni.yaml` / `alumni.json`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Directory holding one file per storage key
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Seed document used when no alumni have been stored yet
    #[serde(default = "default_seed_path")]
    pub seed_path: PathBuf,

    /// Quiet period for search/filter input
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default)]
    pub retention: RetentionPolicy,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".alumni")
}

fn default_seed_path() -> PathBuf {
    PathBuf::from("sample-data.json")
}

fn default_debounce_ms() -> u64 {
    300
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            seed_path: default_seed_path(),
            debounce_ms: default_debounce_ms(),
            retention: RetentionPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML or JSON file, chosen by extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        if is_yaml {
            serde_yaml::from_str(&content)
                .map_err(|e| AlumniError::Config(format!("{}: {}", path.display(), e)))
        } else {
            serde_json::from_str(&content)
                .map_err(|e| AlumniError::Config(format!("{}: {}", path.display(), e)))
        }
    }

    pub fn debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.debounce_ms)
    }
}
