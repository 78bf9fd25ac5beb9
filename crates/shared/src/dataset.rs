//! Dataset - the four collections as one document
//!
//! This is the shape of the export file and of the import file. On import
//! any subset of the four fields may be present.

use serde::{Deserialize, Serialize};

use crate::alumni::AlumniRecord;
use crate::donation::DonationRecord;
use crate::error::Result;
use crate::event::EventRecord;
use crate::mentorship::MentorshipRequest;

/// Default file name for exports
pub const EXPORT_FILE_NAME: &str = "alumni-data.json";

/// Content type of export documents
pub const EXPORT_CONTENT_TYPE: &str = "application/json";

/// All persisted collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub alumni: Vec<AlumniRecord>,
    pub events: Vec<EventRecord>,
    pub mentorship_requests: Vec<MentorshipRequest>,
    pub donations: Vec<DonationRecord>,
}

/// An import document; absent fields leave the current collection untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetImport {
    #[serde(default)]
    pub alumni: Option<Vec<AlumniRecord>>,
    #[serde(default)]
    pub events: Option<Vec<EventRecord>>,
    #[serde(default)]
    pub mentorship_requests: Option<Vec<MentorshipRequest>>,
    #[serde(default)]
    pub donations: Option<Vec<DonationRecord>>,
}

impl DatasetImport {
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn is_empty(&self) -> bool {
        self.alumni.is_none()
            && self.events.is_none()
            && self.mentorship_requests.is_none()
            && self.donations.is_none()
    }
}

impl From<Dataset> for DatasetImport {
    fn from(dataset: Dataset) -> Self {
        Self {
            alumni: Some(dataset.alumni),
            events: Some(dataset.events),
            mentorship_requests: Some(dataset.mentorship_requests),
            donations: Some(dataset.donations),
        }
    }
}

impl Dataset {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Replace every collection present in `import`, wholesale
    pub fn apply_import(&mut self, import: DatasetImport) {
        if let Some(alumni) = import.alumni {
            self.alumni = alumni;
        }
        if let Some(events) = import.events {
            self.events = events;
        }
        if let Some(requests) = import.mentorship_requests {
            self.mentorship_requests = requests;
        }
        if let Some(donations) = import.donations {
            self.donations = donations;
        }
    }
}
