//! AppState - everything the controller owns in memory

use shared::{AlumniRecord, Dataset, EventRecord, Theme};

use crate::presenter::Section;
use crate::verification::VerificationQueue;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub dataset: Dataset,
    pub verification_queue: VerificationQueue,
    pub theme: Theme,
    pub active_section: Section,
}

impl AppState {
    /// State for a freshly loaded or imported dataset
    pub fn from_dataset(dataset: Dataset, theme: Theme) -> Self {
        let verification_queue = VerificationQueue::from_alumni(&dataset.alumni);
        Self {
            dataset,
            verification_queue,
            theme,
            active_section: Section::Home,
        }
    }

    pub fn alumni(&self) -> &[AlumniRecord] {
        &self.dataset.alumni
    }

    pub fn alumni_mut(&mut self, id: u64) -> Option<&mut AlumniRecord> {
        self.dataset.alumni.iter_mut().find(|a| a.id == id)
    }

    pub fn find_alumni(&self, id: u64) -> Option<&AlumniRecord> {
        self.dataset.alumni.iter().find(|a| a.id == id)
    }

    pub fn event_mut(&mut self, id: u64) -> Option<&mut EventRecord> {
        self.dataset.events.iter_mut().find(|e| e.id == id)
    }

    /// Rebuild the verification snapshot from the alumni collection
    pub fn resync_verification_queue(&mut self) {
        self.verification_queue = VerificationQueue::from_alumni(&self.dataset.alumni);
    }
}
