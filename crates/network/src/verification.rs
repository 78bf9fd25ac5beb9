//! VerificationQueue - alumni awaiting admin approval
//!
//! The queue is a snapshot of unverified alumni ids taken when state is
//! loaded or a dataset is imported. Approve and reject remove ids from the
//! snapshot; it is not recomputed from the alumni collection in between,
//! so an alumnus whose `verified` flag changes some other way keeps (or
//! lacks) a queue entry until the next load or import.

use shared::{AlumniError, AlumniRecord, RecordKind, Result};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationQueue {
    ids: Vec<u64>,
}

impl VerificationQueue {
    /// Snapshot every alumnus whose `verified` flag is false
    pub fn from_alumni(alumni: &[AlumniRecord]) -> Self {
        Self {
            ids: alumni.iter().filter(|a| !a.verified).map(|a| a.id).collect(),
        }
    }

    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Take `id` out of the snapshot
    pub fn remove(&mut self, id: u64) -> Result<()> {
        if !self.contains(id) {
            return Err(AlumniError::not_found(RecordKind::PendingVerification, id));
        }
        self.ids.retain(|&queued| queued != id);
        Ok(())
    }

    /// Queued alumni records in queue order; ids with no record are skipped
    pub fn pending<'a>(&self, alumni: &'a [AlumniRecord]) -> Vec<&'a AlumniRecord> {
        self.ids
            .iter()
            .filter_map(|id| {
                let record = alumni.iter().find(|a| a.id == *id);
                if record.is_none() {
                    warn!(id, "verification queue references missing alumnus");
                }
                record
            })
            .collect()
    }
}
