//! Mentorship requests
//!
//! A request is created `pending` and can move to `accepted` or `declined`
//! exactly once.

use serde::{Deserialize, Serialize};

use crate::error::{AlumniError, Result};

/// Lifecycle of a mentorship request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MentorshipStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl std::fmt::Display for MentorshipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MentorshipStatus::Pending => "pending",
            MentorshipStatus::Accepted => "accepted",
            MentorshipStatus::Declined => "declined",
        };
        f.write_str(s)
    }
}

/// A request sent to a mentor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorshipRequest {
    pub mentor_id: u64,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: MentorshipStatus,
}

impl MentorshipRequest {
    pub fn new(mentor_id: u64, message: impl Into<String>) -> Self {
        Self {
            mentor_id,
            message: message.into(),
            status: MentorshipStatus::Pending,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == MentorshipStatus::Pending
    }

    pub fn accept(&mut self) -> Result<()> {
        self.transition(MentorshipStatus::Accepted)
    }

    pub fn decline(&mut self) -> Result<()> {
        self.transition(MentorshipStatus::Declined)
    }

    fn transition(&mut self, to: MentorshipStatus) -> Result<()> {
        match self.status {
            MentorshipStatus::Pending => {
                self.status = to;
                Ok(())
            }
            from => Err(AlumniError::InvalidTransition {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }
}
