//! MentorshipQuery - the mentor/mentee listing

use std::str::FromStr;

use shared::{AlumniError, AlumniRecord};

/// Which side of the mentorship program to list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MentorshipKind {
    #[default]
    Mentors,
    Mentees,
}

impl FromStr for MentorshipKind {
    type Err = AlumniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mentors" => Ok(MentorshipKind::Mentors),
            "mentees" => Ok(MentorshipKind::Mentees),
            other => Err(AlumniError::InvalidInput(format!("unknown mentorship type '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentorshipQuery {
    pub kind: MentorshipKind,
    pub name_contains: Option<String>,
}

impl MentorshipQuery {
    pub fn new(kind: MentorshipKind) -> Self {
        Self {
            kind,
            name_contains: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name_contains = if name.is_empty() { None } else { Some(name) };
        self
    }

    /// Matching alumni, in collection order
    pub fn run<'a>(&self, alumni: &'a [AlumniRecord]) -> Vec<&'a AlumniRecord> {
        let needle = self.name_contains.as_ref().map(|n| n.to_lowercase());

        alumni
            .iter()
            .filter(|a| match self.kind {
                MentorshipKind::Mentors => a.is_mentor,
                MentorshipKind::Mentees => a.is_mentee,
            })
            .filter(|a| match &needle {
                Some(n) => a.name.to_lowercase().contains(n),
                None => true,
            })
            .collect()
    }
}
