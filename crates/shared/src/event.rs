//! Event records and RSVPs

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Reference to an attendee, as appended by an RSVP
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeRef {
    pub id: u64,
}

impl AttendeeRef {
    pub fn new(id: u64) -> Self {
        Self { id }
    }
}

/// An alumni event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    /// `YYYY-MM-DD`; timestamps are accepted and truncated to their date
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub description: String,
    /// Append-only; the same attendee may appear more than once
    #[serde(default)]
    pub attendees: Vec<AttendeeRef>,
    /// Whether the current viewer has registered
    #[serde(default)]
    pub rsvped: bool,
}

fn lenient_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").map(|dt| dt.date()))
        .map_err(|_| serde::de::Error::custom(format!("invalid event date '{}'", raw)))
}

impl EventRecord {
    /// The event synthesized when no events have been stored yet
    pub fn networking_meetup() -> Self {
        Self {
            id: 1,
            title: "Alumni Networking Meetup".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 20).unwrap_or_default(),
            venue: "Auditorium Hall, Campus".to_string(),
            description: "Join us for an evening of networking, mentorship, and reconnecting with fellow alumni.".to_string(),
            attendees: Vec::new(),
            rsvped: false,
        }
    }

    /// Strictly after `today`
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date > today
    }

    pub fn attendee_count(&self) -> usize {
        self.attendees.len()
    }
}
