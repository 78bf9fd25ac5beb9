//! ConsolePresenter - renders sections and notices to the terminal

use std::sync::{Mutex, PoisonError};

use chrono::{NaiveDate, Utc};
use console::style;
use directory::{DirectoryQuery, MentorshipQuery};
use network::{AppState, DashboardStats, Notice, NoticeLevel, Presenter, Section};
use shared::{total_donated, AlumniRecord};

/// Presenter printing plain-text views to stdout and notices to stderr
///
/// The directory and mentorship views depend on the filters the user last
/// asked for, so the presenter remembers them.
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    directory_query: Mutex<DirectoryQuery>,
    mentorship_query: Mutex<MentorshipQuery>,
}

impl ConsolePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_directory_query(&self, query: DirectoryQuery) {
        *self.directory_query.lock().unwrap_or_else(PoisonError::into_inner) = query;
    }

    pub fn set_mentorship_query(&self, query: MentorshipQuery) {
        *self.mentorship_query.lock().unwrap_or_else(PoisonError::into_inner) = query;
    }

    /// Text for `section`, as of `today`
    pub fn format_section(&self, section: Section, state: &AppState, today: NaiveDate) -> String {
        match section {
            Section::Home => format_dashboard(&DashboardStats::compute(state, today)),
            Section::Directory => {
                let query = self.directory_query.lock().unwrap_or_else(PoisonError::into_inner);
                format_directory(&query, state.alumni())
            }
            Section::Mentorship => {
                let query = self.mentorship_query.lock().unwrap_or_else(PoisonError::into_inner);
                format_mentorship(&query, state.alumni())
            }
            Section::Events => format_events(state),
            Section::Donations => format_donations(state),
            Section::Admin => format_pending(state),
            Section::Settings => format!("Theme: {}", state.theme),
        }
    }
}

impl Presenter for ConsolePresenter {
    fn render(&self, section: Section, state: &AppState) {
        println!("{}", self.format_section(section, state, Utc::now().date_naive()));
    }

    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => eprintln!("{}", style(format!("✓ {}", notice.message)).green()),
            NoticeLevel::Error => eprintln!("{}", style(format!("✗ {}", notice.message)).red()),
        }
    }
}

pub fn format_dashboard(stats: &DashboardStats) -> String {
    format!(
        "Total alumni:    {}\nActive mentors:  {}\nUpcoming events: {}\nDonations:       ${}",
        stats.total_alumni, stats.active_mentors, stats.upcoming_events, stats.donations_total
    )
}

fn format_card(alum: &AlumniRecord) -> String {
    let badge = if alum.verified { " ✓" } else { "" };
    format!(
        "#{:<4} {}{}  Batch {} • {}  {}  [{}]",
        alum.id,
        alum.name,
        badge,
        alum.batch,
        alum.role,
        alum.location,
        alum.tags.join(", ")
    )
}

pub fn format_directory(query: &DirectoryQuery, alumni: &[AlumniRecord]) -> String {
    let page = query.run(alumni);
    let mut lines: Vec<String> = page.records.iter().map(|a| format_card(a)).collect();
    if lines.is_empty() {
        lines.push("No alumni match these filters".to_string());
    }
    lines.push(format!(
        "Page {} of {} ({} matching)",
        page.page,
        page.page_count(),
        page.total
    ));
    lines.join("\n")
}

pub fn format_mentorship(query: &MentorshipQuery, alumni: &[AlumniRecord]) -> String {
    let matches = query.run(alumni);
    if matches.is_empty() {
        return "No matches".to_string();
    }
    matches
        .iter()
        .map(|a| format!("#{:<4} {} - {}", a.id, a.name, a.role))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_profile(alum: &AlumniRecord) -> String {
    format!(
        "{}{}\nBatch {} - {}\nRole: {} at {}\nLocation: {}\nTags: {}\nBio: {}\nLinkedIn: {} • Email: {}",
        alum.name,
        if alum.verified { " (verified)" } else { "" },
        alum.batch,
        alum.degree,
        alum.role,
        alum.company,
        alum.location,
        alum.tags.join(", "),
        alum.bio,
        alum.linkedin,
        alum.email
    )
}

fn format_events(state: &AppState) -> String {
    state
        .dataset
        .events
        .iter()
        .map(|e| {
            format!(
                "#{} {}\n  Date: {} • Venue: {}\n  {}\n  [{}] Attendees: {}",
                e.id,
                e.title,
                e.date,
                e.venue,
                e.description,
                if e.rsvped { "Enrolled" } else { "Enroll" },
                e.attendee_count()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_donations(state: &AppState) -> String {
    let donations = &state.dataset.donations;
    let mut lines = vec![format!("Total donated: ${}", total_donated(donations))];
    lines.extend(
        donations
            .iter()
            .map(|d| format!("  ${} on {}", d.amount, d.date.to_rfc3339())),
    );
    lines.join("\n")
}

fn format_pending(state: &AppState) -> String {
    let pending = state.verification_queue.pending(state.alumni());
    if pending.is_empty() {
        return "No pending verifications".to_string();
    }
    pending
        .iter()
        .map(|a| format!("#{:<4} {}  Batch: {}", a.id, a.name, a.batch))
        .collect::<Vec<_>>()
        .join("\n")
}
