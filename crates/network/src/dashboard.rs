//! Home-page totals

use chrono::NaiveDate;
use shared::total_donated;

use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_alumni: usize,
    pub active_mentors: usize,
    /// Events dated strictly after `today`
    pub upcoming_events: usize,
    pub donations_total: f64,
}

impl DashboardStats {
    pub fn compute(state: &AppState, today: NaiveDate) -> Self {
        let dataset = &state.dataset;
        Self {
            total_alumni: dataset.alumni.len(),
            active_mentors: dataset.alumni.iter().filter(|a| a.is_mentor).count(),
            upcoming_events: dataset.events.iter().filter(|e| e.is_upcoming(today)).count(),
            donations_total: total_donated(&dataset.donations),
        }
    }
}
