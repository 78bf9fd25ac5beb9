//! CLI Commands

pub mod admin;
pub mod data;
pub mod directory;
pub mod donations;
pub mod events;
pub mod mentorship;
pub mod settings;

pub use admin::{ApproveCommand, RejectCommand, VerificationsCommand};
pub use data::{ExportCommand, ImportCommand};
pub use directory::{DirectoryCommand, EditProfileCommand, FiltersCommand, ProfileCommand};
pub use donations::{DonateCommand, DonationsCommand};
pub use events::{EventsCommand, RsvpCommand};
pub use mentorship::{MentorsCommand, RequestMentorshipCommand, RequestsCommand, RespondMentorshipCommand};
pub use settings::ThemeCommand;

use shared::AlumniError;

use crate::Reported;

/// Mark the outcome of a notifying controller operation
pub(crate) fn reported<T>(outcome: Result<T, AlumniError>) -> anyhow::Result<T> {
    outcome.map_err(|e| Reported(e).into())
}
