//! Presenter - the rendering port
//!
//! The controller never renders anything itself. After a mutation it hands
//! the active section and the current state to a `Presenter`, and every
//! operation outcome is reported as a transient `Notice`.

use std::str::FromStr;

use shared::AlumniError;

use crate::state::AppState;

/// Top-level views of the front-end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Directory,
    Mentorship,
    Events,
    Donations,
    Admin,
    Settings,
}

impl FromStr for Section {
    type Err = AlumniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "home" => Ok(Section::Home),
            "directory" => Ok(Section::Directory),
            "mentorship" => Ok(Section::Mentorship),
            "events" => Ok(Section::Events),
            "donations" => Ok(Section::Donations),
            "admin" => Ok(Section::Admin),
            "settings" => Ok(Section::Settings),
            other => Err(AlumniError::InvalidInput(format!("unknown section '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A short, auto-dismissing message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl From<&AlumniError> for Notice {
    fn from(err: &AlumniError) -> Self {
        Notice::error(err.to_string())
    }
}

/// Rendering interface for dependency injection
///
/// Both methods are called with no controller lock held, so an
/// implementation may query the controller while rendering.
pub trait Presenter: Send + Sync {
    /// Re-render `section` from a snapshot of the state
    fn render(&self, section: Section, state: &AppState);

    /// Show a transient notice
    fn notify(&self, notice: &Notice);
}

/// No-op presenter for headless use and testing
#[derive(Debug, Clone, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&self, _section: Section, _state: &AppState) {}
    fn notify(&self, _notice: &Notice) {}
}
