//! alumni events / rsvp commands

use clap::Args;
use dialoguer::Confirm;
use network::Section;
use shared::{AlumniError, AttendeeRef, RecordKind};

use super::reported;
use crate::Session;

#[derive(Debug, Args)]
pub struct EventsCommand {}

impl EventsCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        session.network.show_section(Section::Events);
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct RsvpCommand {
    /// Event id
    pub event_id: u64,

    /// Alumni id registering for the event
    #[arg(long, default_value_t = 1)]
    pub attendee: u64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl RsvpCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        let event = session
            .network
            .events()
            .into_iter()
            .find(|e| e.id == self.event_id)
            .ok_or_else(|| AlumniError::not_found(RecordKind::Event, self.event_id))?;

        if !self.yes {
            let confirmed = Confirm::new()
                .with_prompt(format!("Register to {}?", event.title))
                .default(true)
                .interact()?;
            if !confirmed {
                println!("Registration cancelled");
                return Ok(());
            }
        }

        session.network.set_active_section(Section::Events);
        reported(session.network.rsvp(self.event_id, AttendeeRef::new(self.attendee)))
    }
}
