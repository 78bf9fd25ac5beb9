//! alumni mentors / requests / request-mentorship / respond-mentorship commands

use clap::Args;
use directory::{MentorshipKind, MentorshipQuery};
use network::Section;

use super::reported;
use crate::Session;

#[derive(Debug, Args)]
pub struct MentorsCommand {
    /// mentors or mentees
    #[arg(short, long, default_value = "mentors")]
    pub kind: MentorshipKind,

    /// Case-insensitive name search
    #[arg(short, long, default_value = "")]
    pub search: String,
}

impl MentorsCommand {
    pub fn query(&self) -> MentorshipQuery {
        MentorshipQuery::new(self.kind).with_name(self.search.clone())
    }

    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        session.presenter.set_mentorship_query(self.query());
        session.network.show_section(Section::Mentorship);
        Ok(())
    }
}

/// List submitted mentorship requests with their index
#[derive(Debug, Args)]
pub struct RequestsCommand {}

impl RequestsCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        let requests = session.network.mentorship_requests();
        if requests.is_empty() {
            println!("No mentorship requests");
        }
        for (index, request) in requests.iter().enumerate() {
            println!(
                "[{}] mentor #{} ({}) {}",
                index, request.mentor_id, request.status, request.message
            );
        }
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct RequestMentorshipCommand {
    /// Id of the mentor to contact
    pub mentor_id: u64,

    /// Message to the mentor
    #[arg(default_value = "")]
    pub message: String,
}

impl RequestMentorshipCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        session.network.set_active_section(Section::Mentorship);
        reported(session.network.submit_mentorship_request(self.mentor_id, &self.message))
    }
}

#[derive(Debug, Args)]
#[command(group = clap::ArgGroup::new("decision").required(true))]
pub struct RespondMentorshipCommand {
    /// Index shown by `alumni requests`
    pub index: usize,

    #[arg(long, group = "decision")]
    pub accept: bool,

    #[arg(long, group = "decision")]
    pub decline: bool,
}

impl RespondMentorshipCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        let status = reported(session.network.respond_to_mentorship(self.index, self.accept))?;
        println!("Request {} is now {}", self.index, status);
        Ok(())
    }
}
