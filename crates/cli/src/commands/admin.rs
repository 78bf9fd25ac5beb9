//! alumni verifications / approve / reject commands

use clap::Args;
use network::Section;

use super::reported;
use crate::Session;

/// Show the alumni awaiting verification
#[derive(Debug, Args)]
pub struct VerificationsCommand {}

impl VerificationsCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        session.network.show_section(Section::Admin);
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct ApproveCommand {
    /// Alumni id
    pub id: u64,
}

impl ApproveCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        session.network.set_active_section(Section::Admin);
        reported(session.network.approve_verification(self.id))
    }
}

#[derive(Debug, Args)]
pub struct RejectCommand {
    /// Alumni id
    pub id: u64,
}

impl RejectCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        session.network.set_active_section(Section::Admin);
        reported(session.network.reject_verification(self.id))
    }
}
