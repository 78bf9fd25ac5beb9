//! alumni donate / donations commands

use clap::Args;
use network::Section;

use super::reported;
use crate::Session;

#[derive(Debug, Args)]
pub struct DonateCommand {
    /// Amount to donate
    pub amount: String,
}

impl DonateCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        session.network.set_active_section(Section::Donations);
        reported(session.network.record_donation_input(&self.amount)).map(|_| ())
    }
}

#[derive(Debug, Args)]
pub struct DonationsCommand {}

impl DonationsCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        session.network.show_section(Section::Donations);
        Ok(())
    }
}
