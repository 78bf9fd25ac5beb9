//! alumni export / import commands

use std::path::PathBuf;

use clap::Args;
use network::Section;
use shared::EXPORT_FILE_NAME;

use super::reported;
use crate::Session;

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Destination file
    #[arg(default_value = EXPORT_FILE_NAME)]
    pub path: PathBuf,
}

impl ExportCommand {
    pub async fn run(&self, session: &Session) -> anyhow::Result<()> {
        session.network.export_to_file(&self.path).await?;
        println!("✓ Exported to {}", self.path.display());
        Ok(())
    }
}

#[derive(Debug, Args)]
pub struct ImportCommand {
    /// Document holding any of alumni, events, mentorshipRequests, donations
    pub path: PathBuf,
}

impl ImportCommand {
    pub async fn run(&self, session: &Session) -> anyhow::Result<()> {
        session.network.set_active_section(Section::Home);
        reported(session.network.import_file(&self.path).await)
    }
}
