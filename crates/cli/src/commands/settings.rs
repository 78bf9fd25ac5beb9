//! alumni theme command

use clap::Args;
use network::Section;

use super::reported;
use crate::Session;

#[derive(Debug, Args)]
pub struct ThemeCommand {
    /// Switch between light and dark
    #[arg(long)]
    pub toggle: bool,
}

impl ThemeCommand {
    pub fn run(&self, session: &Session) -> anyhow::Result<()> {
        if self.toggle {
            reported(session.network.toggle_theme())?;
        }
        session.network.show_section(Section::Settings);
        Ok(())
    }
}
