//! Alumni Network CLI
//!
//! Usage:
//!   alumni dashboard                    - Totals for the home section
//!   alumni directory [filters]          - Browse the alumni directory
//!   alumni mentors --kind mentees       - Mentor / mentee listing
//!   alumni rsvp <event-id>              - Register for an event
//!   alumni approve <id>                 - Approve a pending verification
//!   alumni export [path]                - Write alumni-data.json

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cli::commands::{
    ApproveCommand, DirectoryCommand, DonateCommand, DonationsCommand, EditProfileCommand,
    EventsCommand, ExportCommand, FiltersCommand, ImportCommand, MentorsCommand, ProfileCommand,
    RejectCommand, RequestMentorshipCommand, RequestsCommand, RespondMentorshipCommand,
    RsvpCommand, ThemeCommand, VerificationsCommand,
};
use cli::{Reported, Session};
use console::style;
use network::{FileSeed, Section};
use shared::AppConfig;

#[derive(Parser)]
#[command(name = "alumni")]
#[command(about = "Alumni Network - directory, mentorship, events and donations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// YAML or JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the stored collections
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Seed document used on first run
    #[arg(long, global = true)]
    seed: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show network totals
    Dashboard,
    /// Browse the directory
    Directory(DirectoryCommand),
    /// List industries and locations
    Filters(FiltersCommand),
    /// Show one profile
    Profile(ProfileCommand),
    /// Edit a profile
    EditProfile(EditProfileCommand),
    /// List mentors or mentees
    Mentors(MentorsCommand),
    /// List mentorship requests
    Requests(RequestsCommand),
    /// Send a mentorship request
    RequestMentorship(RequestMentorshipCommand),
    /// Accept or decline a mentorship request
    RespondMentorship(RespondMentorshipCommand),
    /// List events
    Events(EventsCommand),
    /// Register for an event
    Rsvp(RsvpCommand),
    /// Alumni awaiting verification
    Verifications(VerificationsCommand),
    /// Approve a verification
    Approve(ApproveCommand),
    /// Reject a verification
    Reject(RejectCommand),
    /// Make a donation
    Donate(DonateCommand),
    /// Donation history
    Donations(DonationsCommand),
    /// Export all data
    Export(ExportCommand),
    /// Import data
    Import(ImportCommand),
    /// Show or toggle the theme
    Theme(ThemeCommand),
}

impl Cli {
    fn config(&self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(seed) = &self.seed {
            config.seed_path = seed.clone();
        }
        Ok(config)
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config()?;
    let session = Session::open(&config, &FileSeed::new(config.seed_path.clone())).await?;

    match &cli.command {
        Commands::Dashboard => {
            session.network.show_section(Section::Home);
            Ok(())
        }
        Commands::Directory(cmd) => cmd.run(&session),
        Commands::Filters(cmd) => cmd.run(&session),
        Commands::Profile(cmd) => cmd.run(&session),
        Commands::EditProfile(cmd) => cmd.run(&session),
        Commands::Mentors(cmd) => cmd.run(&session),
        Commands::Requests(cmd) => cmd.run(&session),
        Commands::RequestMentorship(cmd) => cmd.run(&session),
        Commands::RespondMentorship(cmd) => cmd.run(&session),
        Commands::Events(cmd) => cmd.run(&session),
        Commands::Rsvp(cmd) => cmd.run(&session),
        Commands::Verifications(cmd) => cmd.run(&session),
        Commands::Approve(cmd) => cmd.run(&session),
        Commands::Reject(cmd) => cmd.run(&session),
        Commands::Donate(cmd) => cmd.run(&session),
        Commands::Donations(cmd) => cmd.run(&session),
        Commands::Export(cmd) => cmd.run(&session).await,
        Commands::Import(cmd) => cmd.run(&session).await,
        Commands::Theme(cmd) => cmd.run(&session),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // reported errors were already shown as a notice
            if !err.is::<Reported>() {
                eprintln!("{}", style(format!("Error: {:#}", err)).red());
            }
            ExitCode::FAILURE
        }
    }
}
