//! # Alumni Network CLI
//!
//! Terminal front-end: subcommands drive `AlumniNetwork`, and
//! `ConsolePresenter` renders sections and notices.

pub mod commands;
pub mod presenter;

use std::sync::Arc;

use anyhow::Context;
use network::{AlumniNetwork, FileStore, SeedSource};
use shared::{AlumniError, AppConfig};
use tracing::debug;

use crate::presenter::ConsolePresenter;

/// The controller as the CLI runs it: file-backed storage
pub type Network = AlumniNetwork<FileStore>;

/// An error the presenter has already shown as a notice
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct Reported(#[from] pub AlumniError);

/// A loaded controller plus the presenter rendering it
pub struct Session {
    pub network: Network,
    pub presenter: Arc<ConsolePresenter>,
}

impl Session {
    /// Open the data directory and load every collection
    ///
    /// The presenter is attached after loading so the initial render of
    /// the home section does not precede the command's own output.
    pub async fn open(config: &AppConfig, seed: &dyn SeedSource) -> anyhow::Result<Self> {
        let store = FileStore::open(config.data_dir.clone())
            .with_context(|| format!("failed to open data directory {}", config.data_dir.display()))?;
        debug!(data_dir = %config.data_dir.display(), "opening session");
        let network = Network::new(store).with_retention(config.retention.clone());
        network.load(seed).await.context("failed to load alumni data")?;

        let presenter = Arc::new(ConsolePresenter::new());
        let network = network.with_presenter(presenter.clone());
        Ok(Self { network, presenter })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{
        ApproveCommand, DonateCommand, EditProfileCommand, ImportCommand, RsvpCommand,
    };
    use network::StaticSeed;
    use shared::AlumniRecord;

    async fn session(dir: &std::path::Path) -> Session {
        let config = AppConfig {
            data_dir: dir.join("data"),
            ..Default::default()
        };
        let seed = StaticSeed::from_records(&[
            AlumniRecord::new(1, "Ada").with_batch(2015),
            AlumniRecord::new(2, "Grace").with_verified(true),
        ])
        .unwrap();
        Session::open(&config, &seed).await.unwrap()
    }

    #[tokio::test]
    async fn test_commands_persist_across_sessions() {
        let dir = tempfile::tempdir().unwrap();

        let first = session(dir.path()).await;
        RsvpCommand { event_id: 1, attendee: 2, yes: true }.run(&first).unwrap();
        ApproveCommand { id: 1 }.run(&first).unwrap();
        DonateCommand { amount: "40".to_string() }.run(&first).unwrap();
        drop(first);

        let second = session(dir.path()).await;
        assert_eq!(second.network.events()[0].attendee_count(), 1);
        assert!(second.network.profile(1).unwrap().verified);
        assert_eq!(second.network.donations()[0].amount, 40.0);
    }

    #[tokio::test]
    async fn test_failed_operation_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let session = session(dir.path()).await;

        let err = DonateCommand { amount: "-5".to_string() }.run(&session).unwrap_err();
        assert!(err.is::<Reported>());

        // lookups before the operation are plain errors
        let err = RsvpCommand { event_id: 9, attendee: 1, yes: true }.run(&session).unwrap_err();
        assert!(!err.is::<Reported>());
    }

    #[tokio::test]
    async fn test_edit_profile_with_flags() {
        let dir = tempfile::tempdir().unwrap();
        let session = session(dir.path()).await;

        EditProfileCommand {
            id: 2,
            name: None,
            batch: Some(2019),
            degree: None,
            role: None,
            company: Some("Initech".to_string()),
            location: None,
            tags: None,
            bio: None,
            linkedin: None,
            email: None,
        }
        .run(&session)
        .unwrap();

        let record = session.network.profile(2).unwrap();
        assert_eq!(record.name, "Grace");
        assert_eq!(record.batch, 2019);
        assert_eq!(record.company, "Initech");
    }

    #[tokio::test]
    async fn test_import_missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let session = session(dir.path()).await;

        let err = ImportCommand { path: dir.path().join("missing.json") }
            .run(&session)
            .await
            .unwrap_err();
        assert!(err.is::<Reported>());
    }
}
