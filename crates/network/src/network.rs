//! AlumniNetwork - the controller that owns application state
//!
//! Every mutating operation follows the same sequence: validate, update the
//! in-memory state, rewrite all four collections, re-render the active
//! section, and report a notice. Load and import are the only async entry
//! points and they are serialized: starting one while another is still
//! outstanding fails with `AlumniError::Busy`.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};
use directory::{DirectoryQuery, FilterOptions, MentorshipQuery};
use shared::{
    parse_amount, AlumniError, AlumniRecord, AttendeeRef, Dataset, DatasetImport,
    DonationRecord, EventRecord, MentorshipRequest, MentorshipStatus, ProfileUpdate, RecordKind,
    Result, RetentionPolicy, Theme,
};
use storage::{keys, CollectionStore, KeyValueStore, SeedSource};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::dashboard::DashboardStats;
use crate::presenter::{Notice, NullPresenter, Presenter, Section};
use crate::state::AppState;

/// An owned page of directory results
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryView {
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
    pub records: Vec<AlumniRecord>,
}

pub struct AlumniNetwork<S> {
    store: CollectionStore<S>,
    state: RwLock<AppState>,
    /// Held for the whole of a load or import
    io_gate: Mutex<()>,
    retention: RetentionPolicy,
    presenter: Arc<dyn Presenter>,
}

impl<S: KeyValueStore> AlumniNetwork<S> {
    /// Create a controller with empty state; call `load` before use
    pub fn new(store: S) -> Self {
        Self {
            store: CollectionStore::new(store),
            state: RwLock::new(AppState::default()),
            io_gate: Mutex::new(()),
            retention: RetentionPolicy::default(),
            presenter: Arc::new(NullPresenter),
        }
    }

    pub fn with_retention(mut self, retention: RetentionPolicy) -> Self {
        self.retention = retention;
        self
    }

    pub fn with_presenter(mut self, presenter: Arc<dyn Presenter>) -> Self {
        self.presenter = presenter;
        self
    }

    pub fn store(&self) -> &S {
        self.store.inner()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, AppState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, AppState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Report `outcome` to the presenter and hand it back
    fn report<T>(&self, outcome: Result<T>, success: &str) -> Result<T> {
        match &outcome {
            Ok(_) => self.presenter.notify(&Notice::success(success)),
            Err(e) => self.presenter.notify(&Notice::from(e)),
        }
        outcome
    }

    /// Render the active section from a snapshot taken outside the lock
    fn render_active(&self) {
        let snapshot = self.read_state().clone();
        self.presenter.render(snapshot.active_section, &snapshot);
    }

    /// Apply `f` to the state, persist all collections and re-render
    ///
    /// State changes made by `f` are kept even when persisting fails.
    fn mutate<T, F>(&self, success: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut AppState) -> Result<T>,
    {
        let outcome = {
            let mut state = self.write_state();
            f(&mut state).and_then(|value| {
                self.store.save_dataset(&state.dataset)?;
                Ok(value)
            })
        };
        if outcome.is_ok() {
            self.render_active();
        }
        self.report(outcome, success)
    }

    // ========== Loading ==========

    /// Load every collection from storage, seeding alumni on first run
    pub async fn load(&self, seed: &dyn SeedSource) -> Result<()> {
        let outcome = self.load_collections(seed).await;
        self.report(outcome, "Data loaded")
    }

    async fn load_collections(&self, seed: &dyn SeedSource) -> Result<()> {
        let _gate = self.io_gate.try_lock().map_err(|_| AlumniError::Busy)?;

        let alumni: Vec<AlumniRecord> = match self.store.load(keys::ALUMNI)? {
            Some(alumni) => alumni,
            None => {
                let raw = seed.fetch().await?;
                let alumni: Vec<AlumniRecord> = serde_json::from_str(&raw)?;
                self.store.save_raw(keys::ALUMNI, &raw)?;
                info!(count = alumni.len(), "seeded alumni from bundled data");
                alumni
            }
        };

        let mut events: Vec<EventRecord> = self.store.load_or_default(keys::EVENTS)?;
        if events.is_empty() {
            events.push(EventRecord::networking_meetup());
            self.store.save(keys::EVENTS, &events)?;
            debug!("created default event");
        }

        let dataset = Dataset {
            alumni,
            events,
            mentorship_requests: self.store.load_or_default(keys::MENTORSHIP_REQUESTS)?,
            donations: self.store.load_or_default(keys::DONATIONS)?,
        };
        let theme = self.store.load_theme()?;

        {
            let mut state = self.write_state();
            let active_section = state.active_section;
            *state = AppState::from_dataset(dataset, theme);
            state.active_section = active_section;

            info!(
                alumni = state.dataset.alumni.len(),
                events = state.dataset.events.len(),
                pending_verifications = state.verification_queue.len(),
                "data loaded"
            );
        }
        self.render_active();
        Ok(())
    }

    // ========== Import / Export ==========

    /// Import a dataset document read from `path`
    pub async fn import_file(&self, path: &Path) -> Result<()> {
        let outcome = async {
            let _gate = self.io_gate.try_lock().map_err(|_| AlumniError::Busy)?;
            let document = tokio::fs::read_to_string(path).await?;
            info!(path = %path.display(), "importing dataset");
            self.apply_import(&document)
        }
        .await;
        self.report(outcome, "Data imported")
    }

    /// Import a dataset document
    ///
    /// Present collections replace the current ones wholesale; absent ones
    /// are kept. The verification queue is re-snapshotted afterwards.
    pub fn import_document(&self, document: &str) -> Result<()> {
        let outcome = match self.io_gate.try_lock() {
            Ok(_gate) => self.apply_import(document),
            Err(_) => Err(AlumniError::Busy),
        };
        self.report(outcome, "Data imported")
    }

    fn apply_import(&self, document: &str) -> Result<()> {
        let import = DatasetImport::from_json(document)?;

        {
            let mut state = self.write_state();
            state.dataset.apply_import(import);
            state.resync_verification_queue();
            self.store.save_dataset(&state.dataset)?;
        }
        self.render_active();
        Ok(())
    }

    /// The four collections as one document
    pub fn export(&self) -> Dataset {
        self.read_state().dataset.clone()
    }

    pub fn export_json(&self) -> Result<String> {
        self.read_state().dataset.to_json()
    }

    /// Write the export document to `path`
    pub async fn export_to_file(&self, path: &Path) -> Result<()> {
        let document = serde_json::to_string_pretty(&self.export())?;
        tokio::fs::write(path, document).await?;
        info!(path = %path.display(), "dataset exported");
        Ok(())
    }

    // ========== Profiles ==========

    pub fn profile(&self, id: u64) -> Result<AlumniRecord> {
        self.read_state()
            .find_alumni(id)
            .cloned()
            .ok_or_else(|| AlumniError::not_found(RecordKind::Alumni, id))
    }

    /// Overwrite the profile fields of alumnus `id`
    pub fn edit_profile(&self, id: u64, update: ProfileUpdate) -> Result<()> {
        self.mutate("Profile updated", |state| {
            let record = state
                .alumni_mut(id)
                .ok_or_else(|| AlumniError::not_found(RecordKind::Alumni, id))?;
            record.apply_profile(update);
            debug!(id, "profile updated");
            Ok(())
        })
    }

    // ========== Mentorship ==========

    /// Queue a `pending` request to `mentor_id`; the mentor id is not checked
    pub fn submit_mentorship_request(&self, mentor_id: u64, message: &str) -> Result<()> {
        let cap = self.retention.max_mentorship_requests;
        self.mutate("Request sent", |state| {
            let requests = &mut state.dataset.mentorship_requests;
            requests.push(MentorshipRequest::new(mentor_id, message));
            RetentionPolicy::enforce(requests, cap);
            debug!(mentor_id, "mentorship request submitted");
            Ok(())
        })
    }

    /// Accept or decline the request at `index`
    pub fn respond_to_mentorship(&self, index: usize, accept: bool) -> Result<MentorshipStatus> {
        let success = if accept { "Request accepted" } else { "Request declined" };
        self.mutate(success, |state| {
            let request = state
                .dataset
                .mentorship_requests
                .get_mut(index)
                .ok_or_else(|| AlumniError::not_found(RecordKind::MentorshipRequest, index as u64))?;
            if accept {
                request.accept()?;
            } else {
                request.decline()?;
            }
            Ok(request.status)
        })
    }

    pub fn mentorship_requests(&self) -> Vec<MentorshipRequest> {
        self.read_state().dataset.mentorship_requests.clone()
    }

    pub fn mentorship_listing(&self, query: &MentorshipQuery) -> Vec<AlumniRecord> {
        let state = self.read_state();
        query.run(state.alumni()).into_iter().cloned().collect()
    }

    // ========== Events ==========

    pub fn events(&self) -> Vec<EventRecord> {
        self.read_state().dataset.events.clone()
    }

    /// Register `attendee` for `event_id`
    ///
    /// Repeated RSVPs append the attendee again; there is no de-duplication.
    pub fn rsvp(&self, event_id: u64, attendee: AttendeeRef) -> Result<()> {
        let cap = self.retention.max_attendees_per_event;
        self.mutate("Registration confirmed", |state| {
            let event = state
                .event_mut(event_id)
                .ok_or_else(|| AlumniError::not_found(RecordKind::Event, event_id))?;
            event.rsvped = true;
            event.attendees.push(attendee);
            RetentionPolicy::enforce(&mut event.attendees, cap);
            debug!(event_id, attendee = attendee.id, "rsvp recorded");
            Ok(())
        })
    }

    // ========== Verification ==========

    /// Alumni currently in the verification snapshot
    pub fn pending_verifications(&self) -> Vec<AlumniRecord> {
        let state = self.read_state();
        state
            .verification_queue
            .pending(state.alumni())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Mark alumnus `id` verified and drop it from the snapshot
    pub fn approve_verification(&self, id: u64) -> Result<()> {
        self.mutate("Approved", |state| {
            if !state.verification_queue.contains(id) {
                return Err(AlumniError::not_found(RecordKind::PendingVerification, id));
            }
            let record = state
                .alumni_mut(id)
                .ok_or_else(|| AlumniError::not_found(RecordKind::Alumni, id))?;
            record.verified = true;
            state.verification_queue.remove(id)?;
            info!(id, "verification approved");
            Ok(())
        })
    }

    /// Drop alumnus `id` from the snapshot; its `verified` flag is untouched
    pub fn reject_verification(&self, id: u64) -> Result<()> {
        self.mutate("Rejected", |state| {
            state.verification_queue.remove(id)?;
            info!(id, "verification rejected");
            Ok(())
        })
    }

    // ========== Donations ==========

    /// Append a donation of `amount`, stamped with the current time
    pub fn record_donation(&self, amount: f64) -> Result<DonationRecord> {
        let cap = self.retention.max_donations;
        self.mutate("Donation received", |state| {
            let donation = DonationRecord::new(amount, Utc::now())?;
            state.dataset.donations.push(donation.clone());
            RetentionPolicy::enforce(&mut state.dataset.donations, cap);
            info!(amount, "donation recorded");
            Ok(donation)
        })
    }

    /// Like `record_donation`, for an amount typed by the user
    pub fn record_donation_input(&self, input: &str) -> Result<DonationRecord> {
        match parse_amount(input) {
            Ok(amount) => self.record_donation(amount),
            Err(e) => self.report(Err(e), "Donation received"),
        }
    }

    pub fn donations(&self) -> Vec<DonationRecord> {
        self.read_state().dataset.donations.clone()
    }

    // ========== Views ==========

    pub fn directory(&self, query: &DirectoryQuery) -> DirectoryView {
        let state = self.read_state();
        let page = query.run(state.alumni());
        DirectoryView {
            page: page.page,
            page_count: page.page_count(),
            total: page.total,
            records: page.records.into_iter().cloned().collect(),
        }
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_alumni(self.read_state().alumni())
    }

    pub fn dashboard(&self, today: NaiveDate) -> DashboardStats {
        DashboardStats::compute(&self.read_state(), today)
    }

    pub fn active_section(&self) -> Section {
        self.read_state().active_section
    }

    /// Switch the active section and render it
    pub fn show_section(&self, section: Section) {
        self.write_state().active_section = section;
        self.render_active();
    }

    /// Switch the active section without rendering; the next mutation will
    pub fn set_active_section(&self, section: Section) {
        self.write_state().active_section = section;
    }

    /// Read-only access to the whole state
    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.read_state())
    }

    // ========== Settings ==========

    pub fn theme(&self) -> Theme {
        self.read_state().theme
    }

    /// Flip between light and dark and persist the choice
    pub fn toggle_theme(&self) -> Result<Theme> {
        let outcome = {
            let mut state = self.write_state();
            let theme = state.theme.toggled();
            self.store.save_theme(theme).map(|()| {
                state.theme = theme;
                debug!(%theme, "theme toggled");
                theme
            })
        };
        self.report(outcome, "Theme updated")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use storage::{InMemoryStore, StaticSeed};
    use tokio::sync::Notify;

    #[derive(Default)]
    struct RecordingPresenter {
        notices: std::sync::Mutex<Vec<Notice>>,
        renders: std::sync::Mutex<Vec<Section>>,
    }

    impl RecordingPresenter {
        fn last_notice(&self) -> Option<Notice> {
            self.notices.lock().unwrap().last().cloned()
        }
    }

    impl Presenter for RecordingPresenter {
        fn render(&self, section: Section, _state: &AppState) {
            self.renders.lock().unwrap().push(section);
        }

        fn notify(&self, notice: &Notice) {
            self.notices.lock().unwrap().push(notice.clone());
        }
    }

    /// Store that refuses writes to one key
    #[derive(Default)]
    struct FailingStore {
        inner: InMemoryStore,
        fail_key: std::sync::Mutex<Option<&'static str>>,
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            if *self.fail_key.lock().unwrap() == Some(key) {
                return Err(AlumniError::Storage(format!("quota exceeded for {}", key)));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.inner.remove(key)
        }
    }

    /// Seed that blocks until released
    struct GatedSeed {
        started: Notify,
        release: Notify,
    }

    #[async_trait]
    impl SeedSource for GatedSeed {
        async fn fetch(&self) -> Result<String> {
            self.started.notify_one();
            self.release.notified().await;
            Ok("[]".to_string())
        }
    }

    fn sample_alumni() -> Vec<AlumniRecord> {
        let mut mentor = AlumniRecord::new(2, "Two").with_batch(2021).with_tags(["web"]).with_verified(true);
        mentor.is_mentor = true;
        vec![
            AlumniRecord::new(1, "One").with_batch(2020).with_tags(["ml"]),
            mentor,
        ]
    }

    async fn loaded_network() -> AlumniNetwork<InMemoryStore> {
        let network = AlumniNetwork::new(InMemoryStore::new());
        let seed = StaticSeed::from_records(&sample_alumni()).unwrap();
        network.load(&seed).await.unwrap();
        network
    }

    /// Presenter that reads back through the controller while rendering
    #[derive(Default)]
    struct ReentrantPresenter {
        network: std::sync::OnceLock<std::sync::Weak<AlumniNetwork<InMemoryStore>>>,
        totals: std::sync::Mutex<Vec<usize>>,
    }

    impl Presenter for ReentrantPresenter {
        fn render(&self, _section: Section, _state: &AppState) {
            if let Some(network) = self.network.get().and_then(std::sync::Weak::upgrade) {
                let view = network.directory(&DirectoryQuery::default());
                self.totals.lock().unwrap().push(view.total);
            }
        }

        fn notify(&self, _notice: &Notice) {}
    }

    #[tokio::test]
    async fn test_load_failure_is_notified() {
        let presenter = Arc::new(RecordingPresenter::default());
        let network = AlumniNetwork::new(InMemoryStore::new()).with_presenter(presenter.clone());

        let result = network.load(&StaticSeed::new("[{")).await;
        assert!(matches!(result, Err(AlumniError::ParseFailure(_))));
        let notice = presenter.last_notice().unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.message, result.unwrap_err().to_string());

        network.load(&StaticSeed::new("[]")).await.unwrap();
        assert_eq!(presenter.last_notice().unwrap(), Notice::success("Data loaded"));
    }

    #[tokio::test]
    async fn test_theme_failure_is_notified() {
        let presenter = Arc::new(RecordingPresenter::default());
        let network = AlumniNetwork::new(FailingStore::default()).with_presenter(presenter.clone());
        network.load(&StaticSeed::new("[]")).await.unwrap();

        *network.store().fail_key.lock().unwrap() = Some("theme");
        assert!(matches!(network.toggle_theme(), Err(AlumniError::Storage(_))));
        assert!(presenter.last_notice().unwrap().is_error());
        assert_eq!(network.theme(), Theme::Light);

        *network.store().fail_key.lock().unwrap() = None;
        network.toggle_theme().unwrap();
        assert_eq!(presenter.last_notice().unwrap(), Notice::success("Theme updated"));
    }

    #[tokio::test]
    async fn test_presenter_may_read_back_while_rendering() {
        let presenter = Arc::new(ReentrantPresenter::default());
        let network = Arc::new(AlumniNetwork::new(InMemoryStore::new()).with_presenter(presenter.clone()));
        presenter.network.set(Arc::downgrade(&network)).ok();

        network.load(&StaticSeed::from_records(&sample_alumni()).unwrap()).await.unwrap();
        network.record_donation(5.0).unwrap();
        network.import_document(r#"{"alumni": []}"#).unwrap();
        network.show_section(Section::Directory);

        assert_eq!(*presenter.totals.lock().unwrap(), vec![2, 2, 0, 0]);
    }

    #[tokio::test]
    async fn test_first_load_seeds_and_writes_through() {
        let store = InMemoryStore::new();
        let network = AlumniNetwork::new(store.clone());
        let seed = StaticSeed::new(r#"[{"id":1,"name":"Seeded"}]"#);

        network.load(&seed).await.unwrap();

        assert_eq!(
            store.get("alumni").unwrap().as_deref(),
            Some(r#"[{"id":1,"name":"Seeded"}]"#)
        );
        let events = network.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Alumni Networking Meetup");
        assert!(store.contains("events").unwrap());
        assert!(network.mentorship_requests().is_empty());
        assert_eq!(network.pending_verifications().len(), 1);
    }

    #[tokio::test]
    async fn test_stored_alumni_win_over_seed() {
        let store = InMemoryStore::with_entries([("alumni", r#"[{"id":9,"name":"Stored"}]"#)]);
        let network = AlumniNetwork::new(store);
        let seed = StaticSeed::new("this is not json");

        network.load(&seed).await.unwrap();
        assert_eq!(network.profile(9).unwrap().name, "Stored");
    }

    #[tokio::test]
    async fn test_malformed_seed_is_parse_failure() {
        let store = InMemoryStore::new();
        let network = AlumniNetwork::new(store.clone());

        let result = network.load(&StaticSeed::new("[{")).await;
        assert!(matches!(result, Err(AlumniError::ParseFailure(_))));
        assert!(!store.contains("alumni").unwrap());
    }

    #[tokio::test]
    async fn test_second_load_while_first_outstanding_is_busy() {
        let network = Arc::new(AlumniNetwork::new(InMemoryStore::new()));
        let seed = Arc::new(GatedSeed {
            started: Notify::new(),
            release: Notify::new(),
        });

        let first = tokio::spawn({
            let network = network.clone();
            let seed = seed.clone();
            async move { network.load(seed.as_ref()).await }
        });
        seed.started.notified().await;

        let second = network.load(&StaticSeed::new("[]")).await;
        assert!(matches!(second, Err(AlumniError::Busy)));
        assert!(matches!(network.import_document("{}"), Err(AlumniError::Busy)));

        seed.release.notify_one();
        first.await.unwrap().unwrap();
        network.import_document("{}").unwrap();
    }

    #[tokio::test]
    async fn test_edit_profile() {
        let network = loaded_network().await;
        let mut update = ProfileUpdate::from_record(&network.profile(1).unwrap());
        update.company = "Initech".to_string();

        network.edit_profile(1, update.clone()).unwrap();
        assert_eq!(network.profile(1).unwrap().company, "Initech");

        let err = network.edit_profile(42, update).unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_mentorship_request_lifecycle() {
        let network = loaded_network().await;

        network.submit_mentorship_request(2, "").unwrap();
        let requests = network.mentorship_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].status, MentorshipStatus::Pending);

        let status = network.respond_to_mentorship(0, true).unwrap();
        assert_eq!(status, MentorshipStatus::Accepted);
        assert!(matches!(
            network.respond_to_mentorship(0, false),
            Err(AlumniError::InvalidTransition { .. })
        ));
        assert!(network.respond_to_mentorship(5, true).unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_rsvp_twice_appends_twice() {
        let network = loaded_network().await;

        network.rsvp(1, AttendeeRef::new(1)).unwrap();
        network.rsvp(1, AttendeeRef::new(1)).unwrap();

        let event = &network.events()[0];
        assert!(event.rsvped);
        assert_eq!(event.attendees, vec![AttendeeRef::new(1), AttendeeRef::new(1)]);

        assert!(network.rsvp(99, AttendeeRef::new(1)).unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_approve_then_reject_is_not_found() {
        let network = loaded_network().await;

        network.approve_verification(1).unwrap();
        assert!(network.profile(1).unwrap().verified);
        assert!(network.pending_verifications().is_empty());

        let err = network.reject_verification(1).unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_reject_keeps_verified_flag() {
        let network = loaded_network().await;

        network.reject_verification(1).unwrap();
        assert!(!network.profile(1).unwrap().verified);
        assert!(network.pending_verifications().is_empty());

        // already verified, never queued
        assert!(network.approve_verification(2).unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_donations() {
        let network = loaded_network().await;

        for bad in [0.0, -10.0, f64::NAN] {
            let result = network.record_donation(bad);
            assert!(matches!(result, Err(AlumniError::InvalidInput(_))));
        }
        assert!(network.record_donation_input("ten").is_err());
        assert!(network.donations().is_empty());

        let donation = network.record_donation(50.0).unwrap();
        assert_eq!(donation.amount, 50.0);
        assert_eq!(network.donations().len(), 1);

        network.record_donation_input("12").unwrap();
        assert_eq!(network.donations()[1].amount, 12.0);
    }

    #[tokio::test]
    async fn test_retention_caps_donations() {
        let network = loaded_network().await.with_retention(RetentionPolicy {
            max_donations: Some(2),
            ..Default::default()
        });

        for amount in [1.0, 2.0, 3.0] {
            network.record_donation(amount).unwrap();
        }
        let amounts: Vec<f64> = network.donations().iter().map(|d| d.amount).collect();
        assert_eq!(amounts, vec![2.0, 3.0]);
    }

    #[tokio::test]
    async fn test_every_mutation_persists_all_collections() {
        let store = InMemoryStore::new();
        let network = AlumniNetwork::new(store.clone());
        network.load(&StaticSeed::from_records(&sample_alumni()).unwrap()).await.unwrap();

        network.record_donation(5.0).unwrap();
        for key in keys::COLLECTIONS {
            assert!(store.contains(key).unwrap(), "{} not persisted", key);
        }
        let stored: Vec<DonationRecord> = serde_json::from_str(&store.get("donations").unwrap().unwrap()).unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_memory_and_earlier_slots() {
        let network = AlumniNetwork::new(FailingStore::default());
        network.load(&StaticSeed::from_records(&sample_alumni()).unwrap()).await.unwrap();

        *network.store().fail_key.lock().unwrap() = Some("mentorshipRequests");
        network.approve_verification(1).ok();
        let result = network.record_donation(10.0);
        assert!(matches!(result, Err(AlumniError::Storage(_))));

        // in-memory state advanced
        assert_eq!(network.donations().len(), 1);
        // alumni slot was written before the failure, donations slot was not
        let alumni: Vec<AlumniRecord> =
            serde_json::from_str(&network.store().get("alumni").unwrap().unwrap()).unwrap();
        assert!(alumni.iter().find(|a| a.id == 1).unwrap().verified);
        assert_eq!(network.store().get("donations").unwrap(), None);
    }

    #[tokio::test]
    async fn test_export_import_round_trip() {
        let network = loaded_network().await;
        network.submit_mentorship_request(2, "hello").unwrap();
        network.rsvp(1, AttendeeRef::new(3)).unwrap();
        network.record_donation(25.0).unwrap();

        let exported = network.export_json().unwrap();
        let before = network.export();

        let other = AlumniNetwork::new(InMemoryStore::new());
        other.load(&StaticSeed::new("[]")).await.unwrap();
        other.import_document(&exported).unwrap();

        assert_eq!(other.export(), before);
    }

    #[tokio::test]
    async fn test_partial_import_and_queue_resync() {
        let network = loaded_network().await;
        network.record_donation(5.0).unwrap();

        network
            .import_document(r#"{"alumni": [{"id": 7, "name": "New"}, {"id": 8, "name": "Old", "verified": true}]}"#)
            .unwrap();

        let pending: Vec<u64> = network.pending_verifications().iter().map(|a| a.id).collect();
        assert_eq!(pending, vec![7]);
        assert_eq!(network.donations().len(), 1);
        assert_eq!(network.events().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_import_leaves_state() {
        let presenter = Arc::new(RecordingPresenter::default());
        let network = loaded_network().await.with_presenter(presenter.clone());
        let before = network.export();

        let result = network.import_document("{\"alumni\": [");
        assert!(matches!(result, Err(AlumniError::ParseFailure(_))));
        assert_eq!(network.export(), before);
        assert!(presenter.last_notice().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_file_import_and_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(shared::EXPORT_FILE_NAME);

        let network = loaded_network().await;
        network.record_donation(7.5).unwrap();
        network.export_to_file(&path).await.unwrap();

        let other = AlumniNetwork::new(InMemoryStore::new());
        other.load(&StaticSeed::new("[]")).await.unwrap();
        other.import_file(&path).await.unwrap();
        assert_eq!(other.export(), network.export());

        let missing = other.import_file(&dir.path().join("nope.json")).await;
        assert!(matches!(missing, Err(AlumniError::Io(_))));
    }

    #[tokio::test]
    async fn test_mutation_renders_active_section_and_notifies() {
        let presenter = Arc::new(RecordingPresenter::default());
        let network = loaded_network().await.with_presenter(presenter.clone());

        network.show_section(Section::Events);
        network.rsvp(1, AttendeeRef::new(1)).unwrap();

        let renders = presenter.renders.lock().unwrap().clone();
        assert_eq!(renders, vec![Section::Events, Section::Events]);
        assert_eq!(presenter.last_notice().unwrap(), Notice::success("Registration confirmed"));

        network.record_donation(-1.0).ok();
        assert!(presenter.last_notice().unwrap().is_error());
    }

    #[tokio::test]
    async fn test_directory_view() {
        let network = loaded_network().await;
        let view = network.directory(&DirectoryQuery::new(
            directory::DirectoryFilter::new().with_verified(true),
        ));

        assert_eq!(view.total, 1);
        assert_eq!(view.page_count, 1);
        assert_eq!(view.records[0].id, 2);

        let mentors = network.mentorship_listing(&MentorshipQuery::default());
        assert_eq!(mentors.len(), 1);
    }

    #[tokio::test]
    async fn test_theme_toggle_persists() {
        let store = InMemoryStore::new();
        let network = AlumniNetwork::new(store.clone());
        network.load(&StaticSeed::new("[]")).await.unwrap();

        assert_eq!(network.theme(), Theme::Light);
        assert_eq!(network.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        let reloaded = AlumniNetwork::new(store);
        reloaded.load(&StaticSeed::new("[]")).await.unwrap();
        assert_eq!(reloaded.theme(), Theme::Dark);
    }
}
