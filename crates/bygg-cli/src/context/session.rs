use std::sync::Arc;

use bygg_analysis::{AnalysisClient, AnalysisError, AnalysisSlot};
use bygg_config::ByggConfig;
use bygg_core::catalog::Catalog;
use bygg_core::entities::{AiAnalysis, NewTimeEntry, TimeEntry};
use bygg_core::enums::AnalysisState;
use bygg_core::sample::sample_entries;
use bygg_store::RecordStore;
use serde::Serialize;
use tokio::task::JoinHandle;

/// Analysis state as reported by `status`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisStatus {
    pub state: AnalysisState,
    pub busy: bool,
    pub latest: Option<AiAnalysis>,
}

/// Everything one `byggkoll` run works on.
///
/// Entries change only through [`add_entry`](Self::add_entry) and
/// [`remove_entry`](Self::remove_entry). At most one analysis task is
/// outstanding; it works on a snapshot taken when it started.
pub struct Session {
    store: RecordStore,
    catalog: Catalog,
    slot: AnalysisSlot,
    client: Arc<AnalysisClient>,
    pending: Option<JoinHandle<Option<AiAnalysis>>>,
    default_worker: String,
    default_limit: u32,
}

impl Session {
    pub fn init(config: &ByggConfig) -> anyhow::Result<Self> {
        let client = AnalysisClient::from_config(&config.gemini)?;
        let store = if config.general.seed_sample_data {
            RecordStore::seeded(sample_entries())
        } else {
            RecordStore::new()
        };

        Ok(Self {
            store,
            catalog: config.catalog.catalog(),
            slot: AnalysisSlot::new(),
            client: Arc::new(client),
            pending: None,
            default_worker: config.general.default_worker.clone(),
            default_limit: config.general.default_limit,
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn default_worker(&self) -> &str {
        &self.default_worker
    }

    pub fn default_limit(&self) -> u32 {
        self.default_limit
    }

    /// Store a new entry.
    ///
    /// Values are taken as given: an unknown project is listed as
    /// `Okänt` and malformed hours count as zero in the figures.
    pub fn add_entry(&mut self, entry: NewTimeEntry) -> TimeEntry {
        if self.catalog.find(&entry.project_id).is_none() {
            tracing::warn!(project_id = %entry.project_id, "project is not in the catalog");
        }
        self.store.append(entry)
    }

    pub fn remove_entry(&mut self, id: &str) -> Option<TimeEntry> {
        self.store.remove(id)
    }

    /// Start an analysis over the current entries in a background task.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Busy`] while a previous analysis is running.
    pub fn start_analysis(&mut self) -> Result<(), AnalysisError> {
        self.slot.begin()?;

        let client = Arc::clone(&self.client);
        let entries = self.store.list().to_vec();
        let catalog = self.catalog.clone();
        self.pending = Some(tokio::spawn(async move {
            client.analyze(&entries, &catalog).await
        }));
        Ok(())
    }

    /// Record the outcome if the background analysis has finished.
    ///
    /// Returns the new state when an outcome was recorded.
    pub async fn poll_analysis(&mut self) -> Option<AnalysisState> {
        if !self.pending.as_ref().is_some_and(JoinHandle::is_finished) {
            return None;
        }
        self.wait_analysis().await
    }

    /// Wait for the background analysis, if any, and record its outcome.
    pub async fn wait_analysis(&mut self) -> Option<AnalysisState> {
        let handle = self.pending.take()?;
        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!(%error, "analysis task did not complete");
                None
            }
        };
        Some(self.slot.complete(outcome))
    }

    pub fn analysis_status(&self) -> AnalysisStatus {
        AnalysisStatus {
            state: self.slot.state(),
            busy: self.slot.is_busy(),
            latest: self.slot.latest().cloned(),
        }
    }

    pub fn latest_analysis(&self) -> Option<&AiAnalysis> {
        self.slot.latest()
    }
}
