//! Record store: ordered, most-recent-first collection of time entries.

use bygg_core::catalog::Catalog;
use bygg_core::entities::{NewTimeEntry, TimeEntry};
use bygg_core::ids::{PREFIX_ENTRY, format_id, random_id};

/// In-memory time entries for the active session.
///
/// Entries are kept most-recent-first: [`append`](Self::append) inserts at the
/// front. Identifiers are unique at all times; entries are never edited in
/// place, a correction is a remove followed by a new append.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    entries: Vec<TimeEntry>,
    fallback_seq: u32,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing entries, keeping their order.
    ///
    /// Entries whose id is already present are dropped so the uniqueness
    /// invariant holds from the start.
    #[must_use]
    pub fn seeded(entries: impl IntoIterator<Item = TimeEntry>) -> Self {
        let mut store = Self::new();
        for entry in entries {
            if store.contains(&entry.id) {
                tracing::warn!(id = %entry.id, "skipping seed entry with duplicate id");
                continue;
            }
            store.entries.push(entry);
        }
        store
    }

    /// Store a new entry under a fresh identifier and return it.
    pub fn append(&mut self, entry: NewTimeEntry) -> TimeEntry {
        let id = self.fresh_id();
        let stored = TimeEntry::from_new(id, entry);
        tracing::info!(
            id = %stored.id,
            project_id = %stored.project_id,
            hours = stored.hours,
            work_type = %stored.work_type.as_str(),
            "time entry added"
        );
        self.entries.insert(0, stored.clone());
        stored
    }

    /// Delete the entry with `id`. Absent ids are a no-op and return `None`.
    pub fn remove(&mut self, id: &str) -> Option<TimeEntry> {
        let position = self.entries.iter().position(|entry| entry.id == id)?;
        let removed = self.entries.remove(position);
        tracing::info!(id = %removed.id, "time entry removed");
        Some(removed)
    }

    /// All entries, most recent first.
    #[must_use]
    pub fn list(&self) -> &[TimeEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TimeEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring search over description, worker name, and
    /// resolved project name, preserving store order.
    ///
    /// An entry whose project does not resolve can still match on its other
    /// fields. An empty term matches everything.
    #[must_use]
    pub fn search(&self, term: &str, catalog: &Catalog) -> Vec<TimeEntry> {
        let needle = term.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                entry.description.to_lowercase().contains(&needle)
                    || entry.worker_name.to_lowercase().contains(&needle)
                    || catalog
                        .find(&entry.project_id)
                        .is_some_and(|project| project.name.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let candidate = random_id(PREFIX_ENTRY).unwrap_or_else(|| {
                self.fallback_seq = self.fallback_seq.wrapping_add(1);
                format_id(PREFIX_ENTRY, self.fallback_seq)
            });
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}
