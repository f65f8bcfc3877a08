use bygg_core::catalog::Catalog;
use bygg_core::entities::TimeEntry;
use bygg_core::enums::WorkType;
use chrono::NaiveDate;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EntriesArgs;
use crate::context::Session;
use crate::output;

const HEADERS: [&str; 7] = ["id", "date", "project", "hours", "type", "worker", "description"];

/// A time entry with its project name resolved.
#[derive(Debug, Clone, Serialize)]
pub struct EntryRow {
    pub id: String,
    pub date: NaiveDate,
    pub project: String,
    pub hours: f64,
    pub work_type: WorkType,
    pub worker: String,
    pub description: String,
}

impl EntryRow {
    pub fn new(entry: &TimeEntry, catalog: &Catalog) -> Self {
        Self {
            id: entry.id.clone(),
            date: entry.date,
            project: catalog.project_name(&entry.project_id).to_string(),
            hours: entry.hours,
            work_type: entry.work_type,
            worker: entry.worker_name.clone(),
            description: entry.description.clone(),
        }
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.date.to_string(),
            self.project.clone(),
            output::hours(self.hours),
            self.work_type.label().to_string(),
            self.worker.clone(),
            self.description.clone(),
        ]
    }
}

/// Handle `byggkoll entries`.
pub fn handle(args: &EntriesArgs, session: &Session, flags: &GlobalFlags) -> anyhow::Result<()> {
    match &args.search {
        Some(term) => print_entries(
            &session.store().search(term, session.catalog()),
            session,
            flags,
        ),
        None => print_entries(session.store().list(), session, flags),
    }
}

/// Print entries, capped at the effective limit.
pub fn print_entries(
    entries: &[TimeEntry],
    session: &Session,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let rows = rows(entries, session.catalog(), flags.limit_or(session.default_limit()));
    let cells = rows.iter().map(EntryRow::cells).collect::<Vec<_>>();
    output::output_rows(&rows, &HEADERS, &cells, flags.format)?;

    if rows.len() < entries.len() && !flags.quiet {
        eprintln!("showing {} of {} entries", rows.len(), entries.len());
    }
    Ok(())
}

fn rows(entries: &[TimeEntry], catalog: &Catalog, limit: usize) -> Vec<EntryRow> {
    entries
        .iter()
        .take(limit)
        .map(|entry| EntryRow::new(entry, catalog))
        .collect()
}
