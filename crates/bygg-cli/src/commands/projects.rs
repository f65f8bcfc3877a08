use bygg_core::responses::ProjectOverview;
use bygg_store::aggregate;

use crate::cli::GlobalFlags;
use crate::context::Session;
use crate::output;

const HEADERS: [&str; 7] = ["id", "code", "name", "client", "location", "hours", "entries"];

/// Handle `byggkoll projects`.
pub fn handle(session: &Session, flags: &GlobalFlags) -> anyhow::Result<()> {
    let overview = aggregate::project_totals(session.store().list(), session.catalog());
    let cells = overview.iter().map(cells).collect::<Vec<_>>();
    output::output_rows(&overview, &HEADERS, &cells, flags.format)
}

fn cells(row: &ProjectOverview) -> Vec<String> {
    vec![
        row.project.id.clone(),
        row.project.code.clone(),
        row.project.name.clone(),
        row.project.client.clone(),
        row.project.location.clone(),
        output::hours(row.total_hours),
        row.entry_count.to_string(),
    ]
}
