use bygg_core::responses::DashboardSummary;
use bygg_store::aggregate;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::Session;
use crate::output;

/// Handle `byggkoll stats`.
pub fn handle(session: &Session, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summary = aggregate::dashboard(session.store().list(), session.catalog());
    if flags.format != OutputFormat::Table {
        return output::output(&summary, flags.format);
    }
    println!("{}", render_summary(&summary));
    Ok(())
}

/// Headline figures followed by the per-project and per-work-type series.
fn render_summary(summary: &DashboardSummary) -> String {
    let headline = output::render_rows(
        &["figure", "value"],
        &[
            vec!["total hours".into(), output::hours(summary.total_hours)],
            vec!["entries".into(), summary.entry_count.to_string()],
            vec!["average per entry".into(), output::average_hours(summary.average_hours)],
        ],
    );

    let by_project = output::render_rows(
        &["project", "hours"],
        &summary
            .by_project
            .iter()
            .map(|group| vec![group.label.clone(), output::hours(group.hours)])
            .collect::<Vec<_>>(),
    );

    let by_work_type = output::render_rows(
        &["type", "hours"],
        &summary
            .by_work_type
            .iter()
            .map(|group| {
                vec![
                    group.work_type.label().to_string(),
                    output::hours(group.hours),
                ]
            })
            .collect::<Vec<_>>(),
    );

    format!("{headline}\n\n{by_project}\n\n{by_work_type}")
}
