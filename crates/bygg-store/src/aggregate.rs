//! Stateless reducers from a slice of entries to dashboard figures.
//!
//! Everything is recomputed from the full collection on each call. Malformed
//! hour values contribute 0 (see [`TimeEntry::effective_hours`]), so the
//! per-project and per-work-type series always reconcile with
//! [`total_hours`].

use bygg_core::catalog::Catalog;
use bygg_core::entities::TimeEntry;
use bygg_core::enums::WorkType;
use bygg_core::responses::{DashboardSummary, ProjectHours, ProjectOverview, WorkTypeHours};

/// Sum of all hours.
#[must_use]
pub fn total_hours(entries: &[TimeEntry]) -> f64 {
    entries.iter().map(TimeEntry::effective_hours).sum()
}

/// Average hours per entry; an empty slice yields 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_hours_per_entry(entries: &[TimeEntry]) -> f64 {
    total_hours(entries) / entries.len().max(1) as f64
}

/// Hours grouped by resolved project name, in first-seen order.
///
/// Entries whose project is missing from the catalog are grouped under
/// [`UNKNOWN_PROJECT_LABEL`](bygg_core::catalog::UNKNOWN_PROJECT_LABEL).
#[must_use]
pub fn hours_by_project(entries: &[TimeEntry], catalog: &Catalog) -> Vec<ProjectHours> {
    let mut groups: Vec<ProjectHours> = Vec::new();
    for entry in entries {
        let label = catalog.project_name(&entry.project_id);
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.hours += entry.effective_hours(),
            None => groups.push(ProjectHours {
                label: label.to_string(),
                hours: entry.effective_hours(),
            }),
        }
    }
    groups
}

/// Hours grouped by work type, in first-seen order.
#[must_use]
pub fn hours_by_work_type(entries: &[TimeEntry]) -> Vec<WorkTypeHours> {
    let mut groups: Vec<WorkTypeHours> = Vec::new();
    for entry in entries {
        match groups
            .iter_mut()
            .find(|group| group.work_type == entry.work_type)
        {
            Some(group) => group.hours += entry.effective_hours(),
            None => groups.push(WorkTypeHours {
                work_type: entry.work_type,
                hours: entry.effective_hours(),
            }),
        }
    }
    groups
}

/// Hours for one work type; 0 when none were logged.
#[must_use]
pub fn hours_for_work_type(entries: &[TimeEntry], work_type: WorkType) -> f64 {
    entries
        .iter()
        .filter(|entry| entry.work_type == work_type)
        .map(TimeEntry::effective_hours)
        .sum()
}

/// One row per catalog project, in catalog order, including projects with no
/// logged hours. Entries with dangling references are not counted.
#[must_use]
pub fn project_totals(entries: &[TimeEntry], catalog: &Catalog) -> Vec<ProjectOverview> {
    catalog
        .iter()
        .map(|project| {
            let (total_hours, entry_count) = entries
                .iter()
                .filter(|entry| entry.project_id == project.id)
                .fold((0.0, 0), |(hours, count), entry| {
                    (hours + entry.effective_hours(), count + 1)
                });
            ProjectOverview {
                project: project.clone(),
                total_hours,
                entry_count,
            }
        })
        .collect()
}

/// Headline figures and both chart series in one value.
#[must_use]
pub fn dashboard(entries: &[TimeEntry], catalog: &Catalog) -> DashboardSummary {
    DashboardSummary {
        total_hours: total_hours(entries),
        entry_count: entries.len(),
        average_hours: average_hours_per_entry(entries),
        by_project: hours_by_project(entries, catalog),
        by_work_type: hours_by_work_type(entries),
    }
}

#[cfg(test)]
mod tests {
    use bygg_core::entities::NewTimeEntry;
    use bygg_core::sample::sample_entries;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::RecordStore;

    fn entry(id: &str, project_id: &str, hours: f64, work_type: WorkType) -> TimeEntry {
        TimeEntry::from_new(
            id.to_string(),
            NewTimeEntry {
                date: NaiveDate::from_ymd_opt(2023, 10, 24).unwrap(),
                project_id: project_id.to_string(),
                hours,
                work_type,
                description: String::new(),
                worker_name: String::from("Karl Byggare"),
            },
        )
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_collection_totals_are_zero() {
        assert_eq!(total_hours(&[]), 0.0);
        assert_eq!(average_hours_per_entry(&[]), 0.0);
        assert!(hours_by_project(&[], &Catalog::builtin()).is_empty());
        assert!(hours_by_work_type(&[]).is_empty());
    }

    #[test]
    fn three_entry_scenario() {
        let entries = vec![
            entry("a", "1", 8.0, WorkType::Normal),
            entry("b", "2", 4.0, WorkType::Normal),
            entry("c", "1", 2.0, WorkType::ChangeOrderWork),
        ];
        let catalog = Catalog::builtin();

        assert_eq!(total_hours(&entries), 14.0);
        assert_eq!(
            hours_by_project(&entries, &catalog),
            vec![
                ProjectHours { label: "Brf Ekbacken".into(), hours: 10.0 },
                ProjectHours { label: "Villa Granhult".into(), hours: 4.0 },
            ]
        );
        assert_eq!(
            hours_by_work_type(&entries),
            vec![
                WorkTypeHours { work_type: WorkType::Normal, hours: 12.0 },
                WorkTypeHours { work_type: WorkType::ChangeOrderWork, hours: 2.0 },
            ]
        );
    }

    #[test]
    fn average_over_sample_set() {
        let entries = sample_entries();
        assert!(approx(average_hours_per_entry(&entries), 14.0 / 3.0));
    }

    #[test]
    fn dangling_project_groups_under_placeholder() {
        let entries = vec![
            entry("a", "42", 3.0, WorkType::Overtime),
            entry("b", "1", 1.0, WorkType::Normal),
            entry("c", "43", 2.0, WorkType::Overtime),
        ];
        let by_project = hours_by_project(&entries, &Catalog::builtin());
        assert_eq!(
            by_project,
            vec![
                ProjectHours { label: "Okänt".into(), hours: 5.0 },
                ProjectHours { label: "Brf Ekbacken".into(), hours: 1.0 },
            ]
        );
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    #[case(-4.0)]
    fn malformed_hours_count_as_zero(#[case] bad: f64) {
        let entries = vec![
            entry("a", "1", 8.0, WorkType::Normal),
            entry("b", "1", bad, WorkType::Travel),
        ];
        assert_eq!(total_hours(&entries), 8.0);
        assert_eq!(average_hours_per_entry(&entries), 4.0);
        assert_eq!(
            hours_by_work_type(&entries),
            vec![
                WorkTypeHours { work_type: WorkType::Normal, hours: 8.0 },
                WorkTypeHours { work_type: WorkType::Travel, hours: 0.0 },
            ]
        );
    }

    #[rstest]
    #[case(vec![("1", 8.0, WorkType::Normal)])]
    #[case(vec![("1", 8.0, WorkType::Normal), ("9", 1.5, WorkType::Absence), ("2", f64::NAN, WorkType::Travel)])]
    #[case(vec![("4", 0.25, WorkType::Overtime), ("4", 7.75, WorkType::ChangeOrderWork), ("3", 3.0, WorkType::Overtime)])]
    fn series_reconcile_with_total(#[case] rows: Vec<(&str, f64, WorkType)>) {
        let entries: Vec<TimeEntry> = rows
            .into_iter()
            .enumerate()
            .map(|(i, (project, hours, work_type))| {
                entry(&format!("e{i}"), project, hours, work_type)
            })
            .collect();
        let catalog = Catalog::builtin();
        let total = total_hours(&entries);

        let by_project: f64 = hours_by_project(&entries, &catalog).iter().map(|g| g.hours).sum();
        let by_type: f64 = hours_by_work_type(&entries).iter().map(|g| g.hours).sum();
        assert!(approx(by_project, total));
        assert!(approx(by_type, total));
    }

    #[test]
    fn every_work_type_is_aggregated() {
        let entries: Vec<TimeEntry> = WorkType::ALL
            .into_iter()
            .enumerate()
            .map(|(i, work_type)| entry(&format!("e{i}"), "1", 1.0, work_type))
            .collect();
        let groups = hours_by_work_type(&entries);
        assert_eq!(groups.len(), WorkType::ALL.len());
        for work_type in WorkType::ALL {
            assert_eq!(hours_for_work_type(&entries, work_type), 1.0);
        }
    }

    #[test]
    fn project_totals_cover_whole_catalog() {
        let catalog = Catalog::builtin();
        let totals = project_totals(&sample_entries(), &catalog);

        let rows: Vec<(&str, f64, usize)> = totals
            .iter()
            .map(|row| (row.project.id.as_str(), row.total_hours, row.entry_count))
            .collect();
        assert_eq!(
            rows,
            vec![("1", 10.0, 2), ("2", 4.0, 1), ("3", 0.0, 0), ("4", 0.0, 0)]
        );
    }

    #[test]
    fn dashboard_over_store_snapshot() {
        let mut store = RecordStore::seeded(sample_entries());
        store.append(NewTimeEntry {
            date: NaiveDate::from_ymd_opt(2023, 10, 26).unwrap(),
            project_id: String::from("4"),
            hours: 6.0,
            work_type: WorkType::Overtime,
            description: String::from("Rivning av innerväggar"),
            worker_name: String::from("Sara Snickare"),
        });

        let summary = dashboard(store.list(), &Catalog::builtin());
        assert_eq!(summary.total_hours, 20.0);
        assert_eq!(summary.entry_count, 4);
        assert_eq!(summary.average_hours, 5.0);
        assert_eq!(summary.by_project[0].label, "Gärdets Skola - Etapp 2");
        assert_eq!(summary.by_work_type[0].work_type, WorkType::Overtime);
    }
}
