//! Seed data loaded into a fresh session.

use chrono::NaiveDate;

use crate::entities::TimeEntry;
use crate::enums::WorkType;
use crate::ids::{PREFIX_ENTRY, format_id};

/// The three reports a new dashboard session starts with, in display order.
#[must_use]
pub fn sample_entries() -> Vec<TimeEntry> {
    let entry = |n: u32,
                 (y, m, d): (i32, u32, u32),
                 project_id: &str,
                 hours: f64,
                 work_type: WorkType,
                 description: &str,
                 worker_name: &str| TimeEntry {
        id: format_id(PREFIX_ENTRY, n),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        project_id: project_id.to_string(),
        hours,
        work_type,
        description: description.to_string(),
        worker_name: worker_name.to_string(),
    };

    vec![
        entry(
            1,
            (2023, 10, 24),
            "1",
            8.0,
            WorkType::Normal,
            "Montering av köksinredning i lägenhet 12-14.",
            "Karl Byggare",
        ),
        entry(
            2,
            (2023, 10, 24),
            "2",
            4.0,
            WorkType::Normal,
            "Markarbete och förberedelse för gjutning.",
            "Sara Snickare",
        ),
        entry(
            3,
            (2023, 10, 25),
            "1",
            2.0,
            WorkType::ChangeOrderWork,
            "Extra rördragning efter ändringsbeslut kunden.",
            "Karl Byggare",
        ),
    ]
}
