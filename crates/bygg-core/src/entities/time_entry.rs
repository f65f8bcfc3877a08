use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::WorkType;

/// A single logged block of work.
///
/// `project_id` is a soft reference into the project catalog; it is not
/// required to resolve.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TimeEntry {
    pub id: String,
    pub date: NaiveDate,
    pub project_id: String,
    pub hours: f64,
    pub work_type: WorkType,
    pub description: String,
    pub worker_name: String,
}

impl TimeEntry {
    /// Attach an identifier to a new entry.
    #[must_use]
    pub fn from_new(id: String, entry: NewTimeEntry) -> Self {
        Self {
            id,
            date: entry.date,
            project_id: entry.project_id,
            hours: entry.hours,
            work_type: entry.work_type,
            description: entry.description,
            worker_name: entry.worker_name,
        }
    }

    /// Hours usable for summation: non-finite or negative values count as 0.
    #[must_use]
    pub fn effective_hours(&self) -> f64 {
        if self.hours.is_finite() && self.hours > 0.0 {
            self.hours
        } else {
            0.0
        }
    }
}

/// A time entry as submitted, before the store assigns an identifier.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewTimeEntry {
    pub date: NaiveDate,
    pub project_id: String,
    pub hours: f64,
    pub work_type: WorkType,
    pub description: String,
    pub worker_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(hours: f64) -> TimeEntry {
        TimeEntry::from_new(
            "ent-00000001".into(),
            NewTimeEntry {
                date: NaiveDate::from_ymd_opt(2023, 10, 24).unwrap(),
                project_id: "1".into(),
                hours,
                work_type: WorkType::Normal,
                description: "Montering".into(),
                worker_name: "Karl Byggare".into(),
            },
        )
    }

    #[test]
    fn effective_hours_passes_positive_values() {
        assert!((entry(7.5).effective_hours() - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn effective_hours_coerces_malformed_values() {
        assert_eq!(entry(f64::NAN).effective_hours(), 0.0);
        assert_eq!(entry(f64::INFINITY).effective_hours(), 0.0);
        assert_eq!(entry(-3.0).effective_hours(), 0.0);
        assert_eq!(entry(0.0).effective_hours(), 0.0);
    }

    #[test]
    fn from_new_keeps_all_fields() {
        let stored = entry(8.0);
        assert_eq!(stored.id, "ent-00000001");
        assert_eq!(stored.project_id, "1");
        assert_eq!(stored.work_type, WorkType::Normal);
        assert_eq!(stored.worker_name, "Karl Byggare");
    }
}
