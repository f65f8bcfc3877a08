//! Project catalog: ordered reference data with lookup by id.
//!
//! The core only depends on this interface, so the builtin list can be swapped
//! for a configured one without touching store, aggregator, or analysis code.

use serde::{Deserialize, Serialize};

use crate::entities::Project;

/// Label used wherever a time entry references a project that is not in the
/// catalog.
pub const UNKNOWN_PROJECT_LABEL: &str = "Okänt";

/// Ordered, read-only collection of projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    #[must_use]
    pub const fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// The four active projects shipped with the dashboard.
    #[must_use]
    pub fn builtin() -> Self {
        let project = |id: &str, name: &str, code: &str, client: &str, location: &str| Project {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            client: client.to_string(),
            location: location.to_string(),
        };

        Self::new(vec![
            project("1", "Brf Ekbacken", "P2023-01", "Skanska", "Solna"),
            project("2", "Villa Granhult", "V2023-44", "Andersson Privat", "Täby"),
            project(
                "3",
                "Stadshuset Renovering",
                "R2024-05",
                "Stockholms Stad",
                "Centrum",
            ),
            project("4", "Gärdets Skola - Etapp 2", "S2023-12", "SISAB", "Gärdet"),
        ])
    }

    /// Look up a project by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Display name for a project id, or [`UNKNOWN_PROJECT_LABEL`] when the id
    /// does not resolve.
    #[must_use]
    pub fn project_name(&self, id: &str) -> &str {
        self.find(id)
            .map_or(UNKNOWN_PROJECT_LABEL, |project| project.name.as_str())
    }

    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Project;
    type IntoIter = std::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
