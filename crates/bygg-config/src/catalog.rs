//! Project catalog override.

use bygg_core::catalog::Catalog;
use bygg_core::entities::Project;
use serde::{Deserialize, Serialize};

/// Projects declared in configuration. An empty list keeps the builtin catalog.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl CatalogConfig {
    /// Resolve the catalog the session should use.
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        if self.projects.is_empty() {
            Catalog::builtin()
        } else {
            Catalog::new(self.projects.clone())
        }
    }
}
