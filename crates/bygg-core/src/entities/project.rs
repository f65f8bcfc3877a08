use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A construction project that hours are logged against.
///
/// Reference data only: projects come from a catalog and are never created or
/// removed while a session runs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Internal project code, e.g. `P2023-01`.
    pub code: String,
    pub client: String,
    pub location: String,
}
