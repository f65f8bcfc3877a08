//! Entity structs for all ByggKoll domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! output and schema validation.

mod analysis;
mod project;
mod time_entry;

pub use analysis::AiAnalysis;
pub use project::Project;
pub use time_entry::{NewTimeEntry, TimeEntry};
