//! Response types returned as JSON by `byggkoll` commands.
//!
//! These structs carry the chart-ready series and dashboard figures computed
//! by the aggregator, plus the per-project overview.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Project;
use crate::enums::WorkType;

/// Total hours for one project label (bar chart series point).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProjectHours {
    pub label: String,
    pub hours: f64,
}

/// Total hours for one work type (pie chart series point).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WorkTypeHours {
    pub work_type: WorkType,
    pub hours: f64,
}

/// Dashboard headline figures plus both chart series.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardSummary {
    pub total_hours: f64,
    pub entry_count: usize,
    pub average_hours: f64,
    pub by_project: Vec<ProjectHours>,
    pub by_work_type: Vec<WorkTypeHours>,
}

/// One catalog project with its accumulated hours.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProjectOverview {
    pub project: Project,
    pub total_hours: f64,
    pub entry_count: usize,
}
