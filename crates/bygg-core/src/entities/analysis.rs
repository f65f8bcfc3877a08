use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Narrative assessment produced by the AI analysis service.
///
/// Unknown fields are rejected so the generated schema carries
/// `additionalProperties: false` and a response with extra keys fails
/// validation instead of being silently trimmed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AiAnalysis {
    /// Overall summary of the logged work.
    pub summary: String,
    /// Assessment of efficiency and deviations.
    pub efficiency: String,
    /// Concrete actions for project management, in priority order.
    pub recommendations: Vec<String>,
}
