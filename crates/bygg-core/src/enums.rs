//! Work types, display badges, and the analysis state machine.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `WorkType` additionally accepts the Swedish display labels on input so that
//! records exported from the web dashboard deserialize unchanged.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// WorkType
// ---------------------------------------------------------------------------

/// Category of logged work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    #[serde(alias = "Normaltid")]
    Normal,
    #[serde(alias = "Övertid")]
    Overtime,
    #[serde(alias = "Restid")]
    Travel,
    #[serde(alias = "Frånvaro")]
    Absence,
    /// ÄTA-arbete: work outside the contracted scope after a change order.
    #[serde(alias = "ÄTA-arbete")]
    ChangeOrderWork,
}

impl WorkType {
    /// Every variant, in form/display order.
    pub const ALL: [Self; 5] = [
        Self::Normal,
        Self::Overtime,
        Self::Travel,
        Self::Absence,
        Self::ChangeOrderWork,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Overtime => "overtime",
            Self::Travel => "travel",
            Self::Absence => "absence",
            Self::ChangeOrderWork => "change_order_work",
        }
    }

    /// Swedish label shown to users and embedded in analysis prompts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normaltid",
            Self::Overtime => "Övertid",
            Self::Travel => "Restid",
            Self::Absence => "Frånvaro",
            Self::ChangeOrderWork => "ÄTA-arbete",
        }
    }

    /// Badge colour used when rendering the work type.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn badge(self) -> Badge {
        match self {
            Self::Normal => Badge::Green,
            Self::ChangeOrderWork => Badge::Amber,
            Self::Overtime => Badge::Blue,
            Self::Travel => Badge::Blue,
            Self::Absence => Badge::Blue,
        }
    }

    /// Extra spellings accepted by [`FromStr`], already normalized.
    const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Normal => &[],
            Self::Overtime => &["overtid"],
            Self::Travel => &[],
            Self::Absence => &["franvaro"],
            Self::ChangeOrderWork => &["ata", "äta", "ata_arbete", "change_order"],
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkType {
    type Err = CoreError;

    /// Accepts the snake_case name (hyphens allowed), the Swedish label, or a
    /// known alias, case-insensitively.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let lowered = trimmed.to_lowercase();
        let normalized = lowered.replace('-', "_");

        Self::ALL
            .into_iter()
            .find(|work_type| {
                work_type.as_str() == normalized
                    || work_type.label().to_lowercase() == lowered
                    || work_type.aliases().contains(&normalized.as_str())
            })
            .ok_or_else(|| CoreError::Validation(format!("unknown work type '{trimmed}'")))
    }
}

// ---------------------------------------------------------------------------
// Badge
// ---------------------------------------------------------------------------

/// Display colour class for a work type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Green,
    Amber,
    Blue,
}

impl Badge {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Blue => "blue",
        }
    }

    /// ANSI SGR colour code for terminal output.
    #[must_use]
    pub const fn ansi_code(self) -> &'static str {
        match self {
            Self::Green => "32",
            Self::Amber => "33",
            Self::Blue => "34",
        }
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AnalysisState
// ---------------------------------------------------------------------------

/// Lifecycle of one AI analysis invocation.
///
/// ```text
/// idle → requesting → succeeded → requesting (next invocation)
///                   → failed    → requesting (next invocation)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisState {
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

impl AnalysisState {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle | Self::Succeeded | Self::Failed => &[Self::Requesting],
            Self::Requesting => &[Self::Succeeded, Self::Failed],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Requesting => "requesting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for AnalysisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
