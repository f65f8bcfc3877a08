//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_worker() -> String {
    String::from("Karl Byggare")
}

const fn default_seed_sample_data() -> bool {
    true
}

/// Default result limit.
const fn default_limit() -> u32 {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Worker name pre-filled when adding entries in the shell.
    #[serde(default = "default_worker")]
    pub default_worker: String,

    /// Whether a new session starts with the three sample reports.
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,

    /// Default row limit for list/search output.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_worker: default_worker(),
            seed_sample_data: default_seed_sample_data(),
            default_limit: default_limit(),
        }
    }
}
