mod config_warnings;
mod session;

pub use config_warnings::warn_unconfigured;
pub use session::{AnalysisStatus, Session};
