//! Cross-cutting error types for ByggKoll.
//!
//! Domain-specific errors (e.g., `AnalysisError`, `ConfigError`) are defined in
//! their respective crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any ByggKoll crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation (unknown work type, malformed date, etc.).
    #[error("Validation error: {0}")]
    Validation(String),
}
