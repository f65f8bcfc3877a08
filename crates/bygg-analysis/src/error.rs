//! Analysis error types.
//!
//! These are diagnostics only: the public [`analyze`](crate::AnalysisClient::analyze)
//! boundary logs them and collapses every variant to "no result".

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No credential configured; no request was sent.
    #[error("Gemini API key is not configured")]
    MissingApiKey,

    /// Configuration present but unusable (endpoint, model, timeout).
    #[error(transparent)]
    Config(#[from] bygg_config::ConfigError),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The response carried no candidate text.
    #[error("response contained no generated text")]
    EmptyResponse,

    /// Generated text was not valid JSON or did not map onto the result type.
    #[error("parse error: {0}")]
    Parse(String),

    /// Generated JSON violated the output schema.
    #[error("schema violation: {0}")]
    Schema(#[from] bygg_schema::SchemaError),

    /// An analysis is already in flight for this slot.
    #[error("an analysis is already in progress")]
    Busy,
}
