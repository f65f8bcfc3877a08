//! # bygg-analysis
//!
//! AI analysis of logged time entries for ByggKoll.
//!
//! [`AnalysisClient`] builds a Swedish prompt from the entries, asks the
//! model for JSON matching a fixed schema, and accepts the answer only if it
//! validates against the `ai_analysis` schema from `bygg-schema`. Every failure
//! (no credential, transport, malformed or incomplete output) is logged and
//! surfaces as `None` from [`AnalysisClient::analyze`].
//!
//! The network is behind the [`GenerateContent`] trait so the pipeline can be
//! driven by a fake transport in tests.

mod client;
mod error;
pub mod gemini;
mod http;
pub mod prompt;
mod slot;

pub use client::AnalysisClient;
pub use error::AnalysisError;
pub use gemini::GeminiTransport;
pub use slot::AnalysisSlot;

/// One structured-output generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// Full prompt text.
    pub prompt: String,
    /// Schema the model must follow, in the service's schema dialect.
    pub response_schema: serde_json::Value,
}

/// A text generation backend.
///
/// Implementations return the raw generated text; they do not interpret it.
pub trait GenerateContent: Send + Sync {
    /// Send `request` and return the generated text.
    fn generate(
        &self,
        request: &GenerateRequest,
    ) -> impl Future<Output = Result<String, AnalysisError>> + Send;
}
