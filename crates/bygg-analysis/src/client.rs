//! Analysis client: prompt in, validated [`AiAnalysis`] out.

use bygg_config::GeminiConfig;
use bygg_core::catalog::Catalog;
use bygg_core::entities::{AiAnalysis, TimeEntry};
use bygg_schema::{AI_ANALYSIS, SchemaRegistry};

use crate::error::AnalysisError;
use crate::gemini::{GeminiTransport, response_schema};
use crate::prompt::build_prompt;
use crate::{GenerateContent, GenerateRequest};

/// Runs one analysis per call over a snapshot of entries.
///
/// The client holds no per-call state, so it can be shared behind an `Arc`
/// and invoked from a spawned task.
pub struct AnalysisClient<T = GeminiTransport> {
    transport: T,
    schemas: SchemaRegistry,
}

impl AnalysisClient<GeminiTransport> {
    /// Client backed by the Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] if the HTTP client or the schema registry
    /// cannot be built. A missing API key is reported per call, not here.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, AnalysisError> {
        Self::new(GeminiTransport::new(config.clone())?)
    }
}

impl<T: GenerateContent> AnalysisClient<T> {
    /// Wrap `transport` with a freshly built schema registry.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Schema`] if the registry cannot be built.
    pub fn new(transport: T) -> Result<Self, AnalysisError> {
        Ok(Self::with_schemas(transport, SchemaRegistry::new()?))
    }

    #[must_use]
    pub const fn with_schemas(transport: T, schemas: SchemaRegistry) -> Self {
        Self { transport, schemas }
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Analyze `entries`, resolving project names through `catalog`.
    ///
    /// Returns `None` on any failure; the cause is logged at `warn`.
    pub async fn analyze(&self, entries: &[TimeEntry], catalog: &Catalog) -> Option<AiAnalysis> {
        match self.try_analyze(entries, catalog).await {
            Ok(analysis) => Some(analysis),
            Err(e) => {
                tracing::warn!(error = %e, "Gemini analysis failed");
                None
            }
        }
    }

    /// Like [`analyze`](Self::analyze) but keeps the failure cause.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] for a missing credential, transport or
    /// service errors, and generated text that is not a valid analysis.
    pub async fn try_analyze(
        &self,
        entries: &[TimeEntry],
        catalog: &Catalog,
    ) -> Result<AiAnalysis, AnalysisError> {
        let request = GenerateRequest {
            prompt: build_prompt(entries, catalog),
            response_schema: response_schema(),
        };
        tracing::debug!(entries = entries.len(), "requesting AI analysis");

        let text = self.transport.generate(&request).await?;
        let analysis = self.parse(&text)?;

        tracing::info!(
            recommendations = analysis.recommendations.len(),
            "AI analysis received"
        );
        Ok(analysis)
    }

    /// Strictly parse generated text into an [`AiAnalysis`].
    ///
    /// The text must be a JSON object with exactly `summary`, `efficiency`,
    /// and `recommendations`; anything else is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Parse`] for text that is not JSON and
    /// [`AnalysisError::Schema`] for JSON that breaks the contract.
    pub fn parse(&self, text: &str) -> Result<AiAnalysis, AnalysisError> {
        let value: serde_json::Value =
            serde_json::from_str(text.trim()).map_err(|e| AnalysisError::Parse(e.to_string()))?;
        self.schemas.validate(AI_ANALYSIS, &value)?;
        serde_json::from_value(value).map_err(|e| AnalysisError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use bygg_schema::SchemaError;
    use pretty_assertions::assert_eq;

    use super::*;

    struct Unused;

    impl GenerateContent for Unused {
        async fn generate(&self, _request: &GenerateRequest) -> Result<String, AnalysisError> {
            Err(AnalysisError::EmptyResponse)
        }
    }

    fn client() -> AnalysisClient<Unused> {
        AnalysisClient::new(Unused).unwrap()
    }

    #[test]
    fn parses_complete_object() {
        let analysis = client()
            .parse(
                r#"{"summary":"Bra framdrift","efficiency":"Hög","recommendations":["Följ upp ÄTA","Planera övertid"]}"#,
            )
            .unwrap();
        assert_eq!(
            analysis,
            AiAnalysis {
                summary: "Bra framdrift".into(),
                efficiency: "Hög".into(),
                recommendations: vec!["Följ upp ÄTA".into(), "Planera övertid".into()],
            }
        );
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let text = "\n  {\"summary\":\"s\",\"efficiency\":\"e\",\"recommendations\":[]}\n";
        assert!(client().parse(text).is_ok());
    }

    #[test]
    fn rejects_non_json() {
        let err = client().parse("Här är min analys: allt ser bra ut").unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(_)));
    }

    #[test]
    fn rejects_json_wrapped_in_markdown_fence() {
        let text = "```json\n{\"summary\":\"s\",\"efficiency\":\"e\",\"recommendations\":[]}\n```";
        assert!(matches!(client().parse(text), Err(AnalysisError::Parse(_))));
    }

    #[test]
    fn rejects_missing_recommendations() {
        let err = client()
            .parse(r#"{"summary":"s","efficiency":"e"}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Schema(SchemaError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn rejects_extra_fields_and_non_string_items() {
        let c = client();
        assert!(
            c.parse(r#"{"summary":"s","efficiency":"e","recommendations":[],"score":3}"#)
                .is_err()
        );
        assert!(
            c.parse(r#"{"summary":"s","efficiency":"e","recommendations":["a",2]}"#)
                .is_err()
        );
        assert!(
            c.parse(r#"{"summary":null,"efficiency":"e","recommendations":[]}"#)
                .is_err()
        );
    }
}
