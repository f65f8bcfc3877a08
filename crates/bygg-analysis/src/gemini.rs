//! Gemini `generateContent` transport.
//!
//! Sends one prompt with a structured-output schema and returns the raw text
//! of the first candidate. Parsing that text is the client's job.

use bygg_config::{ConfigError, GeminiConfig};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::AnalysisError;
use crate::http::check_response;
use crate::{GenerateContent, GenerateRequest};

const USER_AGENT: &str = concat!("byggkoll/", env!("CARGO_PKG_VERSION"));

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    /// Absent when the candidate was blocked.
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl<'a> GenerateContentBody<'a> {
    fn new(request: &'a GenerateRequest) -> Self {
        Self {
            contents: [Content {
                role: "user",
                parts: [Part {
                    text: &request.prompt,
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: &request.response_schema,
            },
        }
    }
}

/// Concatenated text parts of the first candidate.
fn first_candidate_text(response: GenerateContentResponse) -> Result<String, AnalysisError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyResponse);
    }
    Ok(text)
}

/// Output schema in the service's OpenAPI subset.
///
/// All three properties are required; the field descriptions steer the model
/// and are kept in Swedish like the prompt.
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "Övergripande sammanfattning"
            },
            "efficiency": {
                "type": "STRING",
                "description": "Analys av effektivitet"
            },
            "recommendations": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Lista på åtgärder"
            }
        },
        "required": ["summary", "efficiency", "recommendations"],
        "propertyOrdering": ["summary", "efficiency", "recommendations"]
    })
}

// ── Transport ──────────────────────────────────────────────────────

/// HTTPS transport to the Gemini API.
pub struct GeminiTransport {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiTransport {
    /// Build a transport for `config`.
    ///
    /// A missing API key is not an error here; it is reported on each
    /// [`generate`](GenerateContent::generate) call before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, AnalysisError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub const fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn ensure_ready(&self) -> Result<(), AnalysisError> {
        self.config.validate().map_err(|e| match e {
            ConfigError::NotConfigured { .. } => AnalysisError::MissingApiKey,
            other => AnalysisError::Config(other),
        })
    }
}

impl GenerateContent for GeminiTransport {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, AnalysisError> {
        self.ensure_ready()?;

        let url = self.config.generate_content_url();
        tracing::debug!(model = %self.config.model, prompt_len = request.prompt.len(), "sending generateContent request");

        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.config.api_key.trim())
            .json(&GenerateContentBody::new(request))
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body: GenerateContentResponse = resp.json().await?;
        first_candidate_text(body)
    }
}
