//! Gemini analysis service configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_model() -> String {
    String::from("gemini-3-flash-preview")
}

/// Default Generative Language API base URL.
fn default_endpoint() -> String {
    String::from("https://generativelanguage.googleapis.com/v1beta")
}

const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`. Empty means not configured.
    #[serde(default)]
    pub api_key: String,

    /// Model name used in `models/{model}:generateContent`.
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL, without trailing `/models`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whole-request timeout for one analysis call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Check if a credential is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the fields needed to send a request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the API key is missing and
    /// [`ConfigError::InvalidValue`] for an unusable endpoint, model, or timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: String::from("gemini"),
            });
        }
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: String::from("gemini.endpoint"),
                reason: format!("'{}' is not an http(s) URL", self.endpoint),
            });
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: String::from("gemini.model"),
                reason: String::from("model name is empty"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: String::from("gemini.timeout_secs"),
                reason: String::from("timeout must be at least one second"),
            });
        }
        Ok(())
    }

    /// Full `generateContent` URL for the configured model.
    #[must_use]
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> GeminiConfig {
        GeminiConfig {
            api_key: "AIza-test".into(),
            ..Default::default()
        }
    }

    #[test]
    fn default_is_not_configured() {
        let config = GeminiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn whitespace_key_is_not_configured() {
        let config = GeminiConfig {
            api_key: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn configured_passes_validation() {
        assert!(configured().validate().is_ok());
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let config = GeminiConfig {
            endpoint: "ftp://example.com".into(),
            ..configured()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("gemini.endpoint"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = GeminiConfig {
            timeout_secs: 0,
            ..configured()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn generate_content_url_strips_trailing_slash() {
        let config = GeminiConfig {
            endpoint: "http://localhost:8080/v1beta/".into(),
            model: "gemini-test".into(),
            ..configured()
        };
        assert_eq!(
            config.generate_content_url(),
            "http://localhost:8080/v1beta/models/gemini-test:generateContent"
        );
    }
}
