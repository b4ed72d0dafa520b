use std::sync::Arc;
use std::time::Duration;

use crate::generator::{
    traits::TextGenerator,
    raw::RawInference,
    typed::TypedInference,
    HF_INFERENCE_BASE,
};

/// Environment variables consulted for the API credential, in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["HF_TOKEN", "HUGGINGFACE_API_TOKEN"];

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Which provider-integration strategy the built generator uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationStyle {
    /// Hand-built JSON body, manual decoding of the reply bytes.
    Raw,
    /// Serde-typed request and response payloads.
    Typed,
}

/// Configuration for a text generator, assembled once at process start and
/// turned into a ready client with [`GeneratorConfig::build`].
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Model reference on the inference provider, e.g. `bigcode/starcoder2-3b`.
    pub model: String,

    /// Full request URL override. When unset the hosted inference API URL is
    /// derived from `model`. Useful for self-hosted endpoints.
    pub endpoint: Option<String>,

    /// Optional bearer credential. When absent the request is sent
    /// unauthenticated and the provider decides whether to serve it.
    pub api_token: Option<String>,

    /// Timeout installed on the HTTP client. Applies to the whole round trip.
    pub timeout: Duration,

    pub style: IntegrationStyle,
}

impl GeneratorConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            endpoint: None,
            api_token: None,
            timeout: DEFAULT_TIMEOUT,
            style: IntegrationStyle::Typed,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_style(mut self, style: IntegrationStyle) -> Self {
        self.style = style;
        self
    }

    /// Fill in the credential from the environment unless one was already
    /// provided. Read once; later changes to the environment are not seen.
    pub fn token_from_env(mut self) -> Self {
        self.api_token = self
            .api_token
            .or_else(|| TOKEN_ENV_VARS.iter().find_map(|name| std::env::var(name).ok()));
        self
    }

    fn url(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("{}/{}", HF_INFERENCE_BASE, self.model))
    }

    /// Construct the HTTP client and the selected adapter.
    pub fn build(self) -> Result<Arc<dyn TextGenerator>, ConfigError> {
        if self.model.is_empty() {
            return Err(ConfigError::MissingConfig("model reference".to_string()));
        }
        if let Some(endpoint) = self.endpoint.as_deref() {
            reqwest::Url::parse(endpoint)
                .map_err(|e| ConfigError::InvalidConfig(format!("endpoint: {e}")))?;
        }

        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let url = self.url();

        Ok(match self.style {
            IntegrationStyle::Raw => {
                let mut generator = RawInference::new(client, url);
                if let Some(token) = self.api_token {
                    generator = generator.with_api_token(token);
                }
                Arc::new(generator)
            }
            IntegrationStyle::Typed => {
                let mut generator = TypedInference::new(client, url);
                if let Some(token) = self.api_token {
                    generator = generator.with_api_token(token);
                }
                Arc::new(generator)
            }
        })
    }
}


#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Missing configuration: {0}")]
    MissingConfig(String),
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_hosted_api() {
        let config = GeneratorConfig::new("bigcode/starcoder2-3b");
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.style, IntegrationStyle::Typed);
        assert_eq!(
            config.url(),
            "https://api-inference.huggingface.co/models/bigcode/starcoder2-3b"
        );
    }

    #[test]
    fn endpoint_override_wins_over_model_url() {
        let config =
            GeneratorConfig::new("m").with_endpoint("http://localhost:8080/generate");
        assert_eq!(config.url(), "http://localhost:8080/generate");
    }

    #[test]
    fn empty_model_is_rejected() {
        let err = GeneratorConfig::new("").build().unwrap_err();
        assert!(matches!(err, ConfigError::MissingConfig(_)));
    }

    #[test]
    fn malformed_endpoint_is_rejected() {
        let err = GeneratorConfig::new("m")
            .with_endpoint("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfig(_)));
    }

    #[test]
    fn explicit_token_beats_environment() {
        unsafe { std::env::set_var("HF_TOKEN", "from-env") };
        let config = GeneratorConfig::new("m")
            .with_api_token("explicit")
            .token_from_env();
        assert_eq!(config.api_token.as_deref(), Some("explicit"));
        unsafe { std::env::remove_var("HF_TOKEN") };
    }

    #[test]
    fn missing_credential_stays_absent() {
        let config = GeneratorConfig::new("m").token_from_env();
        // Only meaningful when the variables are unset in the test environment.
        if TOKEN_ENV_VARS.iter().all(|name| std::env::var(name).is_err()) {
            assert!(config.api_token.is_none());
        }
    }
}
