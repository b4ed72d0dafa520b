use serde_json::Value as JsonValue;
use futures::{FutureExt, future::BoxFuture};

use crate::generator::{
    traits::TextGenerator,
    error::GeneratorError,
    GeneratorResult,
    TASK_TEXT_GENERATION,
};

/// Raw-POST integration: the request body is hand-built JSON and the reply
/// bytes are decoded manually, without typed payload structs.
#[derive(Clone)]
pub struct RawInference {
    pub(crate) client: reqwest::Client,
    pub(crate) url: String,
    pub(crate) api_token: Option<String>,
}

impl RawInference {
    /// Create a raw adapter posting to `url`, with no credential attached.
    pub fn new(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            api_token: None,
        }
    }

    /// Attach a bearer credential to every request.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }
}

impl std::fmt::Debug for RawInference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawInference")
            .field("url", &self.url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl TextGenerator for RawInference {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        max_new_tokens: u32,
    ) -> BoxFuture<'a, GeneratorResult<String>> {
        async move {
            let body = serde_json::json!({
                "inputs": prompt,
                "parameters": { "max_new_tokens": max_new_tokens },
                "task": TASK_TEXT_GENERATION,
            });

            tracing::debug!(url = %self.url, "posting generation request");
            let mut request = self.client.post(&self.url).json(&body);
            if let Some(token) = self.api_token.as_deref() {
                request = request.bearer_auth(token);
            }
            let response = request.send().await?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(GeneratorError::from_status(status, message));
            }

            let raw = response.bytes().await?;
            let value: JsonValue = serde_json::from_slice(&raw)?;
            // Reply is a one-element array for hosted models, occasionally a
            // bare object for self-hosted endpoints.
            let first = match &value {
                JsonValue::Array(items) => items.first().ok_or_else(|| {
                    GeneratorError::InvalidResponse("empty generation array".to_string())
                })?,
                other => other,
            };
            first
                .get("generated_text")
                .and_then(JsonValue::as_str)
                .map(str::to_string)
                .ok_or_else(|| {
                    GeneratorError::InvalidResponse("missing generated_text field".to_string())
                })
        }
        .boxed()
    }
}
