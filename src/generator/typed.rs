use futures::{FutureExt, future::BoxFuture};

use crate::generator::{
    traits::TextGenerator,
    error::GeneratorError,
    GenerateOutput,
    GenerateRequest,
    GeneratorResult,
};

/// Typed integration: serde-derived request and response payloads instead of
/// hand-built JSON. Same wire contract as [`RawInference`].
///
/// [`RawInference`]: crate::generator::raw::RawInference
#[derive(Clone)]
pub struct TypedInference {
    pub(crate) client: reqwest::Client,
    pub(crate) url: String,
    pub(crate) api_token: Option<String>,
}

impl TypedInference {
    /// Create a typed adapter posting to `url`, with no credential attached.
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

impl std::fmt::Debug for TypedInference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedInference")
            .field("url", &self.url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl TextGenerator for TypedInference {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        max_new_tokens: u32,
    ) -> BoxFuture<'a, GeneratorResult<String>> {
        async move {
            let payload = GenerateRequest::new(prompt, max_new_tokens);

            tracing::debug!(url = %self.url, "posting generation request");
            let mut request = self.client.post(&self.url).json(&payload);
            if let Some(token) = self.api_token.as_deref() {
                request = request.bearer_auth(token);
            }
            let response = request.send().await?;

            let status = response.status();
            let body = response.text().await?;
            if !status.is_success() {
                return Err(GeneratorError::from_status(status, body));
            }

            let output: GenerateOutput = serde_json::from_str(&body)?;
            output.into_text()
        }
        .boxed()
    }
}
