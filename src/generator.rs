pub mod traits;
pub mod raw;
pub mod typed;
pub mod error;


use serde::{Serialize, Deserialize};

use error::GeneratorError;

/// Generation-length cap applied to every request issued by the runner.
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 200;

/// Task designation carried in every request body.
pub const TASK_TEXT_GENERATION: &str = "text-generation";

/// Base URL of the hosted inference API. The model id is appended as the
/// final path segment.
pub const HF_INFERENCE_BASE: &str = "https://api-inference.huggingface.co/models";

/// Payload of a single text-generation call. Built fresh per call and
/// discarded after the round trip.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub inputs: String,
    pub parameters: GenerateParameters,
    pub task: &'static str,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>, max_new_tokens: u32) -> Self {
        Self {
            inputs: prompt.into(),
            parameters: GenerateParameters { max_new_tokens },
            task: TASK_TEXT_GENERATION,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerateParameters {
    pub max_new_tokens: u32,
}

/// One element of the provider's reply.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub generated_text: String,
}

/// The provider replies with either a one-element array or a bare object,
/// depending on the hosted model.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GenerateOutput {
    Many(Vec<GenerateResponse>),
    One(GenerateResponse),
}

impl GenerateOutput {
    /// Take the generated text out of the first (or only) element.
    pub fn into_text(self) -> Result<String, GeneratorError> {
        match self {
            GenerateOutput::One(item) => Ok(item.generated_text),
            GenerateOutput::Many(items) => items
                .into_iter()
                .next()
                .map(|item| item.generated_text)
                .ok_or_else(|| GeneratorError::InvalidResponse("empty generation array".to_string())),
        }
    }
}

/// Result type for generator operations.
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;
