use std::sync::Arc;

use crate::generator::{
    traits::TextGenerator,
    DEFAULT_MAX_NEW_TOKENS,
    GeneratorResult,
};

/// Single-shot prompt runner: holds a generator and forwards one prompt per
/// call with the fixed generation-length cap.
pub struct PromptRunner {
    generator: Arc<dyn TextGenerator>,
}

impl PromptRunner {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Send `prompt` to the provider and return the generated text
    /// unmodified. Any prompt goes through as-is, the empty string included.
    /// Errors from the generator propagate untouched; there is no retry and
    /// no fallback.
    pub async fn run(&self, prompt: &str) -> GeneratorResult<String> {
        self.generator.generate(prompt, DEFAULT_MAX_NEW_TOKENS).await
    }
}
