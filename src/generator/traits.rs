use std::sync::Arc;
use futures::future::BoxFuture;
use crate::generator::GeneratorResult;

/// Convert a concrete G into an `Arc<dyn TextGenerator + Send + Sync>`.
/// Convenience so callers can do `generator_to_arc_dyn(RawInference::new(...))`.
pub fn generator_to_arc_dyn<G>(generator: G) -> Arc<dyn TextGenerator + Send + Sync>
where
    G: 'static + TextGenerator + Send + Sync,
{
    Arc::new(generator)
}

/// Core text-generation trait. This version uses BoxFuture with an explicit
/// lifetime so implementations can borrow the input `prompt` and avoid
/// cloning it into the returned future.
///
/// Note:
/// - We intentionally do not use `async_trait` here so that returned futures
///   can be annotated with the input lifetime `'a`.
/// - Implementations hold only immutable configuration; a call mutates no
///   local state and may run concurrently with any other call.
pub trait TextGenerator: Send + Sync + std::fmt::Debug {
    /// Send one prompt and return the provider's generated text verbatim.
    /// The returned future may borrow from `prompt`. Blocks (awaits) for the
    /// full network round trip; the only timeout is the one installed on the
    /// underlying HTTP client at construction time.
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        max_new_tokens: u32,
    ) -> BoxFuture<'a, GeneratorResult<String>>;
}
