pub use crate::config::{DEFAULT_TIMEOUT, GeneratorConfig, IntegrationStyle, TOKEN_ENV_VARS};
pub use crate::error::{Error, Result};
pub use crate::generator::{
    DEFAULT_MAX_NEW_TOKENS, GenerateOutput, GenerateParameters, GenerateRequest,
    GenerateResponse, GeneratorResult,
};
pub use crate::generator::error::GeneratorError;
pub use crate::generator::raw::RawInference;
pub use crate::generator::traits::{TextGenerator, generator_to_arc_dyn};
pub use crate::generator::typed::TypedInference;
pub use crate::runner::PromptRunner;
