use reqwest::StatusCode;


#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Authentication rejected: {0}")]
    Auth(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Provider returned status {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GeneratorError {
    /// Classify a non-success HTTP reply by status code.
    pub(crate) fn from_status(status: StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 | 403 => GeneratorError::Auth(message),
            404 => GeneratorError::ModelNotFound(message),
            code => GeneratorError::Provider { status: code, message },
        }
    }
}
