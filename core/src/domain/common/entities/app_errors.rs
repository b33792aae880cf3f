use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("No Gemini API key provided. Set GEMINI_API_KEY or pass an api_key with the request.")]
    MissingApiKey,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("No text could be extracted from the image")]
    NoTextFound,

    #[error("Invalid input: {0}")]
    Invalid(String),
}
