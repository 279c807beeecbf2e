use thiserror::Error;

/// Application-wide error type.
///
/// Oracle failures never appear here: the classifier turns every
/// `OracleError` into an `OracleStatus` on the result.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents survey input that cannot be classified (e.g., a required field is missing).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., an unparsable environment variable).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("Survey is not a valid JSON object: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Config(format!("HTTP client error: {}", err))
    }
}
