use async_trait::async_trait;
use serde::Serialize;

/// Defines errors that can occur at the oracle boundary.
///
/// None of these are fatal to a classification; the pipeline logs them and
/// falls back to the heuristic baseline.
#[derive(Debug, thiserror::Error, Serialize, Clone, PartialEq)]
pub enum OracleError {
    /// No credential or endpoint was configured for the oracle.
    #[error("Oracle not configured: {0}")]
    NotConfigured(String),
    /// The request never produced an HTTP response (connect, TLS, timeout).
    #[error("Oracle transport failed: {0}")]
    Transport(String),
    /// The oracle answered with a non-success status code.
    #[error("Oracle request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body did not have the expected shape.
    #[error("Oracle response could not be decoded: {0}")]
    Decode(String),
    /// The oracle answered, but with no text at all.
    #[error("Oracle returned an empty response")]
    EmptyResponse,
}

/// Defines the public interface for a text-generation oracle.
///
/// This trait abstracts the specific backend, allowing a remote API, a local
/// model or a test double to be used interchangeably.
#[async_trait]
pub trait SoilOracle: Send + Sync + 'static {
    /// Generates a complete, free-form text response for a prompt.
    async fn generate(&self, prompt: String) -> Result<String, OracleError>;
}
