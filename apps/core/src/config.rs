//! Oracle configuration.
//!
//! The library never reads process state on its own: the binary calls
//! `OracleConfig::from_env()` once and hands the result to the oracle adapter.

use std::env;
use std::fmt;
use std::time::Duration;
use url::Url;
use validator::Validate;

use crate::error::AppError;

pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
pub const MODEL_VAR: &str = "SOIL_ORACLE_MODEL";
pub const BASE_URL_VAR: &str = "SOIL_ORACLE_BASE_URL";
pub const TEMPERATURE_VAR: &str = "SOIL_ORACLE_TEMPERATURE";
pub const TIMEOUT_VAR: &str = "SOIL_ORACLE_TIMEOUT_SECS";

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Represents the configuration of the external text-generation oracle.
#[derive(Clone, Validate)]
pub struct OracleConfig {
    /// Credential for the oracle. `None` disables the oracle entirely.
    pub api_key: Option<String>,
    /// The model identifier to address.
    #[validate(length(min = 1))]
    pub model: String,
    /// Service root; always ends with `/` so relative joins keep its path.
    pub base_url: Url,
    /// Sampling temperature. Value between 0.0 and 2.0.
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: Option<f32>,
    /// Transport-level timeout. `None` means the HTTP client default (no timeout).
    pub request_timeout: Option<Duration>,
}

impl fmt::Debug for OracleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OracleConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url.as_str())
            .field("temperature", &self.temperature)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl OracleConfig {
    /// Creates a validated configuration with no temperature and no timeout.
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, AppError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let config = Self {
            api_key: api_key
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            model: model.into(),
            base_url,
            temperature: None,
            request_timeout: None,
        };
        config.ensure_valid()?;
        Ok(config)
    }

    /// Reads the configuration from environment variables, applying defaults.
    ///
    /// A missing `GOOGLE_API_KEY` is not an error; it yields a config whose
    /// `api_key` is `None`. Malformed values are.
    pub fn from_env() -> Result<Self, AppError> {
        let model = read_var(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = read_var(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(read_var(API_KEY_VAR), model, &base_url)?;

        if let Some(raw) = read_var(TEMPERATURE_VAR) {
            let temperature = raw.parse::<f32>().map_err(|e| {
                AppError::Config(format!("{} must be a number, got '{}': {}", TEMPERATURE_VAR, raw, e))
            })?;
            config.temperature = Some(temperature);
        }

        if let Some(raw) = read_var(TIMEOUT_VAR) {
            let secs = raw.parse::<u64>().map_err(|e| {
                AppError::Config(format!("{} must be whole seconds, got '{}': {}", TIMEOUT_VAR, raw, e))
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        config.ensure_valid()?;
        Ok(config)
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Whether an oracle adapter can be built from this configuration.
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    fn ensure_valid(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|e| AppError::Config(format!("Invalid oracle configuration: {}", e)))
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_appends_trailing_slash() {
        let config = OracleConfig::new(None, "m", "https://example.com/api").unwrap();
        assert_eq!(config.base_url.as_str(), "https://example.com/api/");
    }

    #[test]
    fn test_blank_api_key_is_disabled() {
        let config = OracleConfig::new(Some("   ".to_string()), "m", DEFAULT_BASE_URL).unwrap();
        assert!(!config.is_enabled());
    }

    #[test]
    fn test_empty_model_is_rejected() {
        let result = OracleConfig::new(None, "", DEFAULT_BASE_URL);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = OracleConfig::new(Some("secret-key".to_string()), "m", DEFAULT_BASE_URL).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
