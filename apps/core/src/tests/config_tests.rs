//! Config Tests
//!
//! `OracleConfig::from_env` under controlled environments.

use crate::config::{
    OracleConfig, API_KEY_VAR, BASE_URL_VAR, DEFAULT_MODEL, MODEL_VAR, TEMPERATURE_VAR, TIMEOUT_VAR,
};
use crate::error::AppError;
use std::time::Duration;

#[test]
fn test_from_env_defaults() {
    temp_env::with_vars(
        [
            (API_KEY_VAR, None::<&str>),
            (MODEL_VAR, None),
            (BASE_URL_VAR, None),
            (TEMPERATURE_VAR, None),
            (TIMEOUT_VAR, None),
        ],
        || {
            let config = OracleConfig::from_env().unwrap();

            assert!(!config.is_enabled());
            assert_eq!(config.model, DEFAULT_MODEL);
            assert_eq!(config.base_url.as_str(), "https://generativelanguage.googleapis.com/");
            assert_eq!(config.temperature, None);
            assert_eq!(config.request_timeout, None);
        },
    );
}

#[test]
fn test_from_env_reads_everything() {
    temp_env::with_vars(
        [
            (API_KEY_VAR, Some("abc123")),
            (MODEL_VAR, Some("gemini-1.5-pro")),
            (BASE_URL_VAR, Some("http://localhost:8080/gateway")),
            (TEMPERATURE_VAR, Some("0.2")),
            (TIMEOUT_VAR, Some("15")),
        ],
        || {
            let config = OracleConfig::from_env().unwrap();

            assert_eq!(config.api_key.as_deref(), Some("abc123"));
            assert_eq!(config.model, "gemini-1.5-pro");
            assert_eq!(config.base_url.as_str(), "http://localhost:8080/gateway/");
            assert_eq!(config.temperature, Some(0.2));
            assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        },
    );
}

#[test]
fn test_from_env_rejects_bad_temperature() {
    temp_env::with_vars([(TEMPERATURE_VAR, Some("warm")), (BASE_URL_VAR, None)], || {
        assert!(matches!(OracleConfig::from_env(), Err(AppError::Config(_))));
    });
}

#[test]
fn test_from_env_rejects_out_of_range_temperature() {
    temp_env::with_vars([(TEMPERATURE_VAR, Some("3.5")), (BASE_URL_VAR, None)], || {
        assert!(matches!(OracleConfig::from_env(), Err(AppError::Config(_))));
    });
}

#[test]
fn test_from_env_rejects_bad_base_url() {
    temp_env::with_vars([(BASE_URL_VAR, Some("not a url"))], || {
        assert!(matches!(OracleConfig::from_env(), Err(AppError::Config(_))));
    });
}

#[test]
fn test_from_env_rejects_bad_timeout() {
    temp_env::with_vars([(TIMEOUT_VAR, Some("soon")), (BASE_URL_VAR, None)], || {
        assert!(matches!(OracleConfig::from_env(), Err(AppError::Config(_))));
    });
}
