//! Test Module
//!
//! Cross-module test suite for the soil classification pipeline.
//!
//! ## Test Categories
//! - `classifier_tests`: End-to-end pipeline behaviour with scripted oracles
//! - `extractor_tests`: Response extraction tiers and their ordering
//! - `chaos_test`: Oracle failures, garbage output and concurrent load
//! - `oracle_tests`: Pipeline over the HTTP adapter against a mock server
//! - `config_tests`: Environment-driven configuration

pub mod config_tests;

use crate::models::SurveyAnswers;
use crate::oracle::{OracleError, SoilOracle};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// --- Shared Mock Components ---

/// Oracle double that returns a fixed reply and records every prompt.
#[derive(Clone)]
pub struct ScriptedOracle {
    reply: Result<String, OracleError>,
    pub calls: Arc<AtomicUsize>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedOracle {
    pub fn replying(text: &str) -> Self {
        Self::new(Ok(text.to_string()))
    }

    pub fn failing(err: OracleError) -> Self {
        Self::new(Err(err))
    }

    fn new(reply: Result<String, OracleError>) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SoilOracle for ScriptedOracle {
    async fn generate(&self, prompt: String) -> Result<String, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt);
        self.reply.clone()
    }
}

pub fn survey(texture: &str, drainage: &str, organic: &str, slope: &str, issues: Option<&str>) -> SurveyAnswers {
    SurveyAnswers {
        soil_texture: texture.to_string(),
        drainage: drainage.to_string(),
        organic_matter: organic.to_string(),
        slope: slope.to_string(),
        issues: issues.map(str::to_string),
    }
}

/// The sandy reference survey: sandy=10, loamy=1, silt=2, clay=0.
pub fn sandy_survey() -> SurveyAnswers {
    survey(
        "very gritty and coarse",
        "drains very quickly",
        "very low, pale",
        "steep",
        Some("erosion"),
    )
}

/// A survey that no rule recognises.
pub fn unrecognised_survey() -> SurveyAnswers {
    survey("not sure", "never checked", "unknown", "n/a", None)
}
