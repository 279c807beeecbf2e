//! # Soil Advisor Core
//!
//! Classifies a farm plot's soil as sandy, clay, loamy or silt from free-text
//! survey answers. A deterministic rule scorer sets the baseline; an external
//! text-generation oracle may override it through a confidence gate. A valid
//! category is always produced, whatever the oracle does.
//!
//! ## Modules
//! - `brain`: Normalizer, heuristic scorer, extractor, reconciler, safety net, orchestrator
//! - `oracle`: The oracle trait, prompt, and HTTP adapter
//! - `config`: Explicit oracle configuration
//! - `models`: Survey input and classification output
//! - `error`: Error taxonomy
//! - `telemetry`: Logging setup

pub mod brain;
pub mod config;
pub mod error;
pub mod models;
pub mod oracle;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use brain::{Category, SoilClassifier};
pub use config::OracleConfig;
pub use error::AppError;
pub use models::{ClassificationResult, Source, SurveyAnswers};
pub use oracle::{DisabledOracle, GeminiOracle, OracleError, SoilOracle};
