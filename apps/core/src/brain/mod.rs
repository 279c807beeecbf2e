//! # Brain Module
//!
//! Deterministic decision logic for soil classification.
//! Scores the survey answers BEFORE consulting the oracle, then reconciles both.
//!
//! ## Components
//! - `category`: The closed set of soil categories
//! - `normalizer`: Lowercases and trims survey fields
//! - `heuristic`: Rule-table scorer producing the baseline
//! - `extractor`: Tiered recovery of a category from oracle text
//! - `reconciler`: Confidence-gated override policy
//! - `safety_net`: Final validation and provenance tagging
//! - `classifier`: Main orchestrator

pub mod category;
pub mod classifier;
pub mod extractor;
pub mod heuristic;
pub mod normalizer;
pub mod reconciler;
pub mod safety_net;

// Re-export main types for convenience
pub use category::{Category, UnknownCategory};
pub use classifier::SoilClassifier;
pub use extractor::{ExtractionTier, OracleResult, ResponseExtractor};
pub use heuristic::{HeuristicScorer, ScoreVector};
pub use normalizer::{normalize, NormalizedSurvey};
pub use reconciler::{reconcile, Decision, OracleOutcome, OracleStatus, CONFIDENCE_THRESHOLD};
