//! # Oracle Module
//!
//! Boundary to the external text-generation capability that supplies a
//! probabilistic soil classification. Nothing here interprets the answer;
//! that is the job of `brain::extractor`.
//!
//! ## Components
//! - `traits`: The `SoilOracle` trait and its error type
//! - `prompt`: Classification prompt builder
//! - `gemini`: HTTP adapter for a `generateContent` endpoint
//! - `disabled`: Adapter used when no credential is configured

pub mod disabled;
pub mod gemini;
pub mod prompt;
pub mod traits;

pub use disabled::DisabledOracle;
pub use gemini::GeminiOracle;
pub use prompt::build_classification_prompt;
pub use traits::{OracleError, SoilOracle};
