//! Reconciler - decides between the heuristic baseline and the oracle.

use serde::Serialize;

use super::category::Category;
use super::extractor::OracleResult;
use crate::models::Source;
use crate::oracle::OracleError;

/// Minimum stated confidence for the oracle to override the baseline.
///
/// Fixed; not tunable per request. Confidence is never range-checked, so
/// anything at or above this value (including 2.0) is accepted.
pub const CONFIDENCE_THRESHOLD: f64 = 0.4;

/// What came back from the single oracle call of a request
#[derive(Debug, Clone, PartialEq)]
pub enum OracleOutcome {
    /// The call succeeded and its text went through extraction
    Extracted(OracleResult),
    /// The call failed; no oracle signal for this request
    Failed(OracleError),
}

/// How the oracle contributed to a classification
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OracleStatus {
    /// The oracle category was used
    Accepted { confidence: Option<f64> },
    /// The oracle category was below the confidence gate
    Rejected { category: Category, confidence: f64 },
    /// The oracle answered but no extraction tier found a category
    NoCategory,
    /// The oracle call failed
    Unavailable { reason: String },
}

/// The reconciled choice, before the safety net
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub category: Category,
    pub source: Source,
    pub oracle: OracleStatus,
}

/// Combine the baseline with the oracle outcome.
pub fn reconcile(baseline: Category, outcome: &OracleOutcome) -> Decision {
    let heuristic = |oracle: OracleStatus| Decision {
        category: baseline,
        source: Source::Heuristic,
        oracle,
    };

    let result = match outcome {
        OracleOutcome::Failed(err) => {
            return heuristic(OracleStatus::Unavailable {
                reason: err.to_string(),
            })
        }
        OracleOutcome::Extracted(result) => result,
    };

    match (result.category, result.confidence) {
        (None, _) => heuristic(OracleStatus::NoCategory),
        (Some(category), None) => Decision {
            category,
            source: Source::Oracle,
            oracle: OracleStatus::Accepted { confidence: None },
        },
        (Some(category), Some(confidence)) if confidence >= CONFIDENCE_THRESHOLD => Decision {
            category,
            source: Source::Oracle,
            oracle: OracleStatus::Accepted {
                confidence: Some(confidence),
            },
        },
        (Some(category), Some(confidence)) => heuristic(OracleStatus::Rejected {
            category,
            confidence,
        }),
    }
}
