//! Safety Net - last check before a result leaves the pipeline.
//!
//! Guarantees the output is one of the four categories and settles provenance.

use tracing::error;

use super::category::Category;
use super::heuristic::ScoreVector;
use super::reconciler::Decision;
use crate::models::{ClassificationResult, Source};

/// Coerces any label into a category; non-members become `Category::NEUTRAL`.
///
/// Returns whether the label had to be replaced.
pub fn enforce_label(candidate: &str) -> (Category, bool) {
    match candidate.parse::<Category>() {
        Ok(category) => (category, false),
        Err(err) => {
            error!("Invariant violation, {}; forcing {}", err, Category::NEUTRAL);
            (Category::NEUTRAL, true)
        }
    }
}

/// Validates the reconciled decision and builds the caller-facing result.
///
/// `source` becomes `Fallback` only when the label had to be replaced.
pub fn finalize(decision: Decision, baseline: Category, scores: ScoreVector) -> ClassificationResult {
    // Typed categories always pass; this guards any tier that starts producing raw labels.
    let (category, replaced) = enforce_label(decision.category.label());

    let source = if replaced {
        Source::Fallback
    } else {
        decision.source
    };

    ClassificationResult {
        category,
        source,
        baseline,
        scores,
        oracle: decision.oracle,
    }
}
