//! Soil Classifier - Main orchestrator for the Brain module.
//!
//! Runs one request through the pipeline:
//! validate -> normalize -> score -> consult oracle (once) -> extract -> reconcile -> safety net
//!
//! Only input validation can fail a request. Every oracle problem degrades to
//! the heuristic baseline and is reported on the result.

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::extractor::ResponseExtractor;
use super::heuristic::HeuristicScorer;
use super::normalizer::{normalize, NormalizedSurvey};
use super::reconciler::{reconcile, OracleOutcome};
use super::safety_net;
use crate::error::AppError;
use crate::models::{ClassificationResult, SurveyAnswers};
use crate::oracle::{build_classification_prompt, OracleError, SoilOracle};

/// Classifies survey answers into a soil category.
///
/// Holds no per-request state; one instance can serve concurrent requests.
pub struct SoilClassifier<O: SoilOracle + ?Sized> {
    oracle: Arc<O>,
    scorer: HeuristicScorer,
    extractor: ResponseExtractor,
}

impl<O: SoilOracle + ?Sized> Clone for SoilClassifier<O> {
    fn clone(&self) -> Self {
        Self {
            oracle: Arc::clone(&self.oracle),
            scorer: HeuristicScorer::new(),
            extractor: self.extractor,
        }
    }
}

impl<O: SoilOracle + ?Sized> SoilClassifier<O> {
    /// Creates a classifier backed by the given oracle.
    pub fn new(oracle: Arc<O>) -> Self {
        Self {
            oracle,
            scorer: HeuristicScorer::new(),
            extractor: ResponseExtractor::new(),
        }
    }

    /// Classifies one survey.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when a required field is missing or
    /// blank. That check happens before any scoring or oracle call.
    #[instrument(skip(self, answers), fields(request_id = %Uuid::new_v4()))]
    pub async fn classify(&self, answers: &SurveyAnswers) -> Result<ClassificationResult, AppError> {
        answers.ensure_complete()?;

        // 1. Normalize
        let survey = normalize(answers);

        // 2. Heuristic baseline
        let scores = self.scorer.score(&survey);
        let baseline = scores.winner();
        debug!(
            "Heuristic baseline {} from rules {:?}",
            baseline,
            scores.fired_rules()
        );
        if scores.is_inconclusive() {
            debug!("No rule matched the survey, baseline is the neutral default");
        }

        // 3. Oracle, best effort
        let outcome = self.consult_oracle(&survey).await;

        // 4. Reconcile and validate
        let decision = reconcile(baseline, &outcome);
        let result = safety_net::finalize(decision, baseline, scores);

        info!(
            category = %result.category,
            source = %result.source,
            baseline = %result.baseline,
            oracle = ?result.oracle,
            "Soil classified"
        );

        Ok(result)
    }

    /// The single oracle round-trip of a request. Never fails.
    async fn consult_oracle(&self, survey: &NormalizedSurvey) -> OracleOutcome {
        let prompt = build_classification_prompt(survey);

        let raw_text = match self.oracle.generate(prompt).await {
            Ok(text) if text.trim().is_empty() => {
                warn!("Oracle returned an empty response, using heuristic only");
                return OracleOutcome::Failed(OracleError::EmptyResponse);
            }
            Ok(text) => text,
            Err(e) => {
                warn!("Error determining soil type with oracle, using heuristic only: {}", e);
                return OracleOutcome::Failed(e);
            }
        };

        let extracted = self.extractor.extract(&raw_text);
        debug!(
            "Oracle extraction tier {:?} -> {:?} (confidence {:?})",
            extracted.tier, extracted.category, extracted.confidence
        );
        OracleOutcome::Extracted(extracted)
    }
}
