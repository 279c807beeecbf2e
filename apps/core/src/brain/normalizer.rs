//! Survey normalization.

use serde::Serialize;

use crate::models::SurveyAnswers;

/// Lowercased, trimmed survey fields, ready for substring scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizedSurvey {
    pub texture: String,
    pub drainage: String,
    pub organic_matter: String,
    pub slope: String,
    /// Empty when the caller reported no issues.
    pub issues: String,
}

/// Produces a normalized copy of the answers. Never fails.
pub fn normalize(answers: &SurveyAnswers) -> NormalizedSurvey {
    NormalizedSurvey {
        texture: clean(&answers.soil_texture),
        drainage: clean(&answers.drainage),
        organic_matter: clean(&answers.organic_matter),
        slope: clean(&answers.slope),
        issues: answers.issues.as_deref().map(clean).unwrap_or_default(),
    }
}

fn clean(field: &str) -> String {
    field.trim().to_lowercase()
}
