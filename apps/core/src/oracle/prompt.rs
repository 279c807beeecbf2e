//! Classification prompt for the oracle.
//!
//! The oracle is asked for brief reasoning followed by a one-line JSON answer.
//! It does not always comply, which is why `brain::extractor` is tiered.

use crate::brain::normalizer::NormalizedSurvey;

const PROMPT_HEADER: &str = "You are an agronomy expert.

Classify the soil of a farm plot into exactly ONE of these four standard soil types:

1) sandy - coarse, gritty particles, very fast drainage, low water-holding capacity.
2) clay  - very fine particles, sticky when wet, heavy, slow drainage, often waterlogged.
3) loamy - balanced mixture, crumbly structure, drains well but still holds moisture, usually fertile.
4) silt  - very fine, smooth and silky, holds water longer than sand, moderate drainage.

Base your answer ONLY on the farmer's survey answers below:";

const PROMPT_FOOTER: &str = "Step 1: Briefly reason about which type fits best and why.
Step 2: Select exactly ONE of: sandy, clay, loamy, silt.

Return your final answer as pure JSON on ONE line, for example:
{\"soilType\":\"loamy\",\"confidence\":0.82}

Where:
- soilType is exactly \"sandy\", \"clay\", \"loamy\" or \"silt\"
- confidence is a number between 0 and 1 (your subjective confidence).";

/// Builds the classification prompt from already-normalized survey answers.
pub fn build_classification_prompt(survey: &NormalizedSurvey) -> String {
    let issues = if survey.issues.is_empty() {
        "none"
    } else {
        survey.issues.as_str()
    };

    let answers = [
        format!("- Texture when rubbed between fingers: {}", survey.texture),
        format!("- Water behaviour after heavy rain: {}", survey.drainage),
        format!("- Organic matter / fertility level: {}", survey.organic_matter),
        format!("- Field slope / terrain: {}", survey.slope),
        format!("- Reported issues (if any): {}", issues),
    ];

    format!("{}\n\n{}\n\n{}", PROMPT_HEADER, answers.join("\n"), PROMPT_FOOTER)
}
