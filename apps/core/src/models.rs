use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use validator::{Validate, ValidationError};

use crate::brain::{Category, OracleStatus, ScoreVector};
use crate::error::AppError;

/// Represents the farmer's survey answers for one plot.
///
/// Every field accepts any JSON scalar and keeps its string form; absent or
/// `null` fields become empty strings so validation can report them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAnswers {
    /// How the soil feels when rubbed between fingers.
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(custom(function = "non_blank"))]
    pub soil_texture: String,
    /// What water does after heavy rain.
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(custom(function = "non_blank"))]
    pub drainage: String,
    /// Organic matter / fertility description.
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(custom(function = "non_blank"))]
    pub organic_matter: String,
    /// Field slope / terrain.
    #[serde(default, deserialize_with = "lenient_string")]
    #[validate(custom(function = "non_blank"))]
    pub slope: String,
    /// Reported problems, if any.
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub issues: Option<String>,
}

impl SurveyAnswers {
    /// Parses a survey from its JSON wire form.
    ///
    /// Anything that is not a JSON object (`null`, an array, malformed text)
    /// is a `Validation` error, like a survey with missing fields.
    pub fn from_json(input: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Rejects the survey when any required field is missing or blank.
    ///
    /// The error message lists every offending field by its wire name.
    pub fn ensure_complete(&self) -> Result<(), AppError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let mut fields: Vec<&'static str> = errors
            .field_errors()
            .keys()
            .map(|field| wire_name(field))
            .collect();
        fields.sort_unstable();

        Err(AppError::Validation(format!(
            "Missing required soil information fields: {}",
            fields.join(", ")
        )))
    }
}

fn wire_name(field: &str) -> &'static str {
    match field {
        "soil_texture" => "soilTexture",
        "drainage" => "drainage",
        "organic_matter" => "organicMatter",
        "slope" => "slope",
        _ => "unknown",
    }
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(scalar_to_string).unwrap_or_default())
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(scalar_to_string).filter(|s| !s.is_empty()))
}

/// Where the final category came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// The rule-based baseline
    Heuristic,
    /// The oracle, after extraction and the confidence gate
    Oracle,
    /// The safety net replaced a label that was not a category
    Fallback,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Source::Heuristic => "heuristic",
            Source::Oracle => "oracle",
            Source::Fallback => "fallback",
        };
        write!(f, "{}", label)
    }
}

/// Represents the outcome of one classification, owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// Always one of the four categories.
    pub category: Category,
    /// Provenance of `category`.
    pub source: Source,
    /// The heuristic-only answer.
    pub baseline: Category,
    /// The heuristic scores behind `baseline`.
    pub scores: ScoreVector,
    /// What the oracle contributed, including why it was ignored.
    pub oracle: OracleStatus,
}
