//! Response Extractor - recovers a category from free-form oracle text.
//!
//! The oracle is asked for one-line JSON but may answer with prose, markdown
//! fences or a single bare word. Extraction runs ordered tiers and stops at
//! the first one that yields a category:
//! 1. Structured: first balanced `{...}` object with a category-like field
//! 2. Sole token: the whole text, letters only, is exactly one label
//! 3. Keyword: first designator found, in fixed precedence loam > sand > clay > silt
//!
//! Running out of tiers is a normal outcome, not an error.

use serde::Serialize;
use serde_json::{Map, Value};

use super::category::Category;

/// Field names accepted as the category in a structured answer,
/// compared after lowercasing and dropping non-letters.
const CATEGORY_KEYS: &[&str] = &["soiltype", "category", "type", "soil", "classification"];

const CONFIDENCE_KEY: &str = "confidence";

/// Keyword-tier designators in precedence order. Plain substrings, so a stem
/// inside a longer word counts ("sandyloam" is loamy, "quicksand" is sandy).
const DESIGNATORS: &[(&str, Category)] = &[
    ("loam", Category::Loamy),
    ("sand", Category::Sandy),
    ("clay", Category::Clay),
    ("silt", Category::Silt),
];

/// Which tier produced the extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionTier {
    Structured,
    SoleToken,
    Keyword,
    /// No tier recovered a category
    Exhausted,
}

/// Outcome of extraction over one oracle response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OracleResult {
    /// The oracle text exactly as received
    pub raw_text: String,
    /// `None` when every tier failed
    pub category: Option<Category>,
    /// Only the structured tier can supply one; never clamped
    pub confidence: Option<f64>,
    pub tier: ExtractionTier,
}

/// Tiered extractor
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseExtractor;

impl ResponseExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Run the tiers in order over the raw oracle text
    pub fn extract(&self, raw_text: &str) -> OracleResult {
        let (category, confidence, tier) = if let Some((category, confidence)) = structured(raw_text) {
            (Some(category), confidence, ExtractionTier::Structured)
        } else if let Some(category) = sole_token(raw_text) {
            (Some(category), None, ExtractionTier::SoleToken)
        } else if let Some(category) = keyword(raw_text) {
            (Some(category), None, ExtractionTier::Keyword)
        } else {
            (None, None, ExtractionTier::Exhausted)
        };

        OracleResult {
            raw_text: raw_text.to_string(),
            category,
            confidence,
            tier,
        }
    }
}

/// Tier 1. Accepts the record only if a category-like field holds a valid label.
fn structured(raw_text: &str) -> Option<(Category, Option<f64>)> {
    let span = first_json_object(raw_text)?;
    let record: Map<String, Value> = serde_json::from_str(span).ok()?;

    let category = record
        .iter()
        .filter(|(key, _)| CATEGORY_KEYS.contains(&letters_only(key).as_str()))
        .find_map(|(_, value)| value.as_str().and_then(Category::from_label))?;

    let confidence = record
        .iter()
        .find(|(key, _)| letters_only(key) == CONFIDENCE_KEY)
        .and_then(|(_, value)| value.as_f64());

    Some((category, confidence))
}

/// Tier 2.
fn sole_token(raw_text: &str) -> Option<Category> {
    Category::from_label(&letters_only(raw_text))
}

/// Tier 3.
fn keyword(raw_text: &str) -> Option<Category> {
    let text = raw_text.to_lowercase();
    DESIGNATORS
        .iter()
        .find(|(stem, _)| text.contains(*stem))
        .map(|(_, category)| *category)
}

fn letters_only(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase()
}

/// Returns the first balanced `{...}` span, ignoring braces inside JSON strings.
fn first_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&raw[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}
