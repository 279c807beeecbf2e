//! The four soil categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Soil category. No other value is ever a valid classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Coarse, gritty, fast-draining
    Sandy,
    /// Fine, sticky, slow-draining
    Clay,
    /// Balanced, crumbly
    Loamy,
    /// Fine, smooth, silky
    Silt,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    /// Every category, in scoring order.
    pub const ALL: [Category; 4] = [
        Category::Sandy,
        Category::Clay,
        Category::Loamy,
        Category::Silt,
    ];

    /// Category used whenever the evidence does not single one out.
    pub const NEUTRAL: Category = Category::Loamy;

    /// Returns the canonical lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Sandy => "sandy",
            Category::Clay => "clay",
            Category::Loamy => "loamy",
            Category::Silt => "silt",
        }
    }

    /// Parses a label, ignoring case and surrounding whitespace.
    ///
    /// Only exact labels match: `"loam"` or `"sand"` are not categories.
    pub fn from_label(raw: &str) -> Option<Self> {
        let wanted = raw.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.label() == wanted)
    }
}

/// A string that is not one of the four category labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a soil category")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
