//! Heuristic soil scoring using substring rules.
//!
//! Deterministic agronomy rules over the normalized survey text.
//! No external service required - the same answers always give the same scores.

use serde::Serialize;

use super::category::Category;
use super::category::Category::{Clay, Loamy, Sandy, Silt};
use super::normalizer::NormalizedSurvey;

/// Survey field a rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Texture,
    Drainage,
    OrganicMatter,
    Slope,
    Issues,
}

impl Field {
    fn text<'a>(&self, survey: &'a NormalizedSurvey) -> &'a str {
        match self {
            Field::Texture => &survey.texture,
            Field::Drainage => &survey.drainage,
            Field::OrganicMatter => &survey.organic_matter,
            Field::Slope => &survey.slope,
            Field::Issues => &survey.issues,
        }
    }
}

/// One row of the rule table.
///
/// A rule fires once when ANY trigger occurs in its field; every credit is
/// then applied. Rules accumulate independently of each other.
#[derive(Debug)]
pub struct Rule {
    pub id: &'static str,
    pub field: Field,
    pub triggers: &'static [&'static str],
    pub credits: &'static [(Category, u32)],
}

impl Rule {
    fn matches(&self, survey: &NormalizedSurvey) -> bool {
        let text = self.field.text(survey);
        self.triggers.iter().any(|trigger| text.contains(trigger))
    }
}

pub static RULES: &[Rule] = &[
    // --- Texture ---
    Rule {
        id: "texture.gritty",
        field: Field::Texture,
        triggers: &["gritty", "coarse"],
        credits: &[(Sandy, 3)],
    },
    Rule {
        id: "texture.smooth",
        field: Field::Texture,
        triggers: &["smooth", "silky", "very fine"],
        credits: &[(Silt, 3)],
    },
    Rule {
        id: "texture.sticky",
        field: Field::Texture,
        triggers: &["sticky", "heavy", "hard to crumble"],
        credits: &[(Clay, 3)],
    },
    Rule {
        id: "texture.crumbly",
        field: Field::Texture,
        triggers: &["crumbly", "breaks easily"],
        credits: &[(Loamy, 3)],
    },
    // --- Drainage ---
    Rule {
        id: "drainage.fast",
        field: Field::Drainage,
        triggers: &["drains quickly", "drains very quickly", "dries fast"],
        credits: &[(Sandy, 3), (Loamy, 1)],
    },
    Rule {
        id: "drainage.moderate",
        field: Field::Drainage,
        triggers: &["drains moderately", "no standing water"],
        credits: &[(Loamy, 3)],
    },
    Rule {
        id: "drainage.hours",
        field: Field::Drainage,
        triggers: &["stands a few hours", "stands for a few hours"],
        credits: &[(Clay, 2), (Silt, 2)],
    },
    Rule {
        id: "drainage.waterlogged",
        field: Field::Drainage,
        triggers: &["stands long", "often stands", "long time", "puddles"],
        credits: &[(Clay, 3), (Silt, 2)],
    },
    // --- Organic matter / fertility ---
    Rule {
        id: "organic.low",
        field: Field::OrganicMatter,
        triggers: &["very low", "pale"],
        credits: &[(Sandy, 1), (Silt, 1)],
    },
    Rule {
        id: "organic.moderate",
        field: Field::OrganicMatter,
        triggers: &["moderate"],
        credits: &[(Loamy, 2)],
    },
    Rule {
        id: "organic.high",
        field: Field::OrganicMatter,
        triggers: &["high", "dark topsoil"],
        credits: &[(Loamy, 3), (Clay, 1)],
    },
    // --- Slope / terrain ---
    Rule {
        id: "slope.flat",
        field: Field::Slope,
        triggers: &["flat"],
        credits: &[(Clay, 1), (Loamy, 1)],
    },
    Rule {
        id: "slope.gentle",
        field: Field::Slope,
        triggers: &["gentle"],
        credits: &[(Loamy, 1)],
    },
    Rule {
        id: "slope.steep",
        field: Field::Slope,
        triggers: &["medium-to-steep", "medium to steep", "steep"],
        credits: &[(Sandy, 1), (Silt, 1)],
    },
    // --- Issues (optional) ---
    Rule {
        id: "issues.erosion",
        field: Field::Issues,
        triggers: &["erosion"],
        credits: &[(Sandy, 2)],
    },
    Rule {
        id: "issues.compaction",
        field: Field::Issues,
        triggers: &["compaction", "zbijen"],
        credits: &[(Clay, 2)],
    },
    Rule {
        id: "issues.low_yield",
        field: Field::Issues,
        triggers: &["poor yield", "low yield"],
        credits: &[(Sandy, 1), (Silt, 1)],
    },
];

/// Per-category scores for one survey, plus the ids of the rules that fired.
///
/// Only `HeuristicScorer` builds one; it is read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreVector {
    sandy: u32,
    clay: u32,
    loamy: u32,
    silt: u32,
    #[serde(rename = "rules")]
    fired: Vec<&'static str>,
}

impl ScoreVector {
    /// Score of one category.
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Sandy => self.sandy,
            Category::Clay => self.clay,
            Category::Loamy => self.loamy,
            Category::Silt => self.silt,
        }
    }

    fn credit(&mut self, category: Category, weight: u32) {
        let slot = match category {
            Category::Sandy => &mut self.sandy,
            Category::Clay => &mut self.clay,
            Category::Loamy => &mut self.loamy,
            Category::Silt => &mut self.silt,
        };
        *slot += weight;
    }

    /// Ids of the rules that contributed, in table order.
    pub fn fired_rules(&self) -> &[&'static str] {
        &self.fired
    }

    /// True when no rule matched anything in the survey.
    pub fn is_inconclusive(&self) -> bool {
        self.fired.is_empty()
    }

    /// The category with the strictly highest score.
    ///
    /// Any tie for first place (including all zeros) yields `Category::NEUTRAL`.
    pub fn winner(&self) -> Category {
        let best = Category::ALL
            .iter()
            .map(|c| self.get(*c))
            .max()
            .unwrap_or(0);

        let mut leaders = Category::ALL.iter().filter(|c| self.get(**c) == best);
        match (leaders.next(), leaders.next()) {
            (Some(only), None) => *only,
            _ => Category::NEUTRAL,
        }
    }
}

/// Rule-table scorer producing the heuristic baseline
pub struct HeuristicScorer {
    rules: &'static [Rule],
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicScorer {
    /// Create a scorer over the built-in rule table
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// Apply every rule to the survey
    pub fn score(&self, survey: &NormalizedSurvey) -> ScoreVector {
        let mut scores = ScoreVector::default();

        for rule in self.rules {
            if rule.matches(survey) {
                for (category, weight) in rule.credits {
                    scores.credit(*category, *weight);
                }
                scores.fired.push(rule.id);
            }
        }

        scores
    }

    /// Shortcut for `score(survey).winner()`
    pub fn baseline(&self, survey: &NormalizedSurvey) -> Category {
        self.score(survey).winner()
    }
}
