use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One of the three dimensions the questionnaire measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Depression,
    Anxiety,
    Stress,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Depression, Category::Anxiety, Category::Stress];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Depression => "Depression",
            Category::Anxiety => "Anxiety",
            Category::Stress => "Stress",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Qualitative risk level assigned to one category's cumulative score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn name(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which advisory message set the respondent should see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecommendationTier {
    /// At least one category came back High — "seek support" messaging.
    Elevated,
    /// No High categories — "maintain healthy habits" messaging.
    Routine,
}

/// Respondent attribute that selects the question-set variant.
///
/// Anything the frontend cannot map to a known variant is `Unspecified`,
/// which yields the common question list alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Cohort {
    #[default]
    Unspecified,
    Boy,
    Girl,
}

impl Cohort {
    /// Map free-form frontend input to a cohort. Unknown input falls back
    /// to `Unspecified` rather than erroring.
    pub fn parse(input: &str) -> Cohort {
        match input.trim().to_ascii_lowercase().as_str() {
            "boy" => Cohort::Boy,
            "girl" => Cohort::Girl,
            _ => Cohort::Unspecified,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Cohort::Unspecified => "Unspecified",
            Cohort::Boy => "Boy",
            Cohort::Girl => "Girl",
        }
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
