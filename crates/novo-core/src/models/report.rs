use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::{Category, RiskTier};

/// Cumulative signed score per category. Zero-initialized and built fresh
/// on every scoring pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreTable {
    pub depression: i32,
    pub anxiety: i32,
    pub stress: i32,
}

impl ScoreTable {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> i32 {
        match category {
            Category::Depression => self.depression,
            Category::Anxiety => self.anxiety,
            Category::Stress => self.stress,
        }
    }

    pub fn add(&mut self, category: Category, value: i32) {
        match category {
            Category::Depression => self.depression += value,
            Category::Anxiety => self.anxiety += value,
            Category::Stress => self.stress += value,
        }
    }

    /// Entries in the fixed category order.
    pub fn entries(&self) -> [(Category, i32); 3] {
        [
            (Category::Depression, self.depression),
            (Category::Anxiety, self.anxiety),
            (Category::Stress, self.stress),
        ]
    }
}

/// Risk tier per category, derived purely from a [`ScoreTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskReport {
    pub depression: RiskTier,
    pub anxiety: RiskTier,
    pub stress: RiskTier,
}

impl RiskReport {
    pub fn get(&self, category: Category) -> RiskTier {
        match category {
            Category::Depression => self.depression,
            Category::Anxiety => self.anxiety,
            Category::Stress => self.stress,
        }
    }

    pub fn entries(&self) -> [(Category, RiskTier); 3] {
        [
            (Category::Depression, self.depression),
            (Category::Anxiety, self.anxiety),
            (Category::Stress, self.stress),
        ]
    }

    pub fn any_high(&self) -> bool {
        self.entries().iter().any(|(_, tier)| *tier == RiskTier::High)
    }
}
