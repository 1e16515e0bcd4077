use novo_core::models::category::{Category, RiskTier};
use novo_core::models::report::{RiskReport, ScoreTable};

/// Per-category `(low_below, moderate_below)` exclusive upper bounds.
/// A score below the first bound is Low, below the second is Moderate,
/// anything else High. A score exactly at a bound lands in the higher
/// tier. The asymmetry between categories is intentional.
const fn bounds(category: Category) -> (i32, i32) {
    match category {
        Category::Depression => (-12, 6),
        Category::Anxiety => (-10, 8),
        Category::Stress => (-8, 8),
    }
}

/// Classify one category's cumulative score. Pure and total.
pub fn classify(category: Category, score: i32) -> RiskTier {
    let (low_below, moderate_below) = bounds(category);
    if score < low_below {
        RiskTier::Low
    } else if score < moderate_below {
        RiskTier::Moderate
    } else {
        RiskTier::High
    }
}

/// Classify every category of a score table.
pub fn classify_all(table: &ScoreTable) -> RiskReport {
    RiskReport {
        depression: classify(Category::Depression, table.depression),
        anxiety: classify(Category::Anxiety, table.anxiety),
        stress: classify(Category::Stress, table.stress),
    }
}
