use novo_core::models::category::Category::{self, Anxiety, Depression, Stress};
use novo_core::models::category::RiskTier::{High, Low, Moderate};
use novo_core::models::report::ScoreTable;
use novo_screening::risk;

#[test]
fn depression_boundaries_are_exclusive() {
    assert_eq!(risk::classify(Depression, -13), Low);
    assert_eq!(risk::classify(Depression, -12), Moderate);
    assert_eq!(risk::classify(Depression, 5), Moderate);
    assert_eq!(risk::classify(Depression, 6), High);
}

#[test]
fn anxiety_boundaries_are_exclusive() {
    assert_eq!(risk::classify(Anxiety, -11), Low);
    assert_eq!(risk::classify(Anxiety, -10), Moderate);
    assert_eq!(risk::classify(Anxiety, 7), Moderate);
    assert_eq!(risk::classify(Anxiety, 8), High);
}

#[test]
fn stress_boundaries_are_exclusive() {
    assert_eq!(risk::classify(Stress, -9), Low);
    assert_eq!(risk::classify(Stress, -8), Moderate);
    assert_eq!(risk::classify(Stress, 7), Moderate);
    assert_eq!(risk::classify(Stress, 8), High);
}

#[test]
fn classification_is_total_over_extreme_scores() {
    for category in Category::ALL {
        assert_eq!(risk::classify(category, i32::MIN), Low);
        assert_eq!(risk::classify(category, i32::MAX), High);
    }
}

#[test]
fn classify_all_applies_each_category_threshold() {
    let table = ScoreTable {
        depression: -13,
        anxiety: 8,
        stress: 0,
    };
    let report = risk::classify_all(&table);
    assert_eq!(report.depression, Low);
    assert_eq!(report.anxiety, High);
    assert_eq!(report.stress, Moderate);
}

#[test]
fn same_score_can_land_in_different_tiers_per_category() {
    // The threshold table is asymmetric across categories.
    assert_eq!(risk::classify(Depression, 7), High);
    assert_eq!(risk::classify(Anxiety, 7), Moderate);
    assert_eq!(risk::classify(Stress, 7), Moderate);

    assert_eq!(risk::classify(Depression, -11), Moderate);
    assert_eq!(risk::classify(Anxiety, -11), Low);
    assert_eq!(risk::classify(Stress, -11), Low);
}
