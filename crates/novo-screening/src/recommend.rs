use novo_core::models::category::RecommendationTier;
use novo_core::models::report::RiskReport;

/// Elevated when at least one category came back High; Routine otherwise.
pub fn recommend(report: &RiskReport) -> RecommendationTier {
    if report.any_high() {
        RecommendationTier::Elevated
    } else {
        RecommendationTier::Routine
    }
}

/// Heading shown above the advisory list.
pub fn headline(tier: RecommendationTier) -> &'static str {
    match tier {
        RecommendationTier::Elevated => "Please Consider:",
        RecommendationTier::Routine => "Suggestions:",
    }
}

/// Fixed advisory message set for a recommendation tier.
pub fn advice(tier: RecommendationTier) -> &'static [&'static str] {
    match tier {
        RecommendationTier::Elevated => &[
            "Talking to a trusted adult, school counselor, or mental health professional",
            "Taking breaks and practicing self-care activities",
            "Seeking support from friends or family members",
        ],
        RecommendationTier::Routine => &[
            "Continue practicing healthy coping strategies",
            "Maintain a balanced lifestyle with adequate sleep and exercise",
            "Reach out for help if you notice your feelings changing",
        ],
    }
}
