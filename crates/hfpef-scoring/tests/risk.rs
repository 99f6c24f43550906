use hfpef_core::DiagnosticInput;
use hfpef_scoring::{
    recommendations, DiagnosticScorer, RiskCategory, RiskScorer, ToolDomain,
};

#[test]
fn classification_boundaries_are_exact() {
    assert_eq!(RiskCategory::classify(0.0), RiskCategory::Low);
    assert_eq!(RiskCategory::classify(29.999), RiskCategory::Low);
    assert_eq!(RiskCategory::classify(30.0), RiskCategory::Moderate);
    assert_eq!(RiskCategory::classify(69.999), RiskCategory::Moderate);
    assert_eq!(RiskCategory::classify(70.0), RiskCategory::High);
    assert_eq!(RiskCategory::classify(100.0), RiskCategory::High);
}

#[test]
fn category_labels_render_for_display() {
    assert_eq!(RiskCategory::Low.to_string(), "Low");
    assert_eq!(RiskCategory::Moderate.to_string(), "Moderate");
    assert_eq!(RiskCategory::High.to_string(), "High");
}

#[test]
fn every_domain_and_tier_has_a_guidance_list() {
    for domain in [ToolDomain::Diagnostic, ToolDomain::Prognostic] {
        for category in [RiskCategory::Low, RiskCategory::Moderate, RiskCategory::High] {
            assert!(!recommendations(domain, category).is_empty());
        }
    }
}

#[test]
fn guidance_lists_keep_authoring_order() {
    let low = recommendations(ToolDomain::Diagnostic, RiskCategory::Low);
    assert_eq!(low[0], "Consider alternative diagnoses");
    assert_eq!(low.len(), 4);

    let high = recommendations(ToolDomain::Prognostic, RiskCategory::High);
    assert_eq!(high[0], "Intensive heart failure management");
    assert_eq!(high.len(), 6);
}

#[test]
fn assess_bundles_score_tier_and_guidance() {
    let assessment = DiagnosticScorer.assess(&DiagnosticInput::default());
    assert_eq!(assessment.score, 0.0);
    assert_eq!(assessment.category, RiskCategory::Low);
    assert_eq!(
        assessment.recommendations,
        recommendations(ToolDomain::Diagnostic, RiskCategory::Low)
    );
}
