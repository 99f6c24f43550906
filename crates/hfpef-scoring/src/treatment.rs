use hfpef_core::TreatmentInput;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One treatment finding: drug class or intervention, what to start, why,
/// and what to watch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationRecord {
    pub category: String,
    pub recommendation: String,
    pub evidence: String,
    pub monitoring: String,
}

impl RecommendationRecord {
    fn new(category: &str, recommendation: &str, evidence: &str, monitoring: &str) -> Self {
        Self {
            category: category.to_string(),
            recommendation: recommendation.to_string(),
            evidence: evidence.to_string(),
            monitoring: monitoring.to_string(),
        }
    }
}

/// Treatment optimizer. Unlike the risk calculators this emits independent,
/// non-exclusive findings: every rule is evaluated, any subset may fire, and
/// the output order is the fixed rule order. An empty result means current
/// therapy appears adequate on the available data — the display layer must
/// not confuse it with "no data entered".
pub struct TreatmentAdvisor;

impl TreatmentAdvisor {
    pub fn recommend(&self, input: &TreatmentInput) -> Vec<RecommendationRecord> {
        let meds = &input.current_medications;
        let mut recommendations = Vec::new();

        if !meds.ace_arb {
            recommendations.push(RecommendationRecord::new(
                "RAAS Inhibition",
                "Initiate ACE inhibitor or ARB",
                "Class I recommendation for HFpEF",
                "Monitor renal function and potassium",
            ));
        }

        if let Some(pasp) = input.baseline_pasp
            && pasp > 40.0
            && !meds.diuretic
        {
            recommendations.push(RecommendationRecord::new(
                "Volume Management",
                "Consider loop diuretic therapy",
                "For symptomatic relief in volume overload",
                "Monitor electrolytes and renal function",
            ));
        }

        if let Some(ecv) = input.baseline_ecv
            && ecv > 30.0
            && !meds.mra
        {
            recommendations.push(RecommendationRecord::new(
                "Anti-fibrotic Therapy",
                "Consider MRA (spironolactone/eplerenone)",
                "May benefit patients with elevated fibrosis burden",
                "Monitor potassium and renal function closely",
            ));
        }

        if let Some(symptom) = input.symptom_score
            && symptom > 70.0
        {
            recommendations.push(RecommendationRecord::new(
                "Symptom Management",
                "Intensive symptom management program",
                "High symptom burden requires multimodal approach",
                "Regular symptom assessment and QOL evaluation",
            ));
        }

        if let Some(exercise) = input.exercise_capacity
            && exercise < 300.0
        {
            recommendations.push(RecommendationRecord::new(
                "Exercise Training",
                "Supervised cardiac rehabilitation",
                "Improves exercise capacity and quality of life",
                "Exercise tolerance and functional capacity",
            ));
        }

        recommendations
    }
}
