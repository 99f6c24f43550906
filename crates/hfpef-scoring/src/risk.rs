use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Risk tier shared by the diagnostic and prognostic calculators. The 30/70
/// cut points are fixed clinical constants applied to both scorers despite
/// their different weighting schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

impl RiskCategory {
    /// Map a 0–100 score to its tier: < 30 Low, < 70 Moderate, else High.
    pub fn classify(score: f64) -> Self {
        if score < 30.0 {
            Self::Low
        } else if score < 70.0 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which calculator a score came from; keys the guidance tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ToolDomain {
    Diagnostic,
    Prognostic,
}

/// Fixed guidance lists, one per (domain, tier). Order within each list is
/// authoring order and is significant to the display layer.
pub fn recommendations(domain: ToolDomain, category: RiskCategory) -> &'static [&'static str] {
    match (domain, category) {
        (ToolDomain::Diagnostic, RiskCategory::Low) => &[
            "Consider alternative diagnoses",
            "Routine follow-up if symptoms persist",
            "Lifestyle counseling for cardiovascular health",
            "Annual assessment if risk factors present",
        ],
        (ToolDomain::Diagnostic, RiskCategory::Moderate) => &[
            "Cardiology consultation recommended",
            "Advanced cardiac imaging (cardiac MRI with ECV)",
            "Comprehensive echocardiography with strain",
            "Exercise testing for functional assessment",
            "Consider cardiac catheterization if high suspicion",
        ],
        (ToolDomain::Diagnostic, RiskCategory::High) => &[
            "Urgent cardiology referral",
            "Comprehensive HFpEF evaluation protocol",
            "Cardiac MRI with tissue characterization",
            "Invasive hemodynamic assessment if indicated",
            "Initiate evidence-based HFpEF therapies",
            "Enroll in heart failure management program",
        ],
        (ToolDomain::Prognostic, RiskCategory::Low) => &[
            "Standard heart failure management",
            "Annual follow-up with echo",
            "Lifestyle optimization focus",
            "Monitor for symptom progression",
        ],
        (ToolDomain::Prognostic, RiskCategory::Moderate) => &[
            "Enhanced surveillance (6-month follow-up)",
            "Optimize guideline-directed medical therapy",
            "Consider advanced therapies if symptoms progress",
            "Cardiac rehabilitation referral",
            "Monitor biomarkers and imaging parameters",
        ],
        (ToolDomain::Prognostic, RiskCategory::High) => &[
            "Intensive heart failure management",
            "Frequent monitoring (3-month intervals)",
            "Consider advanced heart failure therapies",
            "Palliative care consultation if appropriate",
            "Clinical trial enrollment consideration",
            "Multidisciplinary team approach",
        ],
    }
}

/// Score, tier, and guidance bundled for the display layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskAssessment {
    pub score: f64,
    pub category: RiskCategory,
    pub recommendations: Vec<String>,
}
