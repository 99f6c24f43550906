//! hfpef-scoring
//!
//! The HFpEF clinical decision support tools: diagnostic and prognostic
//! risk calculators plus the treatment optimizer. Pure rule arithmetic over
//! immutable input snapshots — no I/O, no state, every invocation is
//! independent and deterministic.

pub mod diagnostic;
pub mod error;
pub mod prognostic;
pub mod risk;
pub mod treatment;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use diagnostic::DiagnosticScorer;
pub use error::ScoringError;
pub use prognostic::PrognosticScorer;
pub use risk::{recommendations, RiskAssessment, RiskCategory, ToolDomain};
pub use treatment::{RecommendationRecord, TreatmentAdvisor};

/// Trait implemented by each risk calculator.
pub trait RiskScorer {
    /// The input snapshot this calculator consumes.
    type Input;

    /// Unique identifier for this tool (e.g., "diagnostic").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "HFpEF Diagnostic Calculator").
    fn name(&self) -> &str;

    /// Which guidance tables this tool's scores key into.
    fn domain(&self) -> ToolDomain;

    /// Compute the 0–100 risk score. Absent fields contribute zero.
    fn score(&self, input: &Self::Input) -> f64;

    /// Score, classify, and attach the guidance list in one step.
    fn assess(&self, input: &Self::Input) -> RiskAssessment {
        let score = self.score(input);
        let category = RiskCategory::classify(score);
        RiskAssessment {
            score,
            category,
            recommendations: recommendations(self.domain(), category)
                .iter()
                .map(|r| (*r).to_string())
                .collect(),
        }
    }
}

/// Output of [`evaluate`]: risk tools yield a scored assessment, the
/// treatment optimizer yields a list of findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Evaluation {
    Risk(RiskAssessment),
    Treatment(Vec<RecommendationRecord>),
}

/// Run a tool by id on a JSON input snapshot. This is the dispatch surface
/// the form layer calls when a tab's inputs change.
pub fn evaluate(tool_id: &str, payload: serde_json::Value) -> Result<Evaluation, ScoringError> {
    match tool_id {
        "diagnostic" => {
            let input = serde_json::from_value(payload)?;
            Ok(Evaluation::Risk(DiagnosticScorer.assess(&input)))
        }
        "prognostic" => {
            let input = serde_json::from_value(payload)?;
            Ok(Evaluation::Risk(PrognosticScorer.assess(&input)))
        }
        "treatment" => {
            let input = serde_json::from_value(payload)?;
            Ok(Evaluation::Treatment(TreatmentAdvisor.recommend(&input)))
        }
        other => Err(ScoringError::UnknownTool(other.to_string())),
    }
}
