use hfpef_core::DiagnosticInput;

use crate::risk::ToolDomain;
use crate::RiskScorer;

/// HFpEF diagnostic risk calculator. Additive weighted rules over clinical,
/// hemodynamic, and imaging factors; each rule group is skipped entirely
/// when its field is absent. Total is capped at 100.
///
/// Two edge behaviors are inherited from the validated heuristic and kept
/// literally: the age ramp goes negative below age 50, and the HF2PEF term
/// has no upper cap of its own.
pub struct DiagnosticScorer;

impl RiskScorer for DiagnosticScorer {
    type Input = DiagnosticInput;

    fn id(&self) -> &str {
        "diagnostic"
    }

    fn name(&self) -> &str {
        "HFpEF Diagnostic Calculator"
    }

    fn domain(&self) -> ToolDomain {
        ToolDomain::Diagnostic
    }

    fn score(&self, input: &DiagnosticInput) -> f64 {
        let mut score = 0.0;

        // Clinical factors
        if let Some(age) = input.age {
            score += f64::min((age - 50.0) / 30.0 * 15.0, 15.0);
        }
        if let Some(hf2pef) = input.hf2pef_score {
            score += hf2pef / 9.0 * 20.0;
        }
        if let Some(bmi) = input.bmi
            && bmi > 30.0
        {
            score += 5.0;
        }

        // Comorbidities
        if input.diabetes {
            score += 8.0;
        }
        if input.hypertension {
            score += 5.0;
        }

        // Hemodynamic factors. Mean E/e' needs both electrode values.
        if let (Some(medial), Some(lateral)) = (input.e_e_medial, input.e_e_lateral) {
            let mean_e_e = (medial + lateral) / 2.0;
            if mean_e_e > 15.0 {
                score += 15.0;
            } else if mean_e_e > 10.0 {
                score += 10.0;
            } else if mean_e_e > 8.0 {
                score += 5.0;
            }
        }
        if let Some(pasp) = input.pasp {
            if pasp > 40.0 {
                score += 10.0;
            } else if pasp > 35.0 {
                score += 5.0;
            }
        }

        // Imaging factors
        if let Some(ecv) = input.mean_ecv {
            if ecv > 30.0 {
                score += 15.0;
            } else if ecv > 27.0 {
                score += 10.0;
            } else if ecv > 25.0 {
                score += 5.0;
            }
        }
        if let Some(strain) = input.lv_longitudinal_strain {
            let strain = strain.abs();
            if strain < 15.0 {
                score += 10.0;
            } else if strain < 18.0 {
                score += 5.0;
            }
        }

        score.min(100.0)
    }
}
