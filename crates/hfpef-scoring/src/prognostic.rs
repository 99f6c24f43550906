use hfpef_core::PrognosticInput;

use crate::risk::ToolDomain;
use crate::RiskScorer;

/// HFpEF prognostic risk calculator. Same additive skip-if-missing design
/// as the diagnostic tool with an independent field set and weights; here
/// the fibrosis burden (ECV) carries the largest single weight.
pub struct PrognosticScorer;

impl RiskScorer for PrognosticScorer {
    type Input = PrognosticInput;

    fn id(&self) -> &str {
        "prognostic"
    }

    fn name(&self) -> &str {
        "Prognostic Assessment"
    }

    fn domain(&self) -> ToolDomain {
        ToolDomain::Prognostic
    }

    fn score(&self, input: &PrognosticInput) -> f64 {
        let mut score = 0.0;

        if let Some(age) = input.age {
            score += f64::min((age - 60.0) / 20.0 * 20.0, 20.0);
        }
        if let Some(ecv) = input.mean_ecv {
            if ecv > 32.0 {
                score += 25.0;
            } else if ecv > 28.0 {
                score += 15.0;
            } else if ecv > 25.0 {
                score += 8.0;
            }
        }
        if let Some(strain) = input.lv_strain {
            let strain = strain.abs();
            if strain < 12.0 {
                score += 20.0;
            } else if strain < 15.0 {
                score += 10.0;
            }
        }
        if let Some(e_e) = input.e_e_ratio {
            if e_e > 20.0 {
                score += 15.0;
            } else if e_e > 15.0 {
                score += 8.0;
            }
        }
        if let Some(bmi) = input.bmi {
            if bmi > 35.0 {
                score += 10.0;
            } else if bmi > 30.0 {
                score += 5.0;
            }
        }
        if input.diabetes {
            score += 10.0;
        }
        // Lower quality of life raises risk.
        if let Some(qol) = input.quality_of_life {
            if qol < 50.0 {
                score += 10.0;
            } else if qol < 70.0 {
                score += 5.0;
            }
        }

        score.min(100.0)
    }
}
