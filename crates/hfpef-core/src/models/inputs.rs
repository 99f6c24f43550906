use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::fields::parse_field;

/// Parsed snapshot for the diagnostic calculator. Numeric fields are `None`
/// when the form value was empty or unparsable; absent fields contribute
/// zero to the score.
///
/// `lv_mass` and `lv_ef` are tracked by the form but do not enter the score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticInput {
    pub age: Option<f64>,
    pub bmi: Option<f64>,
    pub hf2pef_score: Option<f64>,
    pub e_e_medial: Option<f64>,
    pub e_e_lateral: Option<f64>,
    pub pasp: Option<f64>,
    pub lv_mass: Option<f64>,
    pub lv_ef: Option<f64>,
    pub mean_ecv: Option<f64>,
    pub lv_longitudinal_strain: Option<f64>,
    #[serde(default)]
    pub diabetes: bool,
    #[serde(default)]
    pub hypertension: bool,
}

/// Parsed snapshot for the prognostic assessment.
///
/// `pasp` is tracked by the form but does not enter the score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PrognosticInput {
    pub age: Option<f64>,
    pub bmi: Option<f64>,
    pub mean_ecv: Option<f64>,
    pub lv_strain: Option<f64>,
    pub e_e_ratio: Option<f64>,
    pub quality_of_life: Option<f64>,
    pub pasp: Option<f64>,
    #[serde(default)]
    pub diabetes: bool,
}

/// Parsed snapshot for the treatment optimizer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentInput {
    pub baseline_ecv: Option<f64>,
    pub baseline_pasp: Option<f64>,
    pub baseline_e_e: Option<f64>,
    pub symptom_score: Option<f64>,
    pub exercise_capacity: Option<f64>,
    #[serde(default)]
    pub current_medications: CurrentMedications,
}

/// Which drug classes the patient currently takes. Four independent flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CurrentMedications {
    #[serde(default)]
    pub ace_arb: bool,
    #[serde(default)]
    pub beta_blocker: bool,
    #[serde(default)]
    pub diuretic: bool,
    #[serde(default)]
    pub mra: bool,
}

/// Raw form state for the diagnostic calculator, field-for-field what the
/// UI holds: text inputs as strings, checkboxes as booleans.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawDiagnosticInput {
    pub age: String,
    pub bmi: String,
    pub hf2pef_score: String,
    pub e_e_medial: String,
    pub e_e_lateral: String,
    pub pasp: String,
    pub lv_mass: String,
    pub lv_ef: String,
    pub mean_ecv: String,
    pub lv_longitudinal_strain: String,
    #[serde(default)]
    pub diabetes: bool,
    #[serde(default)]
    pub hypertension: bool,
}

impl From<&RawDiagnosticInput> for DiagnosticInput {
    fn from(raw: &RawDiagnosticInput) -> Self {
        Self {
            age: parse_field(&raw.age),
            bmi: parse_field(&raw.bmi),
            hf2pef_score: parse_field(&raw.hf2pef_score),
            e_e_medial: parse_field(&raw.e_e_medial),
            e_e_lateral: parse_field(&raw.e_e_lateral),
            pasp: parse_field(&raw.pasp),
            lv_mass: parse_field(&raw.lv_mass),
            lv_ef: parse_field(&raw.lv_ef),
            mean_ecv: parse_field(&raw.mean_ecv),
            lv_longitudinal_strain: parse_field(&raw.lv_longitudinal_strain),
            diabetes: raw.diabetes,
            hypertension: raw.hypertension,
        }
    }
}

/// Raw form state for the prognostic assessment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawPrognosticInput {
    pub age: String,
    pub bmi: String,
    pub mean_ecv: String,
    pub lv_strain: String,
    pub e_e_ratio: String,
    pub quality_of_life: String,
    pub pasp: String,
    #[serde(default)]
    pub diabetes: bool,
}

impl From<&RawPrognosticInput> for PrognosticInput {
    fn from(raw: &RawPrognosticInput) -> Self {
        Self {
            age: parse_field(&raw.age),
            bmi: parse_field(&raw.bmi),
            mean_ecv: parse_field(&raw.mean_ecv),
            lv_strain: parse_field(&raw.lv_strain),
            e_e_ratio: parse_field(&raw.e_e_ratio),
            quality_of_life: parse_field(&raw.quality_of_life),
            pasp: parse_field(&raw.pasp),
            diabetes: raw.diabetes,
        }
    }
}

/// Raw form state for the treatment optimizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawTreatmentInput {
    pub baseline_ecv: String,
    pub baseline_pasp: String,
    pub baseline_e_e: String,
    pub symptom_score: String,
    pub exercise_capacity: String,
    #[serde(default)]
    pub current_medications: CurrentMedications,
}

impl From<&RawTreatmentInput> for TreatmentInput {
    fn from(raw: &RawTreatmentInput) -> Self {
        Self {
            baseline_ecv: parse_field(&raw.baseline_ecv),
            baseline_pasp: parse_field(&raw.baseline_pasp),
            baseline_e_e: parse_field(&raw.baseline_e_e),
            symptom_score: parse_field(&raw.symptom_score),
            exercise_capacity: parse_field(&raw.exercise_capacity),
            current_medications: raw.current_medications,
        }
    }
}
