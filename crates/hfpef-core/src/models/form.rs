use serde::Serialize;
use ts_rs::TS;

/// A numeric form field: input id, display label with units, optional
/// placeholder and input step. The form layer renders from these tables
/// rather than hardcoding its own field lists.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub step: Option<f64>,
}

/// A boolean form field (checkbox).
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct ToggleSpec {
    pub id: &'static str,
    pub label: &'static str,
}

const fn field(
    id: &'static str,
    label: &'static str,
    placeholder: Option<&'static str>,
    step: Option<f64>,
) -> FieldSpec {
    FieldSpec {
        id,
        label,
        placeholder,
        step,
    }
}

pub const DIAGNOSTIC_FIELDS: &[FieldSpec] = &[
    field("age", "Age (years)", Some("65"), None),
    field("bmi", "BMI (kg/m²)", Some("28.5"), Some(0.1)),
    field("hf2pef_score", "HF2PEF Score", Some("6"), None),
    field("e_e_medial", "E/e' Medial", Some("15.2"), Some(0.1)),
    field("e_e_lateral", "E/e' Lateral", Some("12.8"), Some(0.1)),
    field("pasp", "PASP (mmHg)", Some("42"), None),
    field("mean_ecv", "Mean ECV (%)", Some("28.5"), Some(0.1)),
    field(
        "lv_longitudinal_strain",
        "LV Longitudinal Strain (%)",
        Some("-16.2"),
        Some(0.1),
    ),
];

pub const DIAGNOSTIC_TOGGLES: &[ToggleSpec] = &[
    ToggleSpec {
        id: "diabetes",
        label: "Diabetes Mellitus",
    },
    ToggleSpec {
        id: "hypertension",
        label: "Hypertension",
    },
];

pub const PROGNOSTIC_FIELDS: &[FieldSpec] = &[
    field("age", "Age (years)", None, None),
    field("bmi", "BMI (kg/m²)", None, Some(0.1)),
    field("mean_ecv", "Mean ECV (%)", None, Some(0.1)),
    field("lv_strain", "LV Strain (%)", None, Some(0.1)),
    field("e_e_ratio", "Mean E/e'", None, Some(0.1)),
    field("quality_of_life", "Quality of Life Score", None, None),
];

pub const PROGNOSTIC_TOGGLES: &[ToggleSpec] = &[ToggleSpec {
    id: "diabetes",
    label: "Diabetes Mellitus",
}];

pub const TREATMENT_FIELDS: &[FieldSpec] = &[
    field("baseline_ecv", "Baseline ECV (%)", None, Some(0.1)),
    field("baseline_pasp", "Baseline PASP (mmHg)", None, None),
    field("baseline_e_e", "Baseline E/e'", None, Some(0.1)),
    field("symptom_score", "Symptom Score (0-100)", None, None),
    field("exercise_capacity", "Exercise Capacity (meters)", None, None),
];

pub const MEDICATION_TOGGLES: &[ToggleSpec] = &[
    ToggleSpec {
        id: "ace_arb",
        label: "ACE Inhibitor / ARB",
    },
    ToggleSpec {
        id: "beta_blocker",
        label: "Beta Blocker",
    },
    ToggleSpec {
        id: "diuretic",
        label: "Loop Diuretic",
    },
    ToggleSpec {
        id: "mra",
        label: "MRA (Spironolactone/Eplerenone)",
    },
];
