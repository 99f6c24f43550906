use hfpef_core::{CurrentMedications, TreatmentInput};
use hfpef_scoring::TreatmentAdvisor;

fn all_medications() -> CurrentMedications {
    CurrentMedications {
        ace_arb: true,
        beta_blocker: true,
        diuretic: true,
        mra: true,
    }
}

#[test]
fn adequate_therapy_yields_no_findings() {
    let input = TreatmentInput {
        baseline_pasp: Some(30.0),
        baseline_ecv: Some(20.0),
        symptom_score: Some(40.0),
        exercise_capacity: Some(400.0),
        current_medications: all_medications(),
        ..Default::default()
    };
    assert!(TreatmentAdvisor.recommend(&input).is_empty());
}

#[test]
fn untreated_high_burden_fires_all_five_rules_in_order() {
    let input = TreatmentInput {
        baseline_pasp: Some(45.0),
        baseline_ecv: Some(35.0),
        symptom_score: Some(80.0),
        exercise_capacity: Some(250.0),
        current_medications: CurrentMedications::default(),
        ..Default::default()
    };

    let recs = TreatmentAdvisor.recommend(&input);
    let categories: Vec<&str> = recs.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(
        categories,
        [
            "RAAS Inhibition",
            "Volume Management",
            "Anti-fibrotic Therapy",
            "Symptom Management",
            "Exercise Training",
        ]
    );
}

#[test]
fn ace_arb_toggle_removes_exactly_the_raas_finding() {
    let untreated = TreatmentInput {
        baseline_pasp: Some(45.0),
        baseline_ecv: Some(35.0),
        symptom_score: Some(80.0),
        exercise_capacity: Some(250.0),
        current_medications: CurrentMedications::default(),
        ..Default::default()
    };
    let on_raas = TreatmentInput {
        current_medications: CurrentMedications {
            ace_arb: true,
            ..Default::default()
        },
        ..untreated.clone()
    };

    let before = TreatmentAdvisor.recommend(&untreated);
    let after = TreatmentAdvisor.recommend(&on_raas);
    assert_eq!(before.len(), after.len() + 1);
    assert_eq!(before[0].category, "RAAS Inhibition");
    assert_eq!(&before[1..], &after[..]);
}

#[test]
fn missing_baselines_suppress_their_rules() {
    // No PASP or ECV entered: volume and anti-fibrotic rules stay silent
    // even though neither drug class is held.
    let input = TreatmentInput {
        current_medications: CurrentMedications {
            ace_arb: true,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(TreatmentAdvisor.recommend(&input).is_empty());
}

#[test]
fn thresholds_are_strict() {
    let input = TreatmentInput {
        baseline_pasp: Some(40.0),
        baseline_ecv: Some(30.0),
        symptom_score: Some(70.0),
        exercise_capacity: Some(300.0),
        current_medications: CurrentMedications {
            ace_arb: true,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(TreatmentAdvisor.recommend(&input).is_empty());
}

#[test]
fn low_exercise_capacity_fires_regardless_of_medications() {
    let input = TreatmentInput {
        exercise_capacity: Some(299.9),
        current_medications: all_medications(),
        ..Default::default()
    };
    let recs = TreatmentAdvisor.recommend(&input);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].category, "Exercise Training");
    assert_eq!(recs[0].recommendation, "Supervised cardiac rehabilitation");
}

#[test]
fn finding_text_matches_the_guidance_tables() {
    let input = TreatmentInput {
        current_medications: CurrentMedications {
            beta_blocker: true,
            diuretic: true,
            mra: true,
            ..Default::default()
        },
        ..Default::default()
    };
    let recs = TreatmentAdvisor.recommend(&input);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].recommendation, "Initiate ACE inhibitor or ARB");
    assert_eq!(recs[0].evidence, "Class I recommendation for HFpEF");
    assert_eq!(recs[0].monitoring, "Monitor renal function and potassium");
}
