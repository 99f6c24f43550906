//! hfpef-core
//!
//! Pure domain types for the HFpEF clinical decision support tools: input
//! snapshots, the numeric field-parsing rule, and the form field tables.
//! No scoring logic — this is the shared vocabulary between the form layer
//! and the scoring crate.

pub mod fields;
pub mod models;

pub use fields::parse_field;
pub use models::inputs::{
    CurrentMedications, DiagnosticInput, PrognosticInput, RawDiagnosticInput, RawPrognosticInput,
    RawTreatmentInput, TreatmentInput,
};
