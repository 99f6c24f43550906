//! The single parsing contract the form layer must honor: a field is
//! "present" only if its raw text parses to a finite number. Anything else
//! (empty string, free text, infinities, NaN) is treated as absent and
//! contributes nothing to any score.

/// Parse a raw form value. `None` is not an error — clinical forms are
/// filled incrementally and absent fields simply do not contribute.
pub fn parse_field(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
