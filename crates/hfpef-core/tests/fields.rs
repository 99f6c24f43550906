use hfpef_core::parse_field;

#[test]
fn plain_and_decimal_values_parse() {
    assert_eq!(parse_field("65"), Some(65.0));
    assert_eq!(parse_field("28.5"), Some(28.5));
    assert_eq!(parse_field("-16.2"), Some(-16.2));
    assert_eq!(parse_field("0"), Some(0.0));
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert_eq!(parse_field("  42 "), Some(42.0));
    assert_eq!(parse_field("\t15.2\n"), Some(15.2));
}

#[test]
fn empty_and_free_text_are_absent() {
    assert_eq!(parse_field(""), None);
    assert_eq!(parse_field("   "), None);
    assert_eq!(parse_field("n/a"), None);
    assert_eq!(parse_field("42 mmHg"), None);
}

#[test]
fn non_finite_values_are_absent() {
    assert_eq!(parse_field("inf"), None);
    assert_eq!(parse_field("-inf"), None);
    assert_eq!(parse_field("NaN"), None);
}
