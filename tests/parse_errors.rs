use ll1_json::{parse, parse_slice, ErrorKind};
use rstest::rstest;

fn parse_kind(input: &str) -> ErrorKind {
    parse(input).unwrap_err().kind
}

#[rstest]
#[case("")]
#[case("   \n\r  \t ")]
fn empty_or_blank_input_is_an_unexpected_token(#[case] input: &str) {
    // EOF shows up where a value was expected.
    assert_eq!(parse_kind(input), ErrorKind::UnexpectedToken);
}

#[rstest]
#[case("01", ErrorKind::InvalidNumber)]
#[case("-01", ErrorKind::InvalidNumber)]
#[case("-", ErrorKind::InvalidNumber)]
#[case("1.", ErrorKind::InvalidNumber)]
#[case("2e", ErrorKind::InvalidNumber)]
#[case("2e+", ErrorKind::InvalidNumber)]
#[case("+10", ErrorKind::UnexpectedCharacter)]
#[case(".123", ErrorKind::UnexpectedCharacter)]
fn malformed_numbers_are_rejected(#[case] input: &str, #[case] kind: ErrorKind) {
    assert_eq!(parse_kind(input), kind, "input {input:?}");
}

#[rstest]
#[case("'hello'", ErrorKind::UnexpectedCharacter)]
#[case("\"missing", ErrorKind::UnterminatedString)]
#[case(r#"" \' ""#, ErrorKind::InvalidEscape)]
#[case(r#""\ua02h""#, ErrorKind::InvalidEscape)]
#[case(r#""\u12""#, ErrorKind::InvalidEscape)]
fn malformed_strings_are_rejected(#[case] input: &str, #[case] kind: ErrorKind) {
    assert_eq!(parse_kind(input), kind, "input {input:?}");
}

#[rstest]
#[case("tru")]
#[case("truth")]
#[case("fals")]
#[case("nil")]
fn misspelled_keywords_are_unexpected_characters(#[case] input: &str) {
    assert_eq!(parse_kind(input), ErrorKind::UnexpectedCharacter);
}

#[rstest]
#[case("[1, 2,]")]
#[case(r#"{"a": 1,}"#)]
#[case("[1 2]")]
#[case(r#"{"a" 1}"#)]
#[case("{1: 2}")]
#[case("[1, 2")]
#[case(r#"{"a": "#)]
#[case("]")]
fn grammar_violations_are_unexpected_tokens(#[case] input: &str) {
    assert_eq!(parse_kind(input), ErrorKind::UnexpectedToken, "input {input:?}");
}

#[rstest]
#[case("1 2")]
#[case("{} []")]
#[case("null null")]
#[case("true,")]
fn extra_content_after_the_value_is_trailing_data(#[case] input: &str) {
    assert_eq!(parse_kind(input), ErrorKind::TrailingData, "input {input:?}");
}

#[rstest]
fn non_utf8_bytes_are_an_invalid_argument() {
    let err = parse_slice(&[b'{', 0xC0, b'}']).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidArgument);
}

#[rstest]
fn failures_abort_without_partial_results() {
    // The innermost rule that detects the mismatch names the failure.
    let err = parse(r#"{"a": [1, 2, x]}"#).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedCharacter);

    let err = parse(r#"{"a": [1, "b\q"]}"#).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidEscape);
}

#[rstest]
fn errors_report_an_offset_and_a_message() {
    let err = parse("  %").unwrap_err();
    assert_eq!(err.offset, Some(2));
    assert!(err.to_string().contains("offset 2"));

    let err = parse("[1, 2,]").unwrap_err();
    assert!(err.to_string().contains("']'") || err.to_string().contains("expected"));
}
