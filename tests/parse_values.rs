use ll1_json::{parse, Object, Value};
use rstest::rstest;

#[rstest]
#[case("0", Value::Integer(0))]
#[case("10", Value::Integer(10))]
#[case("9999999999", Value::Integer(9_999_999_999))]
#[case("-42", Value::Integer(-42))]
#[case("null", Value::Null)]
#[case("true", Value::Bool(true))]
#[case("false", Value::Bool(false))]
#[case("\"any string\"", Value::String("any string".to_string()))]
#[case("\"\"", Value::String(String::new()))]
#[case("\"  \"", Value::String("  ".to_string()))]
#[case("\"防火墙sucks\"", Value::String("防火墙sucks".to_string()))]
fn parses_canonical_literals(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(parse(input).unwrap(), expected);
}

#[rstest]
#[case("0.128", 0.128)]
#[case("123.456e-2", 1.23456)]
#[case("-0.789e+11", -7.89e10)]
fn parses_floats_within_epsilon(#[case] input: &str, #[case] expected: f64) {
    let value = parse(input).unwrap();
    let float = value.as_f64().unwrap();
    assert!(value.is_float());
    assert!((float - expected).abs() < 1e-5, "{input} parsed to {float}");
}

#[rstest]
fn decodes_escape_sequences() {
    let value = parse(r#"" \" \\ \/ \b \f \n \r \t ""#).unwrap();
    assert_eq!(
        value.as_str(),
        Some(" \" \\ / \u{0008} \u{000C} \n \r \t ")
    );
}

#[rstest]
fn decodes_unicode_escapes() {
    let bs = '\\';
    let input = format!(r#""{bs}u6211{bs}u7231{bs}u4f60""#);
    assert_eq!(parse(&input).unwrap().as_str(), Some("我爱你"));

    let input = format!(r#""{bs}u4e2D {bs}u56FD""#);
    assert_eq!(parse(&input).unwrap().as_str(), Some("中 国"));
}

#[rstest]
fn unicode_escapes_are_not_combined_into_surrogate_pairs() {
    // The surrogate pair for U+1F600 stays two independent code units.
    let bs = '\\';
    let input = format!(r#""{bs}uD83D{bs}uDE00""#);
    let value = parse(&input).unwrap();
    let decoded = value.as_str().unwrap();
    assert_eq!(decoded.chars().count(), 2);
    assert!(decoded.chars().all(|ch| ch == '\u{FFFD}'));
}

#[rstest]
fn parses_empty_containers() {
    assert_eq!(parse("{}").unwrap(), Value::Object(Object::new()));
    assert_eq!(parse("[]").unwrap(), Value::Array(Vec::new()));
}

#[rstest]
fn parses_nested_object_array_object() {
    let value = parse(
        r#"{
            "users": [
                {"name": "Ada", "age": 37},
                {"name": "Grace", "age": 60}
            ],
            "active": true
        }"#,
    )
    .unwrap();

    assert_eq!(value["users"][0]["name"].as_str(), Some("Ada"));
    assert_eq!(value["users"][1]["age"], Value::Integer(60));
    assert_eq!(value["active"], Value::Bool(true));
    assert_eq!(value["users"].as_array().unwrap().len(), 2);
}

#[rstest]
fn duplicate_keys_keep_the_last_value() {
    let value = parse(r#"{"k": "first", "k": "second"}"#).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object["k"].as_str(), Some("second"));
}

#[rstest]
fn surrounding_whitespace_is_ignored() {
    let value = parse(" \n\t {\"a\" : [ 1 , 2 ] } \r\n").unwrap();
    assert_eq!(value["a"][1], Value::Integer(2));
}

#[rstest]
#[case("null")]
#[case("[1,-2.5,\"x\"]")]
#[case(r#"{"a":1,"b":[true,null],"c":{"d":"e \" f"}}"#)]
#[case(r#""line\nbreak""#)]
#[case("[1.0,2e3]")]
fn rendered_text_reparses_to_an_equal_tree(#[case] input: &str) {
    let first = parse(input).unwrap();
    let second = parse(&first.to_string()).unwrap();
    assert_eq!(first, second);
}

#[rstest]
fn values_compare_structurally_regardless_of_key_order() {
    let left = parse(r#"{"a": 1, "b": 2}"#).unwrap();
    let right = parse(r#"{"b": 2, "a": 1}"#).unwrap();

    let left = left.as_object().unwrap();
    let right = right.as_object().unwrap();
    assert_eq!(left.len(), right.len());
    for (key, value) in left {
        assert_eq!(right.get(key.as_str()), Some(value));
    }
}
