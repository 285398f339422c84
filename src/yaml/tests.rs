//! Tests for YAML normalization.

use super::{normalize, normalize_str};

fn norm(input: &str) -> String {
    normalize_str(input).unwrap()
}

#[test]
fn test_keys_are_sorted() {
    assert_eq!(norm("b: 2\na: 1\n"), "a: 1\nb: 2\n");
}

#[test]
fn test_key_order_is_stable_across_calls() {
    let first = norm("zeta: 1\nalpha: 2\nmid: 3\n");
    for _ in 0..10 {
        assert_eq!(norm("zeta: 1\nalpha: 2\nmid: 3\n"), first);
    }
    assert_eq!(first, "alpha: 2\nmid: 3\nzeta: 1\n");
}

#[test]
fn test_nested_keys_are_sorted() {
    assert_eq!(norm("outer:\n  z: 1\n  a: 2\n"), "outer:\n  a: 2\n  z: 1\n");
}

#[test]
fn test_empty_mapping_collapses() {
    assert!(normalize(b"{}\n").unwrap().is_empty());
    assert!(normalize(b"{}").unwrap().is_empty());
    assert!(normalize(b"--- {}\n").unwrap().is_empty());
    assert!(normalize(b"# leading comment\n{ }\n").unwrap().is_empty());
}

#[test]
fn test_nested_empty_mapping_is_kept() {
    assert_eq!(norm("a: {}\n"), "a: {}\n");
}

#[test]
fn test_empty_sequence_is_kept() {
    assert_eq!(norm("[]"), "[]\n");
}

#[test]
fn test_empty_input_is_null_document() {
    assert_eq!(norm(""), "null\n");
    assert_eq!(norm("# only a comment\n"), "null\n");
}

#[test]
fn test_equivalent_documents_normalize_identically() {
    let block = "\
apiVersion: v1
kind: Config
clusters:
    -   name: dev
        cluster:
            server: 'https://dev.example.com'
";
    let flow = r#"{"kind": "Config", "clusters": [{"cluster": {"server": "https://dev.example.com"}, "name": dev}], apiVersion: v1}"#;

    assert_eq!(norm(block), norm(flow));
}

#[test]
fn test_quoting_differences_disappear() {
    assert_eq!(norm("a: \"plain\"\n"), norm("a: 'plain'\n"));
    assert_eq!(norm("a: 'plain'\n"), "a: plain\n");
}

#[test]
fn test_idempotent() {
    let samples = [
        "b: 2\na: 1\n",
        "list:\n- 1\n- two\n- 3.5\n- null\n",
        "s: 'true'\nn: '42'\nt: true\n",
        "deep:\n  deeper:\n    deepest: [a, {k: v}]\n",
        "multi: |\n  line one\n  line two\n",
        "1: numeric key\nfalse: bool key\n",
        "[]",
        "",
    ];

    for sample in samples {
        let once = normalize(sample.as_bytes()).unwrap();
        let twice = normalize(&once).unwrap();
        assert_eq!(once, twice, "not idempotent for {:?}", sample);
    }
}

#[test]
fn test_ambiguous_strings_stay_strings() {
    let out = norm("s: 'true'\nn: '42'\n");
    let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
    assert_eq!(value["s"], serde_yaml::Value::String("true".to_string()));
    assert_eq!(value["n"], serde_yaml::Value::String("42".to_string()));
}

#[test]
fn test_aliases_are_resolved() {
    assert_eq!(
        norm("base: &b {x: 1}\ncopy: *b\n"),
        "base:\n  x: 1\ncopy:\n  x: 1\n"
    );
}

#[test]
fn test_merge_keys_are_applied() {
    assert_eq!(
        norm("base: &b {x: 1}\nderived:\n  <<: *b\n  y: 2\n"),
        "base:\n  x: 1\nderived:\n  x: 1\n  y: 2\n"
    );
}

#[test]
fn test_only_first_document_is_used() {
    assert_eq!(norm("a: 1\n---\nb: 2\n"), "a: 1\n");
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let err = normalize(b"key: [unclosed\n").unwrap_err();
    assert!(err.is_parse());

    let err = normalize(b"a: b: c\n").unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn test_invalid_utf8_is_parse_error() {
    let err = normalize(b"a: \xc3\x28\n").unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn test_unrepresentable_document_is_parse_error() {
    assert!(normalize(b"limit: .inf\n").unwrap_err().is_parse());
    assert!(normalize(b"? {a: 1}\n: value\n").unwrap_err().is_parse());
}
