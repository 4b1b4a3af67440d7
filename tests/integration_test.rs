//! Integration tests for rulecheck

use rulecheck::*;
use serde_json::json;
use std::collections::HashMap;

#[test]
fn test_passes_and_fails_are_exact_negations() {
    let cases = vec![
        (json!({"n": 7}), vec![("n", "required|integer|max:10")]),
        (json!({"n": 70}), vec![("n", "required|integer|max:10")]),
        (json!({}), vec![("n", "required|integer|max:10")]),
        (json!({"n": "7"}), vec![("n", "required|integer|max:10")]),
    ];

    for (data, rules) in cases {
        let mut a = Validator::make(data.clone(), rules.clone());
        let mut b = Validator::make(data, rules);
        assert_eq!(a.passes().unwrap(), !b.fails().unwrap());
    }
}

#[test]
fn test_repeated_runs_are_idempotent() {
    let mut validator = Validator::make(
        json!({"name": "", "age": 30}),
        vec![("name", "required"), ("age", "integer")],
    );

    assert!(validator.fails().unwrap());
    let first = validator.failure().cloned();
    assert!(validator.fails().unwrap());
    assert_eq!(validator.failure().cloned(), first);
}

#[test]
fn test_attributes_without_rules_never_affect_the_outcome() {
    let rules = vec![("name", "required|string")];

    let mut bare = Validator::make(json!({"name": "alice"}), rules.clone());
    let mut extra = Validator::make(
        json!({"name": "alice", "junk": [1, 2], "more": null}),
        rules,
    );

    assert_eq!(bare.passes().unwrap(), extra.passes().unwrap());
}

#[test]
fn test_short_circuit_across_attributes() {
    // "a" is declared first and fails its first rule; the unknown rule on
    // "b" would abort the run if it were ever reached.
    let mut validator = Validator::make(
        json!({"a": "not a number", "b": 1}),
        vec![("a", "integer"), ("b", "bogus")],
    );

    assert!(validator.fails().unwrap());
    let failure = validator.failure().unwrap();
    assert_eq!(failure.attribute, "a");
    assert_eq!(failure.rule, "integer");

    // once "a" is fixed, "b" gets its turn and the configuration error surfaces
    let mut validator = Validator::make(
        json!({"a": 1, "b": 1}),
        vec![("a", "integer"), ("b", "bogus")],
    );
    assert_eq!(
        validator.passes(),
        Err(RuleError::UnknownRule("bogus".to_string())),
    );
}

#[test]
fn test_short_circuit_within_an_attribute() {
    let mut validator = Validator::make(
        json!({"x": "abc"}),
        vec![("x", "integer|bogus")],
    );

    assert!(validator.fails().unwrap());
    assert_eq!(validator.failure().unwrap().rule, "integer");
}

#[test]
fn test_nullable_skip() {
    let mut validator = Validator::make(json!({}), vec![("x", "max:5")]);
    assert!(validator.passes().unwrap());

    let mut validator = Validator::make(json!({}), vec![("x", "required|max:5")]);
    assert!(validator.fails().unwrap());
    assert_eq!(validator.failure().unwrap().rule, "required");

    // an explicit null behaves exactly like an absent key
    let mut validator = Validator::make(json!({"x": null}), vec![("x", "required|max:5")]);
    assert!(validator.fails().unwrap());
}

#[test]
fn test_integer_size_is_magnitude_not_digit_count() {
    let mut validator = Validator::make(json!({"n": 7}), vec![("n", "max:10")]);
    assert!(validator.passes().unwrap());

    let mut validator = Validator::make(json!({"n": 11}), vec![("n", "max:10")]);
    assert!(validator.fails().unwrap());
}

#[test]
fn test_string_size_counts_code_points() {
    let mut validator = Validator::make(json!({"s": "héllo"}), vec![("s", "size:5")]);
    assert!(validator.passes().unwrap());
}

#[test]
fn test_parameter_quoting() {
    let rules = vec![("x", r#"in:"a,b",c"#)];

    let mut validator = Validator::make(json!({"x": "a,b"}), rules.clone());
    assert!(validator.passes().unwrap());

    let mut validator = Validator::make(json!({"x": "a"}), rules);
    assert!(validator.fails().unwrap());
}

#[test]
fn test_regex_parameter_keeps_commas() {
    let mut validator = Validator::make(
        json!({"s": "abc,def"}),
        vec![("s", "regex:/^[a-z,]+$/")],
    );
    assert!(validator.passes().unwrap());
}

#[test]
fn test_unknown_rule_error() {
    let mut validator = Validator::make(json!({"x": 1}), vec![("x", "bogus")]);
    assert_eq!(
        validator.passes(),
        Err(RuleError::UnknownRule("bogus".to_string())),
    );
}

#[test]
fn test_parameter_count_error() {
    let mut validator = Validator::make(json!({"x": 3}), vec![("x", "between:1")]);
    assert_eq!(
        validator.passes(),
        Err(RuleError::ParameterCount {
            rule: "between".to_string(),
            required: 2,
            got: 1,
        }),
    );
}

#[test]
fn test_rule_name_normalization() {
    let mut snake = Validator::make(
        json!({"d": "2024-03-01"}),
        vec![("d", "date_format:%Y-%m-%d")],
    );
    let mut camel = Validator::make(
        json!({"d": "2024-03-01"}),
        vec![("d", "dateFormat:%Y-%m-%d")],
    );

    assert!(snake.passes().unwrap());
    assert!(camel.passes().unwrap());
}

#[test]
fn test_rule_order_is_declaration_order() {
    // both rules would fail; the first declared one is recorded
    let mut validator = Validator::make(
        json!({"x": "way too long to fit"}),
        vec![("x", "max:3|alphaNum")],
    );
    assert!(validator.fails().unwrap());
    assert_eq!(validator.failure().unwrap().rule, "max");
}

#[test]
fn test_full_registration_form() {
    let mut validator = Validator::make(
        json!({
            "username": "alice01",
            "email": "alice@example.com",
            "phone": "13912345678",
            "age": 30,
            "score": 87.5,
            "host": "10.0.0.1",
            "role": "admin",
            "tags": ["a", "b"],
            "joined": "2024-03-01",
        }),
        vec![
            ("username", "required|alphaNum|between:3,20"),
            ("email", "required|email"),
            ("phone", "required|mobile"),
            ("age", "required|integer|between:18,120"),
            ("score", "float"),
            ("host", "ip"),
            ("role", "in:admin,editor,viewer"),
            ("tags", "array|max:5"),
            ("joined", "date_format:%Y-%m-%d"),
        ],
    );

    assert!(validator.passes().unwrap());
}

// A minimal renderer showing how MessageProvider combines with the
// recorded failure to produce text; the engine itself never does this.
struct StaticMessages;

impl MessageProvider for StaticMessages {
    fn rule_messages(&self) -> HashMap<String, String> {
        HashMap::from([("required".to_string(), ":attribute is required".to_string())])
    }

    fn custom_messages(&self) -> HashMap<String, String> {
        HashMap::from([(
            "email.required".to_string(),
            "we need your email address".to_string(),
        )])
    }

    fn attributes(&self) -> HashMap<String, String> {
        HashMap::from([("email".to_string(), "E-Mail Address".to_string())])
    }
}

#[test]
fn test_external_message_rendering() {
    let mut validator = Validator::make(json!({}), vec![("email", "required|email")]);
    assert!(validator.fails().unwrap());

    let failure = validator.failure().unwrap();
    let provider = StaticMessages;

    let key = format!("{}.{}", failure.attribute, failure.rule);
    let template = provider
        .custom_messages()
        .get(&key)
        .cloned()
        .or_else(|| provider.rule_messages().get(&failure.rule).cloned())
        .unwrap();

    assert_eq!(template, "we need your email address");
}
