// Validation engine

use crate::errors::RuleError;
use crate::parser::{self, ParsedRule, RuleList};
use crate::registry;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// The first unsatisfied rule of a validation run: which rule failed on
/// which attribute. The rule name is recorded exactly as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub attribute: String,
    pub rule: String,
}

/// Validates a data record against per-attribute rule-strings.
///
/// Rules are exploded into tokens once at construction; the data map is
/// only read. Attributes are checked in declaration order and validation
/// stops at the first unsatisfied rule.
#[derive(Debug, Clone)]
pub struct Validator {
    data: Map<String, Value>,
    rules: Vec<(String, Vec<String>)>,
    failure: Option<Failure>,
}

impl Validator {
    /// Builds a validator from a data record and a rules map.
    ///
    /// `data` is expected to be a JSON object; anything else behaves as an
    /// empty record, where every attribute resolves to null. Each rules
    /// entry accepts either a `|`-joined string or a token list (see
    /// [`RuleList`]); entry order is preserved and determines evaluation
    /// order.
    pub fn make<K, R, I>(data: Value, rules: I) -> Self
    where
        I: IntoIterator<Item = (K, R)>,
        K: Into<String>,
        R: Into<RuleList>,
    {
        let data = match data {
            Value::Object(members) => members,
            _ => Map::new(),
        };
        let rules = rules
            .into_iter()
            .map(|(attribute, list)| (attribute.into(), list.into().into_tokens()))
            .collect();

        Self {
            data,
            rules,
            failure: None,
        }
    }

    /// Runs the validation and returns whether every rule is satisfied.
    ///
    /// The recorded outcome is reset at the start of every call, so
    /// repeated runs over unchanged data are idempotent. Stops at the
    /// first unsatisfied rule, skipping everything after it.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] for configuration mistakes: an unknown rule
    /// name, too few parameters, or a malformed parameter. These abort the
    /// run and are distinct from an ordinary failed check.
    pub fn passes(&mut self) -> Result<bool, RuleError> {
        self.failure = None;

        let mut failure = None;
        'attributes: for (attribute, tokens) in &self.rules {
            for token in tokens {
                let parsed = parser::parse(token);
                if !Self::evaluate(&self.data, attribute, &parsed)? {
                    debug!("rule '{}' failed for attribute '{}'", parsed.name, attribute);
                    failure = Some(Failure {
                        attribute: attribute.clone(),
                        rule: parsed.name,
                    });
                    break 'attributes;
                }
            }
        }

        self.failure = failure;
        Ok(self.failure.is_none())
    }

    /// The exact negation of [`passes`](Self::passes).
    pub fn fails(&mut self) -> Result<bool, RuleError> {
        Ok(!self.passes()?)
    }

    /// The `(attribute, rule)` pair recorded by the last run, if it failed.
    ///
    /// Turning the pair into human text is the job of an external renderer
    /// combined with a [`MessageProvider`](crate::MessageProvider).
    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    fn evaluate(
        data: &Map<String, Value>,
        attribute: &str,
        parsed: &ParsedRule,
    ) -> Result<bool, RuleError> {
        let rule = registry::get(&parsed.key)
            .ok_or_else(|| RuleError::UnknownRule(parsed.name.clone()))?;

        static NULL: Value = Value::Null;
        let value = data.get(attribute).unwrap_or(&NULL);

        // A null (or absent) value satisfies every rule except `required`,
        // so optional attributes can skip their other checks entirely.
        if parsed.key != "Required" && value.is_null() {
            trace!("attribute '{}' is null, skipping rule '{}'", attribute, parsed.name);
            return Ok(true);
        }

        if parsed.parameters.len() < rule.min_params {
            return Err(RuleError::ParameterCount {
                rule: parsed.name.clone(),
                required: rule.min_params,
                got: parsed.parameters.len(),
            });
        }

        (rule.check)(value, &parsed.parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_passing_record() {
        let mut validator = Validator::make(
            json!({"name": "alice", "age": 30}),
            vec![("name", "required|string"), ("age", "required|integer|max:120")],
        );
        assert!(validator.passes().unwrap());
        assert!(validator.failure().is_none());
    }

    #[test]
    fn test_failure_records_rule_as_declared() {
        let mut validator = Validator::make(
            json!({"d": "01/03/2024"}),
            vec![("d", "date_format:%Y-%m-%d")],
        );
        assert!(validator.fails().unwrap());
        let failure = validator.failure().unwrap();
        assert_eq!(failure.attribute, "d");
        assert_eq!(failure.rule, "date_format");
    }

    #[test]
    fn test_non_object_data_is_an_empty_record() {
        let mut validator = Validator::make(json!([1, 2, 3]), vec![("x", "required")]);
        assert!(validator.fails().unwrap());

        let mut validator = Validator::make(json!(null), vec![("x", "max:5")]);
        assert!(validator.passes().unwrap());
    }

    #[test]
    fn test_tokenized_rule_list() {
        let mut validator = Validator::make(
            json!({"tags": ["a", "b"]}),
            vec![("tags", vec!["required", "array", "max:5"])],
        );
        assert!(validator.passes().unwrap());
    }

    #[test]
    fn test_arity_checked_after_nullable_skip() {
        // a null value skips the rule before its parameters are counted
        let mut validator = Validator::make(json!({}), vec![("x", "between:1")]);
        assert!(validator.passes().unwrap());

        let mut validator = Validator::make(json!({"x": 3}), vec![("x", "between:1")]);
        let err = validator.passes().unwrap_err();
        assert_eq!(
            err,
            RuleError::ParameterCount {
                rule: "between".to_string(),
                required: 2,
                got: 1,
            }
        );
    }
}
