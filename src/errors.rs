// Error types for rule configuration problems

use thiserror::Error;

/// Fatal configuration errors raised while evaluating a rule-string.
///
/// These are programmer errors (a typo in a rule name, a missing or
/// malformed parameter), not data errors. An attribute value that merely
/// fails a check is ordinary control flow and never surfaces here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("unknown validation rule: {0}")]
    UnknownRule(String),

    #[error("validation rule {rule} requires at least {required} parameters, got {got}")]
    ParameterCount {
        rule: String,
        required: usize,
        got: usize,
    },

    #[error("validation rule {rule} has a malformed parameter: {parameter}")]
    InvalidParameter { rule: String, parameter: String },

    #[error("invalid regex pattern {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
