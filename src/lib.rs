//! Rule-string driven validation for structured data records
//!
//! Validates a record (attribute name → JSON value) against declarative
//! rule-strings like `"required|max:10"` and reports the first rule that
//! failed. Rules are pipe-separated tokens; a token may carry
//! colon-separated parameters, themselves comma-separated with quoting
//! support (`in:"a,b",c`). The `regex` rule keeps its whole remainder as a
//! single pattern parameter.
//!
//! # Examples
//!
//! ## Basic Validation
//!
//! ```
//! use rulecheck::Validator;
//! use serde_json::json;
//!
//! let mut validator = Validator::make(
//!     json!({"email": "user@example.com", "age": 30}),
//!     vec![
//!         ("email", "required|email"),
//!         ("age", "required|integer|between:18,120"),
//!     ],
//! );
//! assert!(validator.passes().unwrap());
//! ```
//!
//! ## Inspecting a Failure
//!
//! ```
//! use rulecheck::Validator;
//! use serde_json::json;
//!
//! let mut validator = Validator::make(
//!     json!({"name": "  "}),
//!     vec![("name", "required|max:20")],
//! );
//! assert!(validator.fails().unwrap());
//!
//! let failure = validator.failure().unwrap();
//! assert_eq!(failure.attribute, "name");
//! assert_eq!(failure.rule, "required");
//! ```
//!
//! ## Optional Attributes
//!
//! A null or absent value satisfies every rule except `required`, so
//! optional attributes only need the checks that apply when a value is
//! actually present:
//!
//! ```
//! use rulecheck::Validator;
//! use serde_json::json;
//!
//! // "nickname" is absent, so max:10 is skipped
//! let mut validator = Validator::make(json!({}), vec![("nickname", "max:10")]);
//! assert!(validator.passes().unwrap());
//! ```
//!
//! ## Configuration Errors
//!
//! A misspelled rule name or a missing parameter is a programmer error,
//! not a validation failure, and aborts the run:
//!
//! ```
//! use rulecheck::{RuleError, Validator};
//! use serde_json::json;
//!
//! let mut validator = Validator::make(json!({"x": 1}), vec![("x", "bogus")]);
//! assert_eq!(
//!     validator.passes(),
//!     Err(RuleError::UnknownRule("bogus".to_string())),
//! );
//! ```

mod errors;
mod messages;
mod parser;
mod registry;
mod size;
mod validator;
mod validators;

pub use errors::*;
pub use messages::*;
pub use parser::RuleList;
pub use validator::*;
