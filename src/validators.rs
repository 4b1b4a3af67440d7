// Built-in rule checks

use crate::errors::RuleError;
use crate::size::size_of;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;

// Fixed patterns, compiled once
static ALPHA_NUM_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-zA-Z]+$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]+([_\-.][a-zA-Z0-9]+)*@[a-zA-Z0-9]+([-.][a-zA-Z0-9]+)*\.[a-zA-Z0-9]+([-.][a-zA-Z0-9]+)*$").unwrap()
});

static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1[34578]\d{9}$").unwrap());

static ID_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[1-6][0-9]{5}(19|20)[0-9]{2}(0[1-9]|1[0-2])(0[1-9]|[12][0-9]|3[01])[0-9]{3}[0-9xX]$")
        .unwrap()
});

// Pattern rules accept strings and coerce numbers to their decimal text,
// mirroring loose scalar handling. Booleans, nulls and collections are not
// textual and fail those checks.
fn text_of(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        _ => None,
    }
}

fn bound(rule: &str, parameter: &str) -> Result<f64, RuleError> {
    parameter
        .trim()
        .parse()
        .map_err(|_| RuleError::InvalidParameter {
            rule: rule.to_string(),
            parameter: parameter.to_string(),
        })
}

/// The value must be present: not null, not a blank string, not an empty
/// collection.
pub fn required(value: &Value, _parameters: &[String]) -> Result<bool, RuleError> {
    let satisfied = match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(members) => !members.is_empty(),
        _ => true,
    };
    Ok(satisfied)
}

/// The value must be an integer.
pub fn integer(value: &Value, _parameters: &[String]) -> Result<bool, RuleError> {
    Ok(matches!(value, Value::Number(n) if n.is_i64() || n.is_u64()))
}

/// The value must be a boolean.
pub fn boolean(value: &Value, _parameters: &[String]) -> Result<bool, RuleError> {
    Ok(value.is_boolean())
}

/// The value must be a string.
pub fn string(value: &Value, _parameters: &[String]) -> Result<bool, RuleError> {
    Ok(value.is_string())
}

/// The value must be numeric: an integer, a float, or a string that parses
/// as a number.
pub fn numeric(value: &Value, _parameters: &[String]) -> Result<bool, RuleError> {
    let satisfied = match value {
        Value::Number(_) => true,
        Value::String(s) => s.parse::<f64>().is_ok(),
        _ => false,
    };
    Ok(satisfied)
}

/// The value must be a float.
pub fn float(value: &Value, _parameters: &[String]) -> Result<bool, RuleError> {
    Ok(matches!(value, Value::Number(n) if n.is_f64()))
}

/// The value must be a collection (array or object).
pub fn array(value: &Value, _parameters: &[String]) -> Result<bool, RuleError> {
    Ok(matches!(value, Value::Array(_) | Value::Object(_)))
}

/// The value must contain only ASCII letters and digits.
pub fn alpha_num(value: &Value, _parameters: &[String]) -> Result<bool, RuleError> {
    Ok(text_of(value).is_some_and(|t| ALPHA_NUM_REGEX.is_match(&t)))
}

/// The value must not contain a space character.
pub fn no_space(value: &Value, _parameters: &[String]) -> Result<bool, RuleError> {
    Ok(text_of(value).is_some_and(|t| !t.contains(' ')))
}

/// The value must parse as an IPv4 or IPv6 literal.
pub fn ip(value: &Value, _parameters: &[String]) -> Result<bool, RuleError> {
    Ok(text_of(value).is_some_and(|t| t.parse::<std::net::IpAddr>().is_ok()))
}

/// The value must look like an email address.
pub fn email(value: &Value, _parameters: &[String]) -> Result<bool, RuleError> {
    Ok(text_of(value).is_some_and(|t| EMAIL_REGEX.is_match(&t)))
}

/// The value must be an 11-digit mobile number: `1`, then one of 3/4/5/7/8,
/// then 9 digits.
pub fn mobile(value: &Value, _parameters: &[String]) -> Result<bool, RuleError> {
    Ok(text_of(value).is_some_and(|t| MOBILE_REGEX.is_match(&t)))
}

/// The value must match the 18-character national ID layout: 6-digit region,
/// 19xx/20xx year, month 01-12, day 01-31, 3 digits, then a digit or x/X
/// check character. Day range is not validated per month.
pub fn id_number(value: &Value, _parameters: &[String]) -> Result<bool, RuleError> {
    Ok(text_of(value).is_some_and(|t| ID_NUMBER_REGEX.is_match(&t)))
}

/// The value's size must be at most the first parameter.
pub fn max(value: &Value, parameters: &[String]) -> Result<bool, RuleError> {
    Ok(size_of(value) <= bound("max", &parameters[0])?)
}

/// The value's size must be at least the first parameter.
pub fn min(value: &Value, parameters: &[String]) -> Result<bool, RuleError> {
    Ok(size_of(value) >= bound("min", &parameters[0])?)
}

/// The value's size must equal the first parameter.
pub fn size(value: &Value, parameters: &[String]) -> Result<bool, RuleError> {
    Ok(size_of(value) == bound("size", &parameters[0])?)
}

/// The value's size must lie between the first and second parameters,
/// inclusive.
pub fn between(value: &Value, parameters: &[String]) -> Result<bool, RuleError> {
    let measured = size_of(value);
    Ok(measured >= bound("between", &parameters[0])? && measured <= bound("between", &parameters[1])?)
}

/// The value must loosely equal one of the parameters: strings compare
/// directly, numbers compare numerically against the parameter text, and
/// booleans accept `true`/`false`/`1`/`0`.
pub fn is_in(value: &Value, parameters: &[String]) -> Result<bool, RuleError> {
    Ok(parameters.iter().any(|p| loose_eq(value, p)))
}

fn loose_eq(value: &Value, parameter: &str) -> bool {
    match value {
        Value::String(s) => s == parameter,
        Value::Number(n) => match (n.as_f64(), parameter.trim().parse::<f64>()) {
            (Some(v), Ok(p)) => v == p,
            _ => false,
        },
        Value::Bool(b) => matches!(
            (*b, parameter),
            (true, "true") | (true, "1") | (false, "false") | (false, "0")
        ),
        _ => false,
    }
}

/// The value must contain the first parameter as a substring.
pub fn contain(value: &Value, parameters: &[String]) -> Result<bool, RuleError> {
    Ok(text_of(value).is_some_and(|t| t.contains(parameters[0].as_str())))
}

/// The value must match the regex given as the sole parameter. Values that
/// are neither strings nor numbers fail immediately.
pub fn regex(value: &Value, parameters: &[String]) -> Result<bool, RuleError> {
    let Some(text) = text_of(value) else {
        return Ok(false);
    };
    Ok(compile_pattern(&parameters[0])?.is_match(&text))
}

// Patterns written PCRE-style as /body/flags have the delimiters stripped
// and any i/m/s/x flags moved to an inline flag group.
fn compile_pattern(pattern: &str) -> Result<Regex, RuleError> {
    let source = match pattern.strip_prefix('/') {
        Some(rest) => match rest.rfind('/') {
            Some(end) => {
                let (body, tail) = rest.split_at(end);
                let flags: String = tail[1..]
                    .chars()
                    .filter(|c| matches!(c, 'i' | 'm' | 's' | 'x'))
                    .collect();
                if flags.is_empty() {
                    Cow::Borrowed(body)
                } else {
                    Cow::Owned(format!("(?{}){}", flags, body))
                }
            }
            None => Cow::Borrowed(pattern),
        },
        None => Cow::Borrowed(pattern),
    };

    Regex::new(&source).map_err(|e| RuleError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// The value must parse completely against the strftime format given as the
/// first parameter, as a datetime, a date, or a time.
pub fn date_format(value: &Value, parameters: &[String]) -> Result<bool, RuleError> {
    let Some(text) = text_of(value) else {
        return Ok(false);
    };
    let format = parameters[0].as_str();
    Ok(NaiveDateTime::parse_from_str(&text, format).is_ok()
        || NaiveDate::parse_from_str(&text, format).is_ok()
        || NaiveTime::parse_from_str(&text, format).is_ok())
}
