// Rule-string parsing

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Rules for one attribute, either as a single `|`-joined string or as an
/// already tokenized list.
///
/// Both forms normalize to the same ordered token sequence:
///
/// ```
/// use rulecheck::RuleList;
///
/// let joined: RuleList = "required|max:10".into();
/// let tokens: RuleList = vec!["required", "max:10"].into();
/// ```
#[derive(Debug, Clone)]
pub enum RuleList {
    Joined(String),
    Tokens(Vec<String>),
}

impl RuleList {
    pub(crate) fn into_tokens(self) -> Vec<String> {
        match self {
            RuleList::Joined(rules) => rules.split('|').map(str::to_string).collect(),
            RuleList::Tokens(tokens) => tokens,
        }
    }
}

impl From<&str> for RuleList {
    fn from(rules: &str) -> Self {
        RuleList::Joined(rules.to_string())
    }
}

impl From<String> for RuleList {
    fn from(rules: String) -> Self {
        RuleList::Joined(rules)
    }
}

impl From<Vec<String>> for RuleList {
    fn from(tokens: Vec<String>) -> Self {
        RuleList::Tokens(tokens)
    }
}

impl From<Vec<&str>> for RuleList {
    fn from(tokens: Vec<&str>) -> Self {
        RuleList::Tokens(tokens.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for RuleList {
    fn from(tokens: &[&str]) -> Self {
        RuleList::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

/// One parsed rule token: the name as written, its studly registry key, and
/// its parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedRule {
    pub name: String,
    pub key: String,
    pub parameters: Vec<String>,
}

/// Splits a rule token on the first `:` into a name and its parameters.
///
/// A `regex` rule keeps the entire remainder as a single parameter, since
/// patterns may contain commas and colons. Every other rule treats the
/// remainder as one CSV line with double-quote enclosure.
pub(crate) fn parse(token: &str) -> ParsedRule {
    let (name, raw) = match token.split_once(':') {
        Some((name, raw)) => (name, Some(raw)),
        None => (token, None),
    };

    let parameters = match raw {
        Some(raw) if name.eq_ignore_ascii_case("regex") => vec![raw.to_string()],
        Some(raw) => split_csv(raw),
        None => Vec::new(),
    };

    ParsedRule {
        name: name.to_string(),
        key: studly(name),
        parameters,
    }
}

// Single-line CSV field split, str_getcsv style: fields separated by
// commas, a field may be enclosed in double quotes to embed a literal
// comma, and "" inside quotes is an escaped quote.
fn split_csv(raw: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }
    fields.push(field);

    fields
}

static STUDLY_CACHE: Lazy<Mutex<HashMap<String, String>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Converts a rule name to studly caps, the canonical registry key.
///
/// Hyphens and underscores split words and each word is capitalized, so
/// `date_format`, `date-format` and `dateFormat` all normalize to
/// `DateFormat`. Results are memoized for the process lifetime; entries are
/// idempotent to recompute, so the cache needs no coordination beyond the
/// mutex.
pub(crate) fn studly(name: &str) -> String {
    if let Some(hit) = STUDLY_CACHE.lock().get(name) {
        return hit.clone();
    }

    let mut out = String::with_capacity(name.len());
    let mut capitalize = true;
    for c in name.chars() {
        if c == '-' || c == '_' {
            capitalize = true;
        } else if capitalize {
            out.extend(c.to_uppercase());
            capitalize = false;
        } else {
            out.push(c);
        }
    }

    STUDLY_CACHE
        .lock()
        .insert(name.to_string(), out.clone());
    out
}
