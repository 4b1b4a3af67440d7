// Rule registry: studly name -> check function + minimum arity

use crate::errors::RuleError;
use crate::validators;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

pub(crate) type Check = fn(&Value, &[String]) -> Result<bool, RuleError>;

/// A registered rule: its check function and the parameter count it
/// requires. The engine enforces the arity before the check body runs.
pub(crate) struct Rule {
    pub check: Check,
    pub min_params: usize,
}

static REGISTRY: Lazy<HashMap<&'static str, Rule>> = Lazy::new(|| {
    let mut rules = HashMap::new();
    let mut add = |name, check, min_params| {
        rules.insert(name, Rule { check, min_params });
    };

    add("Required", validators::required as Check, 0);
    add("Integer", validators::integer, 0);
    add("Boolean", validators::boolean, 0);
    add("String", validators::string, 0);
    add("Numeric", validators::numeric, 0);
    add("Float", validators::float, 0);
    add("Array", validators::array, 0);
    add("AlphaNum", validators::alpha_num, 0);
    add("NoSpace", validators::no_space, 0);
    add("Ip", validators::ip, 0);
    add("Email", validators::email, 0);
    add("Mobile", validators::mobile, 0);
    add("IdNumber", validators::id_number, 0);
    add("Max", validators::max, 1);
    add("Min", validators::min, 1);
    add("Size", validators::size, 1);
    add("Between", validators::between, 2);
    add("In", validators::is_in, 1);
    add("Contain", validators::contain, 1);
    add("Regex", validators::regex, 1);
    add("DateFormat", validators::date_format, 1);

    rules
});

pub(crate) fn get(key: &str) -> Option<&'static Rule> {
    REGISTRY.get(key)
}
