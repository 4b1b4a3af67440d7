// Message rendering contract

use std::collections::HashMap;

/// Supplies the templates an external renderer combines with a recorded
/// [`Failure`](crate::Failure) to build human-readable messages.
///
/// The engine itself never calls this trait; it only reports which rule
/// failed on which attribute. Message wording, template substitution and
/// localization live entirely on the renderer side.
pub trait MessageProvider {
    /// Default template per rule name, e.g. `{"required": ":attribute is required"}`.
    fn rule_messages(&self) -> HashMap<String, String>;

    /// Overrides keyed by `"attribute"` or `"attribute.rule"`, e.g.
    /// `{"email.required": "we need your email address"}`.
    fn custom_messages(&self) -> HashMap<String, String>;

    /// Display labels keyed by attribute name, to swap `email` for
    /// something friendlier like `E-Mail Address`.
    fn attributes(&self) -> HashMap<String, String>;
}
