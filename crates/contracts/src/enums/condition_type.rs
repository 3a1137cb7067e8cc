use serde::{Deserialize, Serialize};

/// Kind of message-matching condition a rule is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionType {
    /// Matches every message, no value required
    Always,
    /// Value is a literal substring to search for
    #[default]
    ContainsText,
    /// Value is a field name appearing before `=` in the message
    ContainsField,
}

impl ConditionType {
    /// Form/radio value of the condition type
    pub fn code(&self) -> &'static str {
        match self {
            ConditionType::Always => "always",
            ConditionType::ContainsText => "contains_text",
            ConditionType::ContainsField => "contains_field",
        }
    }

    /// Human readable name shown next to the radio button
    pub fn display_name(&self) -> &'static str {
        match self {
            ConditionType::Always => "All messages (always match)",
            ConditionType::ContainsText => "Message contains keyword",
            ConditionType::ContainsField => "Message contains field",
        }
    }

    /// All condition types in the order the form lists them
    pub fn all() -> Vec<ConditionType> {
        vec![
            ConditionType::Always,
            ConditionType::ContainsText,
            ConditionType::ContainsField,
        ]
    }

    /// Strict parsing, unknown codes are rejected
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "always" => Some(ConditionType::Always),
            "contains_text" => Some(ConditionType::ContainsText),
            "contains_field" => Some(ConditionType::ContainsField),
            _ => None,
        }
    }

    /// Resolve the value of the checked radio button.
    ///
    /// Nothing checked falls back to `ContainsText`; any value other than
    /// `always` or `contains_text` is treated as `ContainsField`.
    pub fn from_selection(value: Option<&str>) -> Self {
        match value {
            None => ConditionType::ContainsText,
            Some("always") => ConditionType::Always,
            Some("contains_text") => ConditionType::ContainsText,
            Some(_) => ConditionType::ContainsField,
        }
    }
}

impl std::fmt::Display for ConditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
