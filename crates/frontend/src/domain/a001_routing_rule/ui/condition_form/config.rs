use serde::Deserialize;

/// Names of the host page elements the condition form is bound to.
///
/// Passed from JS as an object with camelCase keys; missing keys keep
/// their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConditionFormConfig {
    /// `name` shared by the condition type radio buttons
    pub radio_name: String,
    pub label_id: String,
    pub input_id: String,
    pub help_id: String,
}

impl Default for ConditionFormConfig {
    fn default() -> Self {
        Self {
            radio_name: "condition_type".to_string(),
            label_id: "conditionValueLabel".to_string(),
            input_id: "conditionValueInput".to_string(),
            help_id: "conditionValueHelp".to_string(),
        }
    }
}

impl ConditionFormConfig {
    pub fn radio_selector(&self) -> String {
        format!("input[name=\"{}\"]", self.radio_name)
    }
}
