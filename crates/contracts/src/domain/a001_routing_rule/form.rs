use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::conditions::{ConditionItem, RuleConditions};
use crate::enums::ConditionType;

/// Errors produced when turning a submitted form into a conditions document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionFormError {
    #[error("keyword must not be empty")]
    EmptyKeyword,
    #[error("field name must not be empty")]
    EmptyFieldName,
    #[error("unsupported condition type `{0}`")]
    UnsupportedType(String),
}

/// `condition_type` / `condition_value` pair posted by the rule form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionForm {
    pub condition_type: String,
    #[serde(default)]
    pub condition_value: String,
}

impl ConditionForm {
    pub fn new(condition_type: ConditionType, condition_value: impl Into<String>) -> Self {
        Self {
            condition_type: condition_type.code().to_string(),
            condition_value: condition_value.into(),
        }
    }

    /// Build the stored conditions document from the submitted form
    pub fn into_conditions(self) -> Result<RuleConditions, ConditionFormError> {
        let condition_type = ConditionType::from_code(&self.condition_type)
            .ok_or_else(|| ConditionFormError::UnsupportedType(self.condition_type.clone()))?;
        let value = self.condition_value.trim();

        let item = match condition_type {
            ConditionType::Always => ConditionItem::Always,
            ConditionType::ContainsText if value.is_empty() => {
                return Err(ConditionFormError::EmptyKeyword)
            }
            ConditionType::ContainsText => ConditionItem::ContainsText {
                text: value.to_string(),
            },
            ConditionType::ContainsField if value.is_empty() => {
                return Err(ConditionFormError::EmptyFieldName)
            }
            ConditionType::ContainsField => ConditionItem::ContainsField {
                field: value.to_string(),
            },
        };

        Ok(RuleConditions::single(item))
    }

    /// Pre-fill the edit form from a stored document. Only the first item is shown.
    pub fn from_conditions(conditions: &RuleConditions) -> Self {
        match conditions.items.first() {
            Some(ConditionItem::Always) => Self::new(ConditionType::Always, ""),
            Some(ConditionItem::ContainsText { text }) => {
                Self::new(ConditionType::ContainsText, text.clone())
            }
            Some(ConditionItem::ContainsField { field }) => {
                Self::new(ConditionType::ContainsField, field.clone())
            }
            Some(item @ ConditionItem::Unsupported(_)) => {
                Self::new(ConditionType::ContainsField, item.field_text())
            }
            None => Self::new(ConditionType::ContainsField, ""),
        }
    }

    /// Selected type, resolved the same way the radio group resolves it
    pub fn selected_type(&self) -> ConditionType {
        ConditionType::from_selection(Some(&self.condition_type))
    }
}

impl Default for ConditionForm {
    /// New rule form: field-name condition on `symbol`
    fn default() -> Self {
        Self::new(ConditionType::ContainsField, "symbol")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_ignores_value() {
        let conditions = ConditionForm::new(ConditionType::Always, "whatever")
            .into_conditions()
            .unwrap();
        assert_eq!(conditions.to_json().unwrap(), r#"{"op":"and","items":[{"type":"always"}]}"#);
    }

    #[test]
    fn test_value_is_trimmed() {
        let conditions = ConditionForm::new(ConditionType::ContainsText, "  ETF push ")
            .into_conditions()
            .unwrap();
        assert_eq!(
            conditions.items,
            vec![ConditionItem::ContainsText { text: "ETF push".into() }]
        );
    }

    #[test]
    fn test_empty_values_are_rejected() {
        assert_eq!(
            ConditionForm::new(ConditionType::ContainsText, "   ").into_conditions(),
            Err(ConditionFormError::EmptyKeyword)
        );
        assert_eq!(
            ConditionForm::new(ConditionType::ContainsField, "").into_conditions(),
            Err(ConditionFormError::EmptyFieldName)
        );
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let form = ConditionForm {
            condition_type: "regex".into(),
            condition_value: "x".into(),
        };
        assert_eq!(
            form.into_conditions(),
            Err(ConditionFormError::UnsupportedType("regex".into()))
        );
    }

    #[test]
    fn test_prefill_from_conditions() {
        let text = RuleConditions::single(ConditionItem::ContainsText { text: "ETF".into() });
        assert_eq!(
            ConditionForm::from_conditions(&text),
            ConditionForm::new(ConditionType::ContainsText, "ETF")
        );

        let always = RuleConditions::single(ConditionItem::Always);
        assert_eq!(
            ConditionForm::from_conditions(&always),
            ConditionForm::new(ConditionType::Always, "")
        );

        assert_eq!(
            ConditionForm::from_conditions(&RuleConditions::default()),
            ConditionForm::new(ConditionType::ContainsField, "")
        );
    }

    #[test]
    fn test_prefill_keeps_field_of_unknown_item() {
        let conditions =
            RuleConditions::from_json(r#"{"op":"and","items":[{"type":"regex","field":"x"}]}"#)
                .unwrap();
        assert_eq!(
            ConditionForm::from_conditions(&conditions),
            ConditionForm::new(ConditionType::ContainsField, "x")
        );

        let untyped = RuleConditions::from_json(r#"{"items":[{"text":"ETF"}]}"#).unwrap();
        assert_eq!(
            ConditionForm::from_conditions(&untyped),
            ConditionForm::new(ConditionType::ContainsField, "")
        );
    }
}
