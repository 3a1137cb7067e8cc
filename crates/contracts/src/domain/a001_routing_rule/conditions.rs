use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::signal_parser::{ParsedFields, MESSAGE_TEXT_FIELD};

// ============================================================================
// Conditions document
// ============================================================================

/// Logical operator joining the condition items. Only `and` is evaluated;
/// any other stored value is kept as is so it survives a re-save.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ConditionOp {
    #[default]
    And,
    Unsupported(Value),
}

impl From<Value> for ConditionOp {
    fn from(value: Value) -> Self {
        match value.as_str() {
            Some("and") => ConditionOp::And,
            _ => ConditionOp::Unsupported(value),
        }
    }
}

impl From<ConditionOp> for Value {
    fn from(op: ConditionOp) -> Self {
        match op {
            ConditionOp::And => Value::String("and".to_string()),
            ConditionOp::Unsupported(raw) => raw,
        }
    }
}

/// Single condition, tagged by `type` in the stored JSON.
///
/// Reading never fails: items without a known `type` (or that are not
/// objects at all) become `Unsupported` and keep their raw JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum ConditionItem {
    Always,
    ContainsText { text: String },
    ContainsField { field: String },
    /// Never matches
    Unsupported(Value),
}

impl ConditionItem {
    fn matches(&self, fields: &ParsedFields, message_lower: &str) -> bool {
        match self {
            ConditionItem::Always => true,
            ConditionItem::ContainsField { field } => {
                !field.is_empty() && fields.contains_key(field.as_str())
            }
            ConditionItem::ContainsText { text } => {
                let target = text.trim();
                !target.is_empty() && message_lower.contains(&target.to_lowercase())
            }
            ConditionItem::Unsupported(_) => false,
        }
    }

    /// `field` of the item as text, whatever its type; empty if absent
    pub fn field_text(&self) -> String {
        match self {
            ConditionItem::ContainsField { field } => field.clone(),
            ConditionItem::Unsupported(Value::Object(raw)) => member_text(raw, "field"),
            _ => String::new(),
        }
    }
}

/// Scalar members are read as text; `null` and a missing key read as empty
fn member_text(raw: &Map<String, Value>, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

impl From<Value> for ConditionItem {
    fn from(value: Value) -> Self {
        let Value::Object(raw) = &value else {
            return ConditionItem::Unsupported(value);
        };
        let known = match raw.get("type").and_then(Value::as_str) {
            Some("always") => Some(ConditionItem::Always),
            Some("contains_text") => Some(ConditionItem::ContainsText {
                text: member_text(raw, "text"),
            }),
            Some("contains_field") => Some(ConditionItem::ContainsField {
                field: member_text(raw, "field"),
            }),
            _ => None,
        };
        known.unwrap_or(ConditionItem::Unsupported(value))
    }
}

impl From<ConditionItem> for Value {
    fn from(item: ConditionItem) -> Self {
        let mut raw = Map::new();
        match item {
            ConditionItem::Always => {
                raw.insert("type".into(), "always".into());
            }
            ConditionItem::ContainsText { text } => {
                raw.insert("type".into(), "contains_text".into());
                raw.insert("text".into(), text.into());
            }
            ConditionItem::ContainsField { field } => {
                raw.insert("type".into(), "contains_field".into());
                raw.insert("field".into(), field.into());
            }
            ConditionItem::Unsupported(value) => return value,
        }
        Value::Object(raw)
    }
}

/// Conditions of a routing rule, stored as `{"op": "and", "items": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleConditions {
    #[serde(default)]
    pub op: ConditionOp,
    #[serde(default)]
    pub items: Vec<ConditionItem>,
}

impl RuleConditions {
    pub fn single(item: ConditionItem) -> Self {
        Self {
            op: ConditionOp::And,
            items: vec![item],
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Evaluate the conditions against fields extracted from a signal.
    ///
    /// All items must pass; an empty item list matches everything.
    pub fn matches(&self, fields: &ParsedFields) -> bool {
        if self.op != ConditionOp::And {
            return false;
        }
        let message_lower = match fields.get(MESSAGE_TEXT_FIELD) {
            Some(Value::String(s)) => s.to_lowercase(),
            Some(other) => other.to_string().to_lowercase(),
            None => String::new(),
        };
        self.items
            .iter()
            .all(|item| item.matches(fields, &message_lower))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> ParsedFields {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_parse_stored_document() {
        let conditions = RuleConditions::from_json(
            r#"{"op":"and","items":[{"type":"contains_text","text":"ETF"},{"type":"contains_field","field":"symbol"}]}"#,
        )
        .unwrap();
        assert_eq!(conditions.op, ConditionOp::And);
        assert_eq!(
            conditions.items,
            vec![
                ConditionItem::ContainsText { text: "ETF".into() },
                ConditionItem::ContainsField { field: "symbol".into() },
            ]
        );
    }

    #[test]
    fn test_unknown_op_and_type_are_kept_as_unsupported() {
        let conditions =
            RuleConditions::from_json(r#"{"op":"or","items":[{"type":"regex","pattern":".*"}]}"#)
                .unwrap();
        assert_eq!(conditions.op, ConditionOp::Unsupported(json!("or")));
        assert_eq!(
            conditions.items,
            vec![ConditionItem::Unsupported(json!({"type": "regex", "pattern": ".*"}))]
        );
        // re-saving keeps what was stored
        assert_eq!(
            conditions.to_json().unwrap(),
            r#"{"op":"or","items":[{"type":"regex","pattern":".*"}]}"#
        );
    }

    #[test]
    fn test_loose_items_still_parse() {
        let conditions = RuleConditions::from_json(
            r#"{"op":"and","items":[{"text":"ETF"},"always",{"type":"contains_text","text":123},{"type":"contains_field"}]}"#,
        )
        .unwrap();
        assert_eq!(
            conditions.items,
            vec![
                ConditionItem::Unsupported(json!({"text": "ETF"})),
                ConditionItem::Unsupported(json!("always")),
                ConditionItem::ContainsText { text: "123".into() },
                ConditionItem::ContainsField { field: String::new() },
            ]
        );

        let f = fields(json!({"message_text": "order 123 filled"}));
        assert!(!conditions.matches(&f));
        assert!(RuleConditions::single(conditions.items[2].clone()).matches(&f));
    }

    #[test]
    fn test_field_text_of_unsupported_item() {
        let item = ConditionItem::from(json!({"type": "regex", "field": "x"}));
        assert_eq!(item.field_text(), "x");
        assert_eq!(ConditionItem::from(json!({"type": "regex", "field": 7})).field_text(), "7");
        assert_eq!(ConditionItem::from(json!(null)).field_text(), "");
    }

    #[test]
    fn test_always_and_empty_items_match() {
        let f = fields(json!({}));
        assert!(RuleConditions::single(ConditionItem::Always).matches(&f));
        assert!(RuleConditions::default().matches(&f));
    }

    #[test]
    fn test_contains_text_is_case_insensitive() {
        let f = fields(json!({"message_text": "Daily ETF Momentum push"}));
        let hit = RuleConditions::single(ConditionItem::ContainsText { text: " etf momentum ".into() });
        let miss = RuleConditions::single(ConditionItem::ContainsText { text: "bond".into() });
        let blank = RuleConditions::single(ConditionItem::ContainsText { text: "  ".into() });
        assert!(hit.matches(&f));
        assert!(!miss.matches(&f));
        assert!(!blank.matches(&f));
    }

    #[test]
    fn test_contains_field() {
        let f = fields(json!({"symbol": "501018", "message_text": "symbol=501018"}));
        assert!(RuleConditions::single(ConditionItem::ContainsField { field: "symbol".into() }).matches(&f));
        assert!(!RuleConditions::single(ConditionItem::ContainsField { field: "price".into() }).matches(&f));
        assert!(!RuleConditions::single(ConditionItem::ContainsField { field: String::new() }).matches(&f));
    }

    #[test]
    fn test_unsupported_never_matches() {
        let f = fields(json!({"message_text": "anything"}));
        let bad_op = RuleConditions {
            op: ConditionOp::Unsupported(json!("or")),
            items: vec![ConditionItem::Always],
        };
        assert!(!bad_op.matches(&f));
        assert!(!RuleConditions::single(ConditionItem::Unsupported(json!({}))).matches(&f));
    }
}
