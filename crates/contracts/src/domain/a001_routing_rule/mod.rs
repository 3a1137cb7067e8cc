pub mod conditions;
pub mod form;

pub use conditions::{ConditionItem, ConditionOp, RuleConditions};
pub use form::{ConditionForm, ConditionFormError};
