//! Rule form: the condition type radio group and the value input that
//! depends on it.
//!
//! The page script binds [`controller::ConditionFormController`] to
//! server-rendered markup. Pages that render the form from Rust mount
//! [`component::ConditionFormFields`] instead; both use the same
//! [`display_rule::ConditionDisplayRule`] table.

pub mod component;
pub mod config;
pub mod controller;
pub mod display_rule;
pub mod dom;
pub mod view;

pub use config::ConditionFormConfig;
pub use controller::{bind, ConditionFormController};
pub use display_rule::{ConditionDisplayRule, HelpSegment};
pub use dom::DocumentLocator;
