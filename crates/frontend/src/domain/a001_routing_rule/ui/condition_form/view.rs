use std::rc::Rc;

use super::config::ConditionFormConfig;

/// Element of the condition form that could not be found on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingElement {
    Document,
    Radios,
    Label,
    Input,
    Help,
}

impl std::fmt::Display for MissingElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let what = match self {
            MissingElement::Document => "document",
            MissingElement::Radios => "condition type radio buttons",
            MissingElement::Label => "condition value label",
            MissingElement::Input => "condition value input",
            MissingElement::Help => "condition value help",
        };
        write!(f, "{} not found", what)
    }
}

/// Elements driven by the condition form controller
pub trait ConditionFormView {
    /// Value of the checked radio button, if any
    fn checked_value(&self) -> Option<String>;
    fn set_label_text(&self, text: &str);
    fn set_placeholder(&self, text: &str);
    fn set_input_disabled(&self, disabled: bool);
    fn clear_input_value(&self);
    fn set_help_html(&self, html: &str);
    /// Run `handler` whenever any radio button's selection changes
    fn on_selection_change(&self, handler: Rc<dyn Fn()>);
}

/// Finds all form elements at once, or reports the first one missing
pub trait ConditionFormLocator {
    type View: ConditionFormView;

    fn locate(&self, config: &ConditionFormConfig) -> Result<Self::View, MissingElement>;
}
