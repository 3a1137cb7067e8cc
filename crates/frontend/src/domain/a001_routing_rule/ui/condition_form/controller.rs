use std::rc::Rc;

use contracts::enums::ConditionType;

use super::config::ConditionFormConfig;
use super::display_rule::ConditionDisplayRule;
use super::view::{ConditionFormLocator, ConditionFormView};

/// Keeps the condition value label, input and help in sync with the
/// selected condition type.
pub struct ConditionFormController<V> {
    view: V,
}

impl<V: ConditionFormView> ConditionFormController<V> {
    pub fn new(view: V) -> Self {
        Self { view }
    }

    /// Currently selected condition type; nothing checked means `ContainsText`
    pub fn resolve_selection(&self) -> ConditionType {
        ConditionType::from_selection(self.view.checked_value().as_deref())
    }

    pub fn apply_display_rule(&self) {
        let rule = ConditionDisplayRule::for_type(self.resolve_selection());

        self.view.set_label_text(rule.label);
        self.view.set_placeholder(rule.placeholder);
        if rule.clears_value() {
            self.view.clear_input_value();
        }
        self.view.set_input_disabled(!rule.input_enabled);
        self.view.set_help_html(&rule.help_html());
    }
}

/// Bind the controller to the form found by `locator`.
///
/// When any element is missing nothing is touched and no listener is
/// registered. Otherwise the display rule is applied once right away and
/// again on every selection change.
pub fn bind<L>(locator: &L, config: &ConditionFormConfig) -> Option<Rc<ConditionFormController<L::View>>>
where
    L: ConditionFormLocator,
    L::View: 'static,
{
    let view = match locator.locate(config) {
        Ok(view) => view,
        Err(missing) => {
            log::debug!("Condition form not bound: {}", missing);
            return None;
        }
    };

    let controller = Rc::new(ConditionFormController::new(view));
    let on_change = Rc::clone(&controller);
    controller
        .view
        .on_selection_change(Rc::new(move || on_change.apply_display_rule()));
    controller.apply_display_rule();

    log::debug!(
        "Condition form bound, initial type: {}",
        controller.resolve_selection()
    );
    Some(controller)
}
