use contracts::domain::a001_routing_rule::{ConditionForm, RuleConditions};
use contracts::enums::ConditionType;
use leptos::either::Either;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::config::ConditionFormConfig;
use super::display_rule::{ConditionDisplayRule, HelpSegment};

/// Condition type radios plus the dependent value input, rendered from Rust.
///
/// Element ids and names follow `ConditionFormConfig`, so the form posts the
/// same `condition_type` / `condition_value` pair as the server-rendered one.
#[component]
pub fn ConditionFormFields(
    /// Type and value to start with
    initial: ConditionForm,
) -> impl IntoView {
    let config = ConditionFormConfig::default();
    let initial_type = initial.selected_type();
    let initial_value = value_after_select(initial_type, initial.condition_value);

    let (selected, set_selected) = signal(initial_type);
    let (value, set_value) = signal(initial_value);
    let rule = move || ConditionDisplayRule::for_type(selected.get());

    let select = move |condition_type: ConditionType| {
        set_selected.set(condition_type);
        set_value.update(|value| *value = value_after_select(condition_type, std::mem::take(value)));
    };

    let radio_name = config.radio_name.clone();
    let radios = ConditionType::all()
        .into_iter()
        .map(|condition_type| {
            let radio_id = format!("conditionType-{}", condition_type.code());
            view! {
                <div class="form__radio-wrapper">
                    <input
                        id=radio_id.clone()
                        type="radio"
                        class="form__radio"
                        name=radio_name.clone()
                        value=condition_type.code()
                        prop:checked=move || selected.get() == condition_type
                        on:change=move |_| select(condition_type)
                    />
                    <label class="form__radio-label" for=radio_id>
                        {condition_type.display_name()}
                    </label>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="form__group">
            <div class="form__radio-group">{radios}</div>
        </div>
        <div class="form__group">
            <label class="form__label" id=config.label_id for=config.input_id.clone()>
                {move || rule().label}
            </label>
            <input
                id=config.input_id
                class="form__input"
                type="text"
                name="condition_value"
                placeholder=move || rule().placeholder
                disabled=move || !rule().input_enabled
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
            <div class="form__help" id=config.help_id>
                {move || help_view(rule().help)}
            </div>
        </div>
    }
}

fn help_view(segments: &'static [HelpSegment]) -> impl IntoView {
    segments
        .iter()
        .map(|segment| match *segment {
            HelpSegment::Text(text) => Either::Left(text),
            HelpSegment::Code(code) => Either::Right(view! { <code>{code}</code> }),
        })
        .collect_view()
}

/// Input value once `condition_type` is selected.
///
/// A disabled input drops its value; switching back does not restore it.
pub fn value_after_select(condition_type: ConditionType, value: String) -> String {
    if ConditionDisplayRule::for_type(condition_type).clears_value() {
        String::new()
    } else {
        value
    }
}

/// Form state to start from. No stored conditions means a new rule; stored
/// conditions that cannot be read open like an empty rule.
pub fn initial_form(conditions_json: Option<&str>) -> ConditionForm {
    let Some(json) = conditions_json.filter(|json| !json.trim().is_empty()) else {
        return ConditionForm::default();
    };
    let conditions = match RuleConditions::from_json(json) {
        Ok(conditions) => conditions,
        Err(err) => {
            log::error!("Failed to parse stored rule conditions: {}", err);
            RuleConditions::default()
        }
    };
    ConditionForm::from_conditions(&conditions)
}

/// Mount `ConditionFormFields` into the element with id `target_id`.
///
/// Returns `false` if the target does not exist.
pub fn mount(target_id: &str, conditions_json: Option<&str>) -> bool {
    let Some(target) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(target_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        log::warn!("Condition form mount target `{}` not found", target_id);
        return false;
    };

    let initial = initial_form(conditions_json);
    leptos::mount::mount_to(target, move || view! { <ConditionFormFields initial=initial /> })
        .forget();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_form_defaults() {
        assert_eq!(initial_form(None), ConditionForm::default());
        assert_eq!(initial_form(Some("  ")), ConditionForm::default());
    }

    #[test]
    fn test_unreadable_conditions_open_empty() {
        let empty = ConditionForm::new(ConditionType::ContainsField, "");
        assert_eq!(initial_form(Some("not json")), empty);
        assert_eq!(initial_form(Some("[1, 2]")), empty);
        assert_eq!(initial_form(Some(r#"{"items":[{"text":"ETF"}]}"#)), empty);
        assert_eq!(
            initial_form(Some(r#"{"items":[{"type":"regex","field":"x"}]}"#)),
            ConditionForm::new(ConditionType::ContainsField, "x")
        );
    }

    #[test]
    fn test_always_clears_value() {
        assert_eq!(value_after_select(ConditionType::Always, "symbol".into()), "");
        assert_eq!(value_after_select(ConditionType::ContainsText, "ETF".into()), "ETF");
        assert_eq!(value_after_select(ConditionType::ContainsField, "x".into()), "x");
    }

    #[test]
    fn test_value_not_restored_after_always() {
        let mut value = "hello".to_string();
        for condition_type in [ConditionType::Always, ConditionType::ContainsText] {
            value = value_after_select(condition_type, value);
        }
        assert_eq!(value, "");
        assert!(ConditionDisplayRule::for_type(ConditionType::ContainsText).input_enabled);
        assert!(!ConditionDisplayRule::for_type(ConditionType::Always).input_enabled);
    }

    #[test]
    fn test_stored_always_rule_starts_empty() {
        let form = initial_form(Some(r#"{"op":"and","items":[{"type":"always"}]}"#));
        assert_eq!(value_after_select(form.selected_type(), form.condition_value), "");
    }

    #[test]
    fn test_initial_form_from_stored_conditions() {
        let form = initial_form(Some(
            r#"{"op":"and","items":[{"type":"contains_text","text":"ETF"}]}"#,
        ));
        assert_eq!(form, ConditionForm::new(ConditionType::ContainsText, "ETF"));
        assert_eq!(form.selected_type(), ConditionType::ContainsText);
    }
}
