//! Live DOM implementation of the condition form view.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use super::config::ConditionFormConfig;
use super::view::{ConditionFormLocator, ConditionFormView, MissingElement};

/// Looks the form elements up in a document
pub struct DocumentLocator {
    document: Option<Document>,
}

impl DocumentLocator {
    /// Locator over the current window's document
    pub fn current() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }
}

impl ConditionFormLocator for DocumentLocator {
    type View = DomConditionForm;

    fn locate(&self, config: &ConditionFormConfig) -> Result<DomConditionForm, MissingElement> {
        let Some(document) = self.document.as_ref() else {
            return Err(MissingElement::Document);
        };

        let radios = radio_inputs(document, &config.radio_selector());
        if radios.is_empty() {
            return Err(MissingElement::Radios);
        }
        let label = document
            .get_element_by_id(&config.label_id)
            .ok_or(MissingElement::Label)?;
        let input = document
            .get_element_by_id(&config.input_id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .ok_or(MissingElement::Input)?;
        let help = document
            .get_element_by_id(&config.help_id)
            .ok_or(MissingElement::Help)?;

        Ok(DomConditionForm {
            radios,
            label,
            input,
            help,
        })
    }
}

/// Server-rendered condition form elements
pub struct DomConditionForm {
    radios: Vec<HtmlInputElement>,
    label: Element,
    input: HtmlInputElement,
    help: Element,
}

impl ConditionFormView for DomConditionForm {
    fn checked_value(&self) -> Option<String> {
        self.radios
            .iter()
            .find(|radio| radio.checked())
            .map(|radio| radio.value())
    }

    fn set_label_text(&self, text: &str) {
        self.label.set_text_content(Some(text));
    }

    fn set_placeholder(&self, text: &str) {
        self.input.set_placeholder(text);
    }

    fn set_input_disabled(&self, disabled: bool) {
        self.input.set_disabled(disabled);
    }

    fn clear_input_value(&self) {
        self.input.set_value("");
    }

    fn set_help_html(&self, html: &str) {
        self.help.set_inner_html(html);
    }

    fn on_selection_change(&self, handler: Rc<dyn Fn()>) {
        for radio in &self.radios {
            let handler = Rc::clone(&handler);
            let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                handler();
            }) as Box<dyn FnMut(_)>);

            if let Err(err) =
                radio.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            {
                log::error!("Failed to attach condition type listener: {:?}", err);
            }
            // Listeners live as long as the page
            closure.forget();
        }
    }
}

fn radio_inputs(document: &Document, selector: &str) -> Vec<HtmlInputElement> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .collect()
}
