pub mod domain;
pub mod shared;

use domain::a001_routing_rule::ui::condition_form::{self, ConditionFormConfig, DocumentLocator};
use wasm_bindgen::prelude::{wasm_bindgen, JsValue};

fn bind_with(config: &ConditionFormConfig) -> bool {
    condition_form::bind(&DocumentLocator::current(), config).is_some()
}

/// Bind the condition form on pages whose markup uses other element names.
///
/// `config` is an object such as `{ labelId: "...", helpId: "..." }`;
/// `undefined` uses the defaults. Returns whether the form was found.
#[wasm_bindgen]
pub fn bind_condition_form(config: JsValue) -> bool {
    let config = if config.is_undefined() || config.is_null() {
        ConditionFormConfig::default()
    } else {
        match serde_wasm_bindgen::from_value::<ConditionFormConfig>(config) {
            Ok(config) => config,
            Err(err) => {
                log::error!("Invalid condition form config: {}", err);
                return false;
            }
        }
    };
    bind_with(&config)
}

/// Render the condition form into `target_id`, pre-filled from a stored
/// conditions document.
#[wasm_bindgen]
pub fn mount_condition_form(target_id: &str, conditions_json: Option<String>) -> bool {
    condition_form::component::mount(target_id, conditions_json.as_deref())
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    bind_with(&ConditionFormConfig::default());
}
