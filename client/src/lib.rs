//! Browser helpers compiled to WebAssembly: formatting, DOM and event
//! utilities, throttle/debounce wrappers, downloads and placeholder images.

use common::UtilsConfig;
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod download;
pub mod env;
pub mod events;
pub mod format;
pub mod image;
pub mod rate_limit;

pub use env::{Env, PerformanceClock};
pub use rate_limit::{Debounced, DebouncedFn, ThrottledFn};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = common::config::current().log_level();
    wasm_logger::init(wasm_logger::Config::new(level));

    log::info!("pagekit initialized");
}

/// Replace the active configuration with `options` (a plain object; missing
/// keys take their defaults).
#[wasm_bindgen]
pub fn configure(options: JsValue) -> Result<(), JsValue> {
    let config: UtilsConfig = if dom::is_undef(&options) {
        UtilsConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    apply(config);
    Ok(())
}

#[wasm_bindgen(js_name = configureJson)]
pub fn configure_json(json: &str) -> Result<(), JsValue> {
    let config = UtilsConfig::from_json(json).map_err(env::js_err)?;
    apply(config);
    Ok(())
}

fn apply(config: UtilsConfig) {
    log::set_max_level(config.log_level().to_level_filter());
    log::debug!("configuration updated: {:?}", config);
    common::config::install(config);
}
