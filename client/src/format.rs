//! JS exports of the display formatters.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = formatTime)]
pub fn format_time(ms: f64) -> String {
    common::format_time(ms)
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(ms: f64) -> String {
    common::format_date(ms)
}

#[wasm_bindgen(js_name = formatDay)]
pub fn format_day(ms: f64) -> String {
    common::format_day(ms)
}

#[wasm_bindgen(js_name = formatDateToBefore)]
pub fn format_date_to_before(ms: f64) -> String {
    common::format_date_to_before(ms)
}

#[wasm_bindgen(js_name = formatCount)]
pub fn format_count(n: f64) -> String {
    common::format_count(n)
}

/// `[a, b, c]` joined with `sep` gives `[a, sep, b, sep, c]`. A missing array
/// gives an empty one.
#[wasm_bindgen(js_name = arrayJoin)]
pub fn array_join(array: Option<js_sys::Array>, separator: JsValue) -> js_sys::Array {
    let items: Vec<JsValue> = array.map(|a| a.iter().collect()).unwrap_or_default();
    common::array_join(&items, &separator).into_iter().collect()
}
