use common::ImageSpec;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::env::{global_env, Env};

/// Rasterise a solid rectangle and return it as a PNG data URI. Without a
/// 2d context the fill is skipped and a blank image is returned.
pub fn create_image_with(env: &Env, spec: &ImageSpec) -> Result<String, JsValue> {
    if spec.is_empty() {
        log::debug!("createImage: empty {}x{} canvas", spec.width, spec.height);
    }
    let canvas: HtmlCanvasElement = env.document.create_element("canvas")?.dyn_into()?;
    canvas.set_width(spec.width);
    canvas.set_height(spec.height);

    match canvas.get_context("2d")? {
        Some(ctx) => {
            let ctx: CanvasRenderingContext2d = ctx.dyn_into()?;
            ctx.set_fill_style_str(&spec.color);
            ctx.fill_rect(0.0, 0.0, f64::from(spec.width), f64::from(spec.height));
        }
        None => log::warn!("createImage: 2d context unavailable, returning blank image"),
    }

    canvas.to_data_url()
}

#[wasm_bindgen(js_name = createImage)]
pub fn create_image(width: u32, height: u32, color: Option<String>) -> Result<String, JsValue> {
    let config = common::config::current();
    let spec = ImageSpec::new(width, height, color, &config.default_image_color);
    create_image_with(&global_env()?, &spec)
}

#[wasm_bindgen(js_name = clipImage)]
pub fn clip_image(url: &str, width: f64, height: f64) -> String {
    common::clip_image(url, width, height)
}
