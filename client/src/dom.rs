use common::fullscreen::{self, FullscreenProbe, ToggleAction};
use common::{corner_visible, within, ParentLink, Rect, UtilError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use crate::env::{global_env, js_err, Env};

/// True for `undefined` and `null`.
#[wasm_bindgen(js_name = isUndef)]
pub fn is_undef(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

struct DomNode(Node);

impl PartialEq for DomNode {
    fn eq(&self, other: &Self) -> bool {
        self.0.is_same_node(Some(&other.0))
    }
}

impl ParentLink for DomNode {
    fn parent(&self) -> Option<Self> {
        self.0.parent_node().map(DomNode)
    }
}

/// `container` is `item` or one of its ancestors.
pub fn with_in(item: &Node, container: Option<&Node>) -> bool {
    let item = DomNode(item.clone());
    let container = container.map(|c| DomNode(c.clone()));
    within(&item, container.as_ref())
}

#[wasm_bindgen(js_name = withIn)]
pub fn with_in_js(item: &Node, container: Option<Node>) -> bool {
    with_in(item, container.as_ref())
}

pub fn bounding_rect(el: &Element) -> Rect {
    let rect = el.get_bounding_client_rect();
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Partial visibility: either the top-left or the bottom-right corner is on
/// screen.
pub fn is_element_in_viewport(env: &Env, el: Option<&Element>) -> bool {
    match el {
        Some(el) => corner_visible(&bounding_rect(el), &env.viewport()),
        None => false,
    }
}

#[wasm_bindgen(js_name = isElementInViewPort)]
pub fn is_element_in_viewport_js(el: JsValue) -> Result<bool, JsValue> {
    if is_undef(&el) {
        return Ok(false);
    }
    let el: Element = el.dyn_into()?;
    Ok(is_element_in_viewport(&global_env()?, Some(&el)))
}

/// Looks up vendor-prefixed members by name on the live objects.
struct DomFullscreenProbe<'a> {
    document: &'a Document,
    element: &'a Element,
}

fn member(target: &JsValue, name: &str) -> JsValue {
    js_sys::Reflect::get(target, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
}

impl FullscreenProbe for DomFullscreenProbe<'_> {
    fn document_has_method(&self, name: &str) -> bool {
        member(self.document, name).is_function()
    }

    fn element_has_method(&self, name: &str) -> bool {
        member(self.element, name).is_function()
    }

    fn document_has_element(&self, name: &str) -> bool {
        !is_undef(&member(self.document, name))
    }
}

/// Leave fullscreen if any element is fullscreen, otherwise make `el`
/// fullscreen, using whichever API flavour the runtime provides.
pub fn toggle_full_screen(env: &Env, el: &Element) -> Result<ToggleAction, JsValue> {
    let probe = DomFullscreenProbe {
        document: &env.document,
        element: el,
    };
    let action = fullscreen::plan_toggle(&probe).ok_or_else(|| js_err(UtilError::FullscreenUnsupported))?;

    let receiver: &JsValue = match action {
        ToggleAction::Exit(_) => env.document.as_ref(),
        ToggleAction::Request(_) => el.as_ref(),
    };
    let method: js_sys::Function = member(receiver, action.method()).dyn_into()?;
    method.call0(receiver)?;
    log::debug!("fullscreen toggled via {}", action.method());
    Ok(action)
}

#[wasm_bindgen(js_name = toggleFullScreen)]
pub fn toggle_full_screen_js(el: &Element) -> Result<(), JsValue> {
    toggle_full_screen(&global_env()?, el).map(|_| ())
}
