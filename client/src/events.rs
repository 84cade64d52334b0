use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::FrameGate;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, CustomEvent, Event, EventListenerOptions, EventTarget, Window};

use crate::env::{global_env, Env};

/// Listener that re-emits a burst of native events as at most one custom
/// event per animation frame. Dropping the handle keeps the listener
/// registered; call `dispose` to remove it.
#[wasm_bindgen]
pub struct ResizeHandle {
    target: EventTarget,
    event_type: String,
    listener: Option<Closure<dyn FnMut(Event)>>,
    window: Window,
    frame_id: Rc<Cell<Option<i32>>>,
}

#[wasm_bindgen]
impl ResizeHandle {
    /// Remove the listener and drop any frame still pending.
    pub fn dispose(&mut self) {
        if let Some(listener) = self.listener.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(&self.event_type, listener.as_ref().unchecked_ref());
        }
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        log::debug!("optimized {} listener disposed", self.event_type);
    }

    #[wasm_bindgen(getter = isActive)]
    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }
}

impl Drop for ResizeHandle {
    fn drop(&mut self) {
        // Listener stays registered for the page lifetime unless disposed.
        if let Some(listener) = self.listener.take() {
            listener.forget();
        }
    }
}

/// Throttle `event_type` events on `target` to one `name` custom event per
/// animation frame.
pub fn optimized_event_on(
    env: &Env,
    target: &EventTarget,
    event_type: &str,
    name: &str,
) -> Result<ResizeHandle, JsValue> {
    let gate = Rc::new(RefCell::new(FrameGate::new()));
    let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let window = env.window.clone();
    let dispatch_target = target.clone();
    let custom_name = name.to_string();
    let frame_slot = frame_id.clone();

    let listener = Closure::wrap(Box::new(move |_event: Event| {
        if !gate.borrow_mut().try_begin() {
            return;
        }
        let frame_gate = gate.clone();
        let dispatch_target = dispatch_target.clone();
        let custom_name = custom_name.clone();
        let frame_slot_inner = frame_slot.clone();
        let on_frame = Closure::once_into_js(move || {
            frame_slot_inner.set(None);
            match CustomEvent::new(&custom_name) {
                Ok(event) => {
                    if let Err(e) = dispatch_target.dispatch_event(&event) {
                        log::error!("Failed to dispatch {}: {:?}", custom_name, e);
                    }
                }
                Err(e) => log::error!("Failed to create {}: {:?}", custom_name, e),
            }
            frame_gate.borrow_mut().finish();
        });
        match window.request_animation_frame(on_frame.unchecked_ref()) {
            Ok(id) => frame_slot.set(Some(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                gate.borrow_mut().finish();
            }
        }
    }) as Box<dyn FnMut(Event)>);

    target.add_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref())?;
    log::debug!("Registered optimized {} -> {} listener", event_type, name);

    Ok(ResizeHandle {
        target: target.clone(),
        event_type: event_type.to_string(),
        listener: Some(listener),
        window: env.window.clone(),
        frame_id,
    })
}

/// Dispatch the configured optimized resize event on the window at most once
/// per animation frame.
pub fn optimized_resize_with(env: &Env) -> Result<ResizeHandle, JsValue> {
    let config = common::config::current();
    let target: &EventTarget = env.window.as_ref();
    optimized_event_on(env, target, &config.resize_event, &config.optimized_resize_event)
}

#[wasm_bindgen(js_name = optimizedResize)]
pub fn optimized_resize() -> Result<ResizeHandle, JsValue> {
    optimized_resize_with(&global_env()?)
}

#[wasm_bindgen(js_name = optimizedResizeOn)]
pub fn optimized_resize_on(
    target: &EventTarget,
    event_type: &str,
    name: &str,
) -> Result<ResizeHandle, JsValue> {
    optimized_event_on(&global_env()?, target, event_type, name)
}

/// Register `listener` to run once on the next `event_type` event; the
/// wrapper unregisters itself before calling it. The event itself is not
/// passed on.
pub fn add_event_listener_once_with<F>(
    target: &EventTarget,
    event_type: &str,
    listener: F,
    add_options: Option<&AddEventListenerOptions>,
    remove_options: Option<&EventListenerOptions>,
) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let slot: Rc<RefCell<Option<Closure<dyn FnMut(Event)>>>> = Rc::new(RefCell::new(None));
    let slot_inner = slot.clone();
    let target_inner = target.clone();
    let type_inner = event_type.to_string();
    let remove_options = remove_options.cloned();
    let mut listener = Some(listener);

    let wrapper = Closure::wrap(Box::new(move |_event: Event| {
        let own = slot_inner.borrow_mut().take();
        if let Some(own) = own {
            let func: &js_sys::Function = own.as_ref().unchecked_ref();
            let removed = match &remove_options {
                Some(options) => target_inner
                    .remove_event_listener_with_callback_and_event_listener_options(&type_inner, func, options),
                None => target_inner.remove_event_listener_with_callback(&type_inner, func),
            };
            if let Err(e) = removed {
                log::warn!("Failed to remove one-shot {} listener: {:?}", type_inner, e);
            }
        }
        if let Some(listener) = listener.take() {
            listener();
        }
    }) as Box<dyn FnMut(Event)>);

    match add_options {
        Some(options) => target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            wrapper.as_ref().unchecked_ref(),
            options,
        )?,
        None => target.add_event_listener_with_callback(event_type, wrapper.as_ref().unchecked_ref())?,
    }
    *slot.borrow_mut() = Some(wrapper);
    Ok(())
}

#[wasm_bindgen(js_name = addEventListenerOnce)]
pub fn add_event_listener_once(
    target: &EventTarget,
    event_type: &str,
    listener: js_sys::Function,
    add_options: JsValue,
    remove_options: JsValue,
) -> Result<(), JsValue> {
    let add_options: Option<AddEventListenerOptions> =
        (!crate::dom::is_undef(&add_options)).then(|| add_options.unchecked_into());
    let remove_options: Option<EventListenerOptions> =
        (!crate::dom::is_undef(&remove_options)).then(|| remove_options.unchecked_into());

    add_event_listener_once_with(
        target,
        event_type,
        move || {
            if let Err(e) = listener.call0(&JsValue::NULL) {
                log::error!("One-shot listener threw: {:?}", e);
            }
        },
        add_options.as_ref(),
        remove_options.as_ref(),
    )
}
