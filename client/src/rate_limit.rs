use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::{previous_timer, Clock, Debounce, PreviousTimer, Throttled};
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::env::PerformanceClock;

type JsCallback = Box<dyn FnMut(JsValue) -> Result<JsValue, JsValue>>;

/// Clamp a millisecond delay to what `setTimeout` accepts.
pub(crate) fn timeout_millis(delay_ms: f64) -> u32 {
    if delay_ms.is_nan() || delay_ms <= 0.0 {
        0
    } else {
        delay_ms.min(f64::from(u32::MAX)) as u32
    }
}

/// Scheduled run plus a flag its callback sets once it has run.
struct PendingRun {
    timeout: Timeout,
    fired: Rc<Cell<bool>>,
}

struct DebounceInner {
    state: Debounce,
    pending: Option<PendingRun>,
    clock: PerformanceClock,
}

/// Trailing-edge debounced callback backed by `setTimeout`.
///
/// Dropping the last clone cancels a pending run.
pub struct Debounced<A> {
    callback: Rc<RefCell<dyn FnMut(A)>>,
    inner: Rc<RefCell<DebounceInner>>,
}

impl<A> Clone for Debounced<A> {
    fn clone(&self) -> Self {
        Self {
            callback: self.callback.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<A: 'static> Debounced<A> {
    pub fn new<F>(callback: F, delay_ms: f64, clock: PerformanceClock) -> Self
    where
        F: FnMut(A) + 'static,
    {
        Self {
            callback: Rc::new(RefCell::new(callback)),
            inner: Rc::new(RefCell::new(DebounceInner {
                state: Debounce::new(delay_ms),
                pending: None,
                clock,
            })),
        }
    }

    /// Schedule `callback(arg)` after the quiet period.
    pub fn call(&self, arg: A) {
        let mut inner = self.inner.borrow_mut();
        let now = inner.clock.now_ms();
        let step = inner.state.call(now);

        if let Some(previous) = inner.pending.take() {
            match previous_timer(&step, previous.fired.get()) {
                PreviousTimer::Drop => {
                    if step.cancel_previous {
                        log::debug!("debounce: rescheduled after {:.1}ms", step.delay_ms);
                    }
                    drop(previous.timeout);
                }
                PreviousTimer::Forget => {
                    previous.timeout.forget();
                }
            }
        }

        let callback = self.callback.clone();
        let fired = Rc::new(Cell::new(false));
        let fired_flag = fired.clone();
        let timeout = Timeout::new(timeout_millis(step.delay_ms), move || {
            fired_flag.set(true);
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (*callback)(arg);
            } else {
                log::warn!("debounce: callback still running, run skipped");
            }
        });
        inner.pending = Some(PendingRun { timeout, fired });
    }

    /// Cancel a pending run. Returns true if one had been scheduled.
    pub fn cancel(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        let was_armed = inner.state.cancel();
        // Dropping a Timeout clears it.
        inner.pending = None;
        was_armed
    }
}

/// Throttled JS function.
#[wasm_bindgen]
pub struct ThrottledFn {
    inner: Rc<RefCell<Throttled<JsCallback, PerformanceClock>>>,
}

#[wasm_bindgen]
impl ThrottledFn {
    /// Run the function if outside the throttle window; `undefined` otherwise.
    pub fn call(&self, arg: JsValue) -> Result<JsValue, JsValue> {
        call_throttled(&self.inner, arg)
    }

    pub fn reset(&self) {
        self.inner.borrow_mut().reset();
    }

    /// A plain JS function sharing this wrapper's state, usable as an event
    /// listener.
    #[wasm_bindgen(js_name = asFunction)]
    pub fn as_function(&self) -> js_sys::Function {
        let inner = self.inner.clone();
        Closure::wrap(Box::new(move |arg: JsValue| call_throttled(&inner, arg)) as JsCallback)
            .into_js_value()
            .unchecked_into()
    }
}

fn call_throttled(
    inner: &Rc<RefCell<Throttled<JsCallback, PerformanceClock>>>,
    arg: JsValue,
) -> Result<JsValue, JsValue> {
    // Re-entrant calls from inside the callback land in the window anyway.
    let Ok(mut throttled) = inner.try_borrow_mut() else {
        return Ok(JsValue::UNDEFINED);
    };
    throttled.call(arg).unwrap_or(Ok(JsValue::UNDEFINED))
}

#[wasm_bindgen(js_name = throttleFn)]
pub fn throttle_fn(func: js_sys::Function, interval_ms: f64) -> ThrottledFn {
    let callback: JsCallback = Box::new(move |arg: JsValue| func.call1(&JsValue::NULL, &arg));
    ThrottledFn {
        inner: Rc::new(RefCell::new(Throttled::new(
            callback,
            interval_ms,
            PerformanceClock::global(),
        ))),
    }
}

/// Debounced JS function.
#[wasm_bindgen]
pub struct DebouncedFn {
    inner: Debounced<JsValue>,
}

#[wasm_bindgen]
impl DebouncedFn {
    pub fn call(&self, arg: JsValue) {
        self.inner.call(arg);
    }

    pub fn cancel(&self) -> bool {
        self.inner.cancel()
    }

    #[wasm_bindgen(js_name = asFunction)]
    pub fn as_function(&self) -> js_sys::Function {
        let inner = self.inner.clone();
        Closure::wrap(Box::new(move |arg: JsValue| inner.call(arg)) as Box<dyn FnMut(JsValue)>)
            .into_js_value()
            .unchecked_into()
    }
}

#[wasm_bindgen(js_name = debounceTime)]
pub fn debounce_time(func: js_sys::Function, delay_ms: f64) -> DebouncedFn {
    let callback = move |arg: JsValue| {
        if let Err(e) = func.call1(&JsValue::NULL, &arg) {
            log::error!("debounced function threw: {:?}", e);
        }
    };
    DebouncedFn {
        inner: Debounced::new(callback, delay_ms, PerformanceClock::global()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_millis() {
        assert_eq!(timeout_millis(100.0), 100);
        assert_eq!(timeout_millis(99.9), 99);
        assert_eq!(timeout_millis(-5.0), 0);
        assert_eq!(timeout_millis(f64::NAN), 0);
        assert_eq!(timeout_millis(1e12), u32::MAX);
    }
}
