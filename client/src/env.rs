use common::{Clock, UtilError, Viewport};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Performance, Window};

/// Browser globals a helper needs, passed explicitly instead of read ad hoc.
#[derive(Debug, Clone)]
pub struct Env {
    pub window: Window,
    pub document: Document,
}

impl Env {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    /// The page's own window and document.
    pub fn global() -> Result<Self, UtilError> {
        let window = web_sys::window().ok_or(UtilError::NoWindow)?;
        let document = window.document().ok_or(UtilError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn viewport(&self) -> Viewport {
        let inner = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let (client_width, client_height) = self
            .document
            .document_element()
            .map(|el| (f64::from(el.client_width()), f64::from(el.client_height())))
            .unwrap_or((0.0, 0.0));
        Viewport::resolve(
            inner(self.window.inner_width()),
            inner(self.window.inner_height()),
            client_width,
            client_height,
        )
    }
}

/// `performance.now()`, or `Date.now()` where the Performance API is missing.
#[derive(Debug, Clone)]
pub struct PerformanceClock {
    performance: Option<Performance>,
}

impl PerformanceClock {
    pub fn global() -> Self {
        Self {
            performance: web_sys::window().and_then(|w| w.performance()),
        }
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(p) => p.now(),
            None => js_sys::Date::now(),
        }
    }
}

/// Convert a library error into a JS `Error` for the wasm boundary.
pub fn js_err(err: UtilError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Resolve the global environment or fail with a JS error.
pub fn global_env() -> Result<Env, JsValue> {
    Env::global().map_err(js_err)
}
