//! Geometry for partial-visibility checks.

/// Bounding box as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Visible area, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Prefer the window's inner size; a zero (or NaN) inner dimension falls
    /// back to the document element's client size.
    pub fn resolve(inner_width: f64, inner_height: f64, client_width: f64, client_height: f64) -> Self {
        Self {
            width: or_fallback(inner_width, client_width),
            height: or_fallback(inner_height, client_height),
        }
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x <= self.width && y <= self.height
    }
}

fn or_fallback(primary: f64, fallback: f64) -> f64 {
    if primary == 0.0 || primary.is_nan() {
        fallback
    } else {
        primary
    }
}

/// True when the top-left or the bottom-right corner of `rect` is inside
/// the viewport. An element straddling the viewport with both corners
/// outside counts as not visible.
pub fn corner_visible(rect: &Rect, viewport: &Viewport) -> bool {
    viewport.contains_point(rect.left, rect.top) || viewport.contains_point(rect.right(), rect.bottom())
}
