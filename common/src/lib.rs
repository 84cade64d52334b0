//! Pure building blocks shared by the browser client: display formatters,
//! rate-limit state machines, viewport geometry and the fullscreen API table.

pub mod config;
pub mod error;
pub mod format;
pub mod fullscreen;
pub mod image;
pub mod rate_limit;
pub mod seq;
pub mod tree;
pub mod viewport;

pub use config::{MonthOrigin, UtilsConfig};
pub use error::{Result, UtilError};
pub use format::*;
pub use fullscreen::{FullscreenApi, FullscreenProbe, ToggleAction};
pub use image::{clip_image, ImageSpec};
pub use rate_limit::{
    previous_timer, Clock, Debounce, DebounceStep, FrameGate, ManualClock, PreviousTimer, Throttle,
    Throttled,
};
pub use seq::{array_join, is_undef};
pub use tree::{within, ParentLink};
pub use viewport::{corner_visible, Rect, Viewport};
