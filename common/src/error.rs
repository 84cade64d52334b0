use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("No window object available")]
    NoWindow,

    #[error("No document object available")]
    NoDocument,

    #[error("Fullscreen API not supported by this runtime")]
    FullscreenUnsupported,

    #[error("2d rendering context unavailable")]
    ContextUnavailable,

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UtilError>;
