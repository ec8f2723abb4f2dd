use wasm_bindgen::JsValue;

/// Failures inside the drawing surface. None of these reach the user; event
/// handlers log them and skip the operation.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("no global `window`")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("canvas ref is not attached to a canvas element")]
    CanvasNotMounted,

    #[error("2d rendering context unavailable")]
    ContextUnavailable,

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration")]
    ConfigParse(#[from] serde_json::Error),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        SurfaceError::Js(format!("{:?}", value))
    }
}

pub type Result<T, E = SurfaceError> = std::result::Result<T, E>;
