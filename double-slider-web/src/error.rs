use double_slider::ConfigError;
use wasm_bindgen::JsValue;

/// Errors raised while mounting a slider into a document.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    /// No global `window` (not running in a browser main thread).
    #[error("no global window")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// The slider configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The markup did not produce an HTML root element.
    #[error("slider template did not produce an HTML element")]
    Template,
    /// The mounted markup lacks a named region.
    #[error("mounted slider is missing the `{0}` region")]
    MissingRegion(&'static str),
    /// A DOM call threw.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for MountError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        MountError::Dom(message)
    }
}
