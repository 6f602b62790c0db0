//! Error types for eleoro-wasm.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result type for eleoro-wasm operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while wiring a behavior. Each one only disables the
/// behavior that produced it.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Behavior(#[from] eleoro_behavior::Error),

    /// A DOM call threw.
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<&'static str> for Error {
    fn from(element: &'static str) -> Self {
        Error::Behavior(eleoro_behavior::Error::MissingElement(element))
    }
}
