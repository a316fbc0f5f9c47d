//! Error types for mounting and configuring the particle background.
//!
//! Everything that can fail happens at mount time (finding the canvas,
//! acquiring its 2D context, parsing configuration). Once mounted the
//! animation itself has no failure modes.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// `window.document` is missing.
    NoDocument,
    /// No element with the given id.
    CanvasNotFound(String),
    /// The element with the given id is not a `<canvas>`.
    NotACanvas(String),
    /// `getContext("2d")` failed or returned null.
    ContextUnavailable,
    /// Configuration rejected by validation or deserialization.
    InvalidConfig(String),
    /// A browser API call threw.
    Js(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NoWindow => write!(f, "no global `window` exists"),
            FieldError::NoDocument => write!(f, "window has no document"),
            FieldError::CanvasNotFound(id) => write!(f, "canvas element '#{}' not found", id),
            FieldError::NotACanvas(id) => write!(f, "element '#{}' is not a <canvas>", id),
            FieldError::ContextUnavailable => write!(f, "2d rendering context unavailable"),
            FieldError::InvalidConfig(msg) => write!(f, "invalid particle config: {}", msg),
            FieldError::Js(msg) => write!(f, "browser call failed: {}", msg),
        }
    }
}

impl std::error::Error for FieldError {}

impl From<JsValue> for FieldError {
    fn from(value: JsValue) -> Self {
        FieldError::Js(format!("{:?}", value))
    }
}

impl From<serde_json::Error> for FieldError {
    fn from(e: serde_json::Error) -> Self {
        FieldError::InvalidConfig(e.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for FieldError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        FieldError::InvalidConfig(e.to_string())
    }
}

impl From<FieldError> for JsValue {
    fn from(e: FieldError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}
