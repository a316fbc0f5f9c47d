//! DOM lookups needed before a field can be mounted. All of them fail fast
//! with a [`FieldError`] instead of handing a missing surface to the loop.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::config::FieldConfig;
use crate::constants::DATASET_PARTICLE_CONFIG;
use crate::error::FieldError;

pub fn window() -> Result<Window, FieldError> {
    web_sys::window().ok_or(FieldError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, FieldError> {
    window.document().ok_or(FieldError::NoDocument)
}

pub fn canvas_by_id(document: &Document, id: &str) -> Result<HtmlCanvasElement, FieldError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| FieldError::CanvasNotFound(id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| FieldError::NotACanvas(id.to_string()))
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, FieldError> {
    canvas
        .get_context("2d")
        .map_err(|_| FieldError::ContextUnavailable)?
        .ok_or(FieldError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| FieldError::ContextUnavailable)
}

/// Inner size of the viewport in CSS pixels.
pub fn viewport_size(window: &Window) -> Result<(f64, f64), FieldError> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width, height))
}

/// Config stored on the canvas as `data-particle-config='{"variant":"wide"}'`.
pub fn config_from_dataset(canvas: &HtmlCanvasElement) -> Result<Option<FieldConfig>, FieldError> {
    match canvas.dataset().get(DATASET_PARTICLE_CONFIG) {
        Some(json) if !json.trim().is_empty() => FieldConfig::from_json(&json).map(Some),
        _ => Ok(None),
    }
}

/// Resize the canvas backing store. Fractional viewport sizes are rounded up
/// so the last column/row of pixels is still covered.
pub fn resize_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0).ceil() as u32);
    canvas.set_height(height.max(0.0).ceil() as u32);
}
