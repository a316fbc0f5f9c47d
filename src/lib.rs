//! Animated particle background for a 2D `<canvas>`.
//!
//! Particles drift under a weak pull toward the center of the surface, get
//! pushed away from the pointer and bounce inelastically off the edges. The
//! simulation (`canvas::background`, `update`, `state`) is plain Rust and
//! runs natively under `cargo test`; `component` and `ui` wire it to the
//! browser with `wasm-bindgen`.
//!
//! ```js
//! import init, { ParticleBackground } from "./pkg/particle_field.js";
//! await init();
//! const bg = ParticleBackground.mountById("particles-canvas", { variant: "interactive" });
//! // later
//! bg.unmount();
//! ```
//!
//! Config keys are camelCase; unknown keys are rejected. `gravity` must be
//! zero or negative and `damping` must lie within `[-1, 0)`.

use wasm_bindgen::prelude::*;

// Export convenience macros crate-wide
#[macro_use]
mod macros;

pub mod canvas;
pub mod component;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod state;
pub mod ui;
pub mod update;

pub use component::ParticleBackground;
pub use config::{FieldConfig, Variant};
pub use error::FieldError;

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() {
    // Initialize better panic messages
    console_error_panic_hook::set_once();
}
