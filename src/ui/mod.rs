pub mod events;
pub mod setup;

use std::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error_log;

/// `requestAnimationFrame` driver for one field.
///
/// At most one frame is pending at any time. Once [`AnimationLoop::cancel`]
/// ran, the pending frame is cancelled and later `request` calls are no-ops,
/// so a callback already in flight cannot reschedule itself.
pub struct AnimationLoop {
    window: Window,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    pending: Cell<Option<i32>>,
    cancelled: Cell<bool>,
}

impl AnimationLoop {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: RefCell::new(None),
            pending: Cell::new(None),
            cancelled: Cell::new(false),
        }
    }

    /// Install the per-frame callback. The callback must call
    /// [`AnimationLoop::frame_started`] before doing its work.
    pub fn set_callback<F>(&self, frame: F)
    where
        F: FnMut(f64) + 'static,
    {
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(frame) as Box<dyn FnMut(f64)>));
    }

    pub fn request(&self) -> Result<(), JsValue> {
        if self.cancelled.get() || self.pending.get().is_some() {
            return Ok(());
        }
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return Ok(());
        };
        let handle = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())?;
        self.pending.set(Some(handle));
        Ok(())
    }

    /// The pending frame is being delivered.
    pub fn frame_started(&self) {
        self.pending.set(None);
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(handle) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(handle) {
                error_log!("[particles] cancelAnimationFrame failed: {:?}", e);
            }
        }
    }
}
