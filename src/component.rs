//! Mountable particle background.
//!
//! `ParticleBackground` is the handle JS holds. Behind it a `FieldRuntime`
//! owns the field state, the canvas surface, the frame loop and the DOM
//! listeners of exactly one canvas, so several backgrounds can run on the
//! same page independently.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use crate::canvas::renderer::{draw_field, CanvasSurface};
use crate::config::FieldConfig;
use crate::constants::ID_PARTICLE_CANVAS;
use crate::error::FieldError;
use crate::messages::{Command, Message};
use crate::state::FieldState;
use crate::ui::events::{install_field_listeners, Listeners};
use crate::ui::setup;
use crate::ui::AnimationLoop;
use crate::{debug_log, error_log};

pub struct FieldRuntime {
    state: RefCell<FieldState>,
    surface: RefCell<CanvasSurface>,
    canvas: HtmlCanvasElement,
    frames: AnimationLoop,
    listeners: Listeners,
}

impl FieldRuntime {
    fn new(window: &Window, canvas: HtmlCanvasElement, config: FieldConfig) -> Result<Rc<Self>, FieldError> {
        let context = setup::context_2d(&canvas)?;
        let runtime = Rc::new(Self {
            state: RefCell::new(FieldState::new(config)),
            surface: RefCell::new(CanvasSurface::new(context)),
            canvas,
            frames: AnimationLoop::new(window.clone()),
            listeners: Listeners::new(),
        });

        let weak = Rc::downgrade(&runtime);
        runtime.frames.set_callback(move |_timestamp: f64| {
            if let Some(rt) = weak.upgrade() {
                rt.frames.frame_started();
                rt.dispatch(Message::AnimationTick);
            }
        });

        install_field_listeners(Rc::downgrade(&runtime), window, &runtime.canvas, &runtime.listeners)?;
        Ok(runtime)
    }

    /// Run a message through the reducer, then execute the resulting
    /// commands with no state borrow held.
    pub fn dispatch(&self, msg: Message) {
        let commands = self.state.borrow_mut().dispatch(msg);
        for command in commands {
            self.execute(command);
        }
    }

    fn execute(&self, command: Command) {
        match command {
            Command::ResizeCanvas { width, height } => setup::resize_canvas(&self.canvas, width, height),
            Command::Redraw => {
                let state = self.state.borrow();
                draw_field(&mut *self.surface.borrow_mut(), &state);
            }
            Command::ScheduleFrame => {
                if let Err(e) = self.frames.request() {
                    error_log!("[particles] requestAnimationFrame failed: {:?}", e);
                }
            }
            Command::CancelFrame => self.frames.cancel(),
            Command::DetachListeners => self.listeners.detach_all(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().is_running()
    }

    pub fn particle_count(&self) -> usize {
        self.state.borrow().particles.len()
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.state.borrow().pointer
    }
}

/// Resolve the config for a mount: an explicit JS object wins, then the
/// canvas' `data-particle-config` attribute, then the defaults.
fn resolve_config(canvas: &HtmlCanvasElement, config: JsValue) -> Result<FieldConfig, FieldError> {
    if config.is_undefined() || config.is_null() {
        return Ok(setup::config_from_dataset(canvas)?.unwrap_or_default());
    }
    FieldConfig::from_js(config)
}

#[wasm_bindgen]
pub struct ParticleBackground {
    runtime: Option<Rc<FieldRuntime>>,
}

impl ParticleBackground {
    pub fn try_mount(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<ParticleBackground, FieldError> {
        let window = setup::window()?;
        let (width, height) = setup::viewport_size(&window)?;
        let runtime = FieldRuntime::new(&window, canvas, config)?;
        runtime.dispatch(Message::Mount { width, height });
        debug_log!("[particles] background mounted");
        Ok(ParticleBackground {
            runtime: Some(runtime),
        })
    }

    /// Number of DOM listeners currently attached for this background.
    pub fn listener_count(&self) -> usize {
        self.runtime.as_ref().map_or(0, |rt| rt.listeners.len())
    }

    /// Last pointer position seen by the field, canvas-relative.
    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.runtime.as_ref().and_then(|rt| rt.pointer())
    }
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Mount on `canvas`. `config` may be `undefined`, `null` or an object
    /// with any subset of the config fields (camelCase).
    pub fn mount(canvas: HtmlCanvasElement, config: JsValue) -> Result<ParticleBackground, JsValue> {
        let config = resolve_config(&canvas, config)?;
        Ok(Self::try_mount(canvas, config)?)
    }

    /// Mount on the canvas with the given id (`particles-canvas` when empty).
    #[wasm_bindgen(js_name = mountById)]
    pub fn mount_by_id(id: &str, config: JsValue) -> Result<ParticleBackground, JsValue> {
        let id = if id.is_empty() { ID_PARTICLE_CANVAS } else { id };
        let window = setup::window()?;
        let document = setup::document(&window)?;
        let canvas = setup::canvas_by_id(&document, id)?;
        Self::mount(canvas, config)
    }

    /// Stop the loop and detach all listeners. Idempotent; the handle keeps
    /// answering `isRunning`/`particleCount` for the final state.
    pub fn unmount(&mut self) {
        if let Some(runtime) = &self.runtime {
            if runtime.is_running() {
                runtime.dispatch(Message::Teardown);
                debug_log!("[particles] background unmounted");
            }
        }
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.runtime.as_ref().map_or(false, |rt| rt.is_running())
    }

    #[wasm_bindgen(js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.runtime.as_ref().map_or(0, |rt| rt.particle_count())
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}
