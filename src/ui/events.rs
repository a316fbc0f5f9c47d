//! Event listener bookkeeping for a mounted field.
//!
//! Every closure handed to `addEventListener` is kept here together with its
//! target and event name, and exactly that closure is passed back to
//! `removeEventListener` on detach. Creating a fresh closure for the removal
//! call would never match the attached one and leave the listener alive.

use std::cell::RefCell;
use std::rc::Weak;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use crate::component::FieldRuntime;
use crate::constants::{EVENT_MOUSE_DOWN, EVENT_MOUSE_LEAVE, EVENT_MOUSE_MOVE, EVENT_RESIZE};
use crate::error_log;
use crate::messages::Message;

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

#[derive(Default)]
pub struct Listeners {
    attached: RefCell<Vec<Listener>>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach<F>(&self, target: &EventTarget, event: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.attached.borrow_mut().push(Listener {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }

    /// Remove every attached listener. The closures are dropped afterwards,
    /// so this must not run from inside one of them.
    pub fn detach_all(&self) {
        let attached: Vec<Listener> = self.attached.borrow_mut().drain(..).collect();
        for listener in attached {
            if let Err(e) = listener
                .target
                .remove_event_listener_with_callback(listener.event, listener.callback.as_ref().unchecked_ref())
            {
                error_log!("[particles] failed to remove '{}' listener: {:?}", listener.event, e);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.attached.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.detach_all();
    }
}

/// Canvas-relative pointer position of a mouse event.
fn pointer_position(canvas: &HtmlCanvasElement, event: &Event) -> Option<(f64, f64)> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    let rect = canvas.get_bounding_client_rect();
    Some((
        mouse.client_x() as f64 - rect.left(),
        mouse.client_y() as f64 - rect.top(),
    ))
}

/// Wire viewport resize and pointer events of `window` to the field.
/// Handlers hold a weak reference, so a dropped field turns them into no-ops.
pub fn install_field_listeners(
    runtime: Weak<FieldRuntime>,
    window: &Window,
    canvas: &HtmlCanvasElement,
    listeners: &Listeners,
) -> Result<(), JsValue> {
    let target: &EventTarget = window.as_ref();

    let rt = runtime.clone();
    let win = window.clone();
    listeners.attach(target, EVENT_RESIZE, move |_e: Event| {
        let Some(rt) = rt.upgrade() else { return };
        match crate::ui::setup::viewport_size(&win) {
            Ok((width, height)) => rt.dispatch(Message::Resize { width, height }),
            Err(e) => error_log!("[particles] cannot read viewport size: {}", e),
        }
    })?;

    let rt = runtime.clone();
    let cv = canvas.clone();
    listeners.attach(target, EVENT_MOUSE_MOVE, move |e: Event| {
        let Some(rt) = rt.upgrade() else { return };
        if let Some((x, y)) = pointer_position(&cv, &e) {
            rt.dispatch(Message::PointerMove { x, y });
        }
    })?;

    let rt = runtime.clone();
    let cv = canvas.clone();
    listeners.attach(target, EVENT_MOUSE_DOWN, move |e: Event| {
        let Some(rt) = rt.upgrade() else { return };
        if let Some((x, y)) = pointer_position(&cv, &e) {
            rt.dispatch(Message::PointerPress { x, y });
        }
    })?;

    // `mouseleave` does not bubble; it fires on the root element when the
    // pointer exits the page.
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let rt = runtime;
        listeners.attach(root.as_ref(), EVENT_MOUSE_LEAVE, move |_e: Event| {
            if let Some(rt) = rt.upgrade() {
                rt.dispatch(Message::PointerLeave);
            }
        })?;
    }

    Ok(())
}
