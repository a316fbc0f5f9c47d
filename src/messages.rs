// src/messages.rs
//
// Events that can reach a mounted particle field, and the side effects the
// reducer asks the browser shell to perform in response.
//

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Lifecycle
    Mount { width: f64, height: f64 },  // Seed the field and start running
    Teardown,                           // Stop for good

    // Host events
    Resize { width: f64, height: f64 }, // Viewport changed: reseed
    PointerMove { x: f64, y: f64 },     // Latest pointer position (canvas coords)
    PointerPress { x: f64, y: f64 },    // Spawn a particle here (if enabled)
    PointerLeave,                       // Pointer left the page: stop repelling

    // Frame loop
    AnimationTick,
}

/// Commands represent side effects that should be executed after state updates.
/// This keeps the reducer free of DOM calls so it can run under `cargo test`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Resize the `<canvas>` element's backing store.
    ResizeCanvas { width: f64, height: f64 },

    /// Repaint the whole field from state.
    Redraw,

    /// Request the next animation frame.
    ScheduleFrame,

    /// Cancel any pending animation frame and stop rescheduling.
    CancelFrame,

    /// Remove every DOM listener attached at mount.
    DetachListeners,
}
