//! Constants for the particle background
//!
//! This module centralizes the tunable defaults and the DOM string literals
//! (event names, element ids, attributes) so they are not repeated across
//! the canvas and ui layers.

// Element IDs / attributes
pub const ID_PARTICLE_CANVAS: &str = "particles-canvas";
pub const ATTR_PARTICLE_CONFIG: &str = "data-particle-config";
pub const DATASET_PARTICLE_CONFIG: &str = "particleConfig";

// DOM event names
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_MOUSE_MOVE: &str = "mousemove";
pub const EVENT_MOUSE_DOWN: &str = "mousedown";
pub const EVENT_MOUSE_LEAVE: &str = "mouseleave";

// Population
pub const DEFAULT_PARTICLE_COUNT: usize = 200;

// Radius bands of the page revisions
pub const CLASSIC_RADIUS_MIN: f64 = 1.0;
pub const CLASSIC_RADIUS_MAX: f64 = 6.0;
pub const WIDE_RADIUS_MIN: f64 = 1.0;
pub const WIDE_RADIUS_MAX: f64 = 21.0;

// Initial velocity components are drawn from [-INITIAL_SPEED, INITIAL_SPEED]
pub const INITIAL_SPEED: f64 = 0.5;

// Forces
pub const CLASSIC_GRAVITY: f64 = -0.02;
pub const CLASSIC_REPULSION: f64 = 0.02;
pub const CLASSIC_MAX_DISTANCE: f64 = 200.0;
pub const WIDE_GRAVITY: f64 = -0.03;
pub const WIDE_REPULSION: f64 = 0.03;
pub const WIDE_MAX_DISTANCE: f64 = 230.0;

// Inelastic bounce: sign-inverting, loses 10% of the speed
pub const BOUNCE_DAMPING: f64 = -0.9;

// Palettes
pub const CLASSIC_PALETTE: [&str; 3] = ["#ff6f61", "#6b5b95", "#88b04b"];
pub const WIDE_PALETTE: [&str; 5] = ["#ff6f61", "#6b5b95", "#88b04b", "#f7cac9", "#92a8d1"];
