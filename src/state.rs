use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::canvas::background::{anchor_of, Forces, Particle};
use crate::config::FieldConfig;
use crate::messages::{Command, Message};
use crate::update::update;

/// Lifecycle of a field. `Stopped` is both the state before mount and the
/// terminal state after teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Stopped,
    Running,
}

/// State of one mounted particle field.
pub struct FieldState {
    pub config: FieldConfig,
    // Surface dimensions in canvas pixels
    pub width: f64,
    pub height: f64,
    pub anchor: (f64, f64),
    // Latest pointer position; None until the first move or after a leave
    pub pointer: Option<(f64, f64)>,
    pub particles: Vec<Particle>,
    pub phase: Phase,
    pub rng: StdRng,
    // Frames stepped since mount
    pub frame: u64,
    // True once the field was torn down; a stopped field never restarts
    pub torn_down: bool,
}

impl FieldState {
    pub fn new(config: FieldConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            width: 0.0,
            height: 0.0,
            anchor: (0.0, 0.0),
            pointer: None,
            particles: Vec::new(),
            phase: Phase::Stopped,
            rng,
            frame: 0,
            torn_down: false,
        }
    }

    /// A state that already processed `Message::Mount`.
    pub fn mounted(config: FieldConfig, width: f64, height: f64) -> Self {
        let mut state = Self::new(config);
        state.dispatch(Message::Mount { width, height });
        state
    }

    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn set_surface(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.anchor = anchor_of(self.width, self.height);
    }

    pub fn forces(&self) -> Forces {
        Forces::new(&self.config, self.width, self.height, self.pointer)
    }
}
