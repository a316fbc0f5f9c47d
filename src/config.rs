//! Tunable parameters of the particle field.
//!
//! The three revisions of the portfolio homepage hard-coded slightly
//! different numbers. They survive here as [`Variant`] presets; any field set
//! explicitly in the JS/JSON config overrides the preset value.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::constants::*;
use crate::error::FieldError;

/// Named presets matching the page revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Small particles (radius 1-6), three colors, 200px reach.
    #[default]
    Classic,
    /// Larger particles (radius 1-21), five colors, stronger forces, 230px reach.
    Wide,
    /// `Wide` plus spawning a particle on every pointer press.
    Interactive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub palette: Vec<String>,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Attraction toward the anchor. Must be zero or negative; the pull is
    /// inward with strength `-gravity`.
    pub gravity: f64,
    pub repulsion: f64,
    pub max_distance: f64,
    pub repulsion_distance: f64,
    /// Velocity multiplier on a wall hit, within `[-1, 0)`.
    pub damping: f64,
    pub spawn_on_press: bool,
    pub max_particles: Option<usize>,
    pub seed: Option<u64>,
    pub background: Option<String>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::preset(Variant::Classic)
    }
}

impl FieldConfig {
    pub fn preset(variant: Variant) -> Self {
        let (palette, radius_min, radius_max, gravity, repulsion, max_distance): (&[&str], _, _, _, _, _) =
            match variant {
                Variant::Classic => (
                    &CLASSIC_PALETTE[..],
                    CLASSIC_RADIUS_MIN,
                    CLASSIC_RADIUS_MAX,
                    CLASSIC_GRAVITY,
                    CLASSIC_REPULSION,
                    CLASSIC_MAX_DISTANCE,
                ),
                Variant::Wide | Variant::Interactive => (
                    &WIDE_PALETTE[..],
                    WIDE_RADIUS_MIN,
                    WIDE_RADIUS_MAX,
                    WIDE_GRAVITY,
                    WIDE_REPULSION,
                    WIDE_MAX_DISTANCE,
                ),
            };

        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            palette: palette.iter().map(|c| c.to_string()).collect(),
            radius_min,
            radius_max,
            gravity,
            repulsion,
            max_distance,
            repulsion_distance: max_distance,
            damping: BOUNCE_DAMPING,
            spawn_on_press: variant == Variant::Interactive,
            max_particles: None,
            seed: None,
            background: None,
        }
    }

    /// Parse a JSON object such as `{"variant": "wide", "particleCount": 80}`.
    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        raw.resolve()
    }

    /// Read a config object handed over from JS. `undefined` and `null`
    /// yield the defaults.
    pub fn from_js(value: JsValue) -> Result<Self, FieldError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let raw: RawConfig = serde_wasm_bindgen::from_value(value)?;
        raw.resolve()
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        let invalid = |msg: &str| Err(FieldError::InvalidConfig(msg.to_string()));

        if self.palette.is_empty() {
            return invalid("palette must contain at least one color");
        }
        if !(self.radius_min.is_finite() && self.radius_max.is_finite()) {
            return invalid("radius range must be finite");
        }
        if self.radius_min <= 0.0 || self.radius_max < self.radius_min {
            return invalid("radius range must satisfy 0 < radiusMin <= radiusMax");
        }
        if !(self.gravity.is_finite() && self.repulsion.is_finite()) {
            return invalid("gravity and repulsion must be finite");
        }
        if self.gravity > 0.0 {
            return invalid("gravity must be zero or negative (attraction toward the anchor)");
        }
        if !(self.max_distance >= 0.0 && self.repulsion_distance >= 0.0) {
            return invalid("influence distances must be non-negative");
        }
        if !(self.damping >= -1.0 && self.damping < 0.0) {
            return invalid("damping must lie within [-1, 0) so a bounce reverses direction");
        }
        Ok(())
    }
}

/// Wire shape of the config: every field optional, camelCase keys.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawConfig {
    variant: Option<Variant>,
    particle_count: Option<usize>,
    palette: Option<Vec<String>>,
    radius_min: Option<f64>,
    radius_max: Option<f64>,
    gravity: Option<f64>,
    repulsion: Option<f64>,
    max_distance: Option<f64>,
    repulsion_distance: Option<f64>,
    damping: Option<f64>,
    spawn_on_press: Option<bool>,
    max_particles: Option<usize>,
    seed: Option<u64>,
    background: Option<String>,
}

impl RawConfig {
    fn resolve(self) -> Result<FieldConfig, FieldError> {
        let mut cfg = FieldConfig::preset(self.variant.unwrap_or_default());

        if let Some(v) = self.particle_count {
            cfg.particle_count = v;
        }
        if let Some(v) = self.palette {
            cfg.palette = v;
        }
        if let Some(v) = self.radius_min {
            cfg.radius_min = v;
        }
        if let Some(v) = self.radius_max {
            cfg.radius_max = v;
        }
        if let Some(v) = self.gravity {
            cfg.gravity = v;
        }
        if let Some(v) = self.repulsion {
            cfg.repulsion = v;
        }
        // Pointer reach follows the anchor reach unless set on its own.
        if let Some(v) = self.max_distance {
            cfg.max_distance = v;
            cfg.repulsion_distance = v;
        }
        if let Some(v) = self.repulsion_distance {
            cfg.repulsion_distance = v;
        }
        if let Some(v) = self.damping {
            cfg.damping = v;
        }
        if let Some(v) = self.spawn_on_press {
            cfg.spawn_on_press = v;
        }
        cfg.max_particles = self.max_particles.or(cfg.max_particles);
        cfg.seed = self.seed.or(cfg.seed);
        cfg.background = self.background.or(cfg.background);

        cfg.validate()?;
        Ok(cfg)
    }
}
