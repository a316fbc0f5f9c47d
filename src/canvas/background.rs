//! Particle records and the per-frame physics of the background field.
//!
//! Particles are plain data. Everything that moves them is a free function
//! over `&mut Particle` / `&mut [Particle]` so the simulation can be stepped
//! and inspected without a canvas.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::FieldConfig;
use crate::constants::INITIAL_SPEED;

const FALLBACK_COLOR: &str = "#ffffff";

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub color: String,
}

impl Particle {
    /// A particle placed uniformly at random inside a `width` x `height` surface.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let x = uniform(rng, 0.0, width);
        let y = uniform(rng, 0.0, height);
        Particle::at(rng, x, y, config)
    }

    /// A particle at exactly `(x, y)` with randomized radius, color and velocity.
    pub fn at<R: Rng + ?Sized>(rng: &mut R, x: f64, y: f64, config: &FieldConfig) -> Particle {
        let radius = uniform(rng, config.radius_min, config.radius_max);
        let color = config
            .palette
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| FALLBACK_COLOR.to_string());
        let vx = rng.gen_range(-INITIAL_SPEED..=INITIAL_SPEED);
        let vy = rng.gen_range(-INITIAL_SPEED..=INITIAL_SPEED);

        Particle {
            x,
            y,
            vx,
            vy,
            radius,
            color,
        }
    }
}

/// Uniform sample from `[lo, hi)`, collapsing to `lo` for an empty range.
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Fresh population of `config.particle_count` particles.
pub fn seed_particles<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Vec<Particle> {
    (0..config.particle_count)
        .map(|_| Particle::random(rng, width, height, config))
        .collect()
}

/// Everything a particle reacts to during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forces {
    pub width: f64,
    pub height: f64,
    pub anchor: (f64, f64),
    pub pointer: Option<(f64, f64)>,
    pub gravity: f64,
    pub repulsion: f64,
    pub max_distance: f64,
    pub repulsion_distance: f64,
    pub damping: f64,
}

impl Forces {
    pub fn new(config: &FieldConfig, width: f64, height: f64, pointer: Option<(f64, f64)>) -> Forces {
        Forces {
            width,
            height,
            anchor: anchor_of(width, height),
            pointer,
            gravity: config.gravity,
            repulsion: config.repulsion,
            max_distance: config.max_distance,
            repulsion_distance: config.repulsion_distance,
            damping: config.damping,
        }
    }
}

/// Center of the surface.
pub fn anchor_of(width: f64, height: f64) -> (f64, f64) {
    (width / 2.0, height / 2.0)
}

/// Unit vector from `from` to `to` when the two are closer than `reach`.
///
/// Coincident points have no direction; they yield `None` like out-of-reach
/// ones so the caller simply applies no force this frame.
pub fn direction_within(from: (f64, f64), to: (f64, f64), reach: f64) -> Option<(f64, f64)> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let distance = dx.hypot(dy);
    if distance > 0.0 && distance.is_finite() && distance < reach {
        Some((dx / distance, dy / distance))
    } else {
        None
    }
}

/// Clamp one axis into `[radius, extent - radius]`, reflecting the velocity
/// through `damping` on contact. Returns whether a wall was hit.
pub fn bounce_axis(pos: &mut f64, vel: &mut f64, radius: f64, extent: f64, damping: f64) -> bool {
    if extent < 2.0 * radius {
        // Too narrow to fit the particle; pin it to the middle.
        *pos = extent / 2.0;
        return false;
    }
    if *pos + radius > extent {
        *pos = extent - radius;
        *vel *= damping;
        true
    } else if *pos - radius < 0.0 {
        *pos = radius;
        *vel *= damping;
        true
    } else {
        false
    }
}

fn bounce(p: &mut Particle, forces: &Forces) {
    bounce_axis(&mut p.x, &mut p.vx, p.radius, forces.width, forces.damping);
    bounce_axis(&mut p.y, &mut p.vy, p.radius, forces.height, forces.damping);
}

/// Advance one particle by one frame.
pub fn step_particle(p: &mut Particle, forces: &Forces) {
    let pos = (p.x, p.y);

    if let Some((ux, uy)) = direction_within(pos, forces.anchor, forces.max_distance) {
        // `gravity` is non-positive; the pull points at the anchor.
        let pull = -forces.gravity;
        p.vx += ux * pull;
        p.vy += uy * pull;
    }

    if let Some(pointer) = forces.pointer {
        if let Some((ux, uy)) = direction_within(pointer, pos, forces.repulsion_distance) {
            p.vx += ux * forces.repulsion;
            p.vy += uy * forces.repulsion;
        }
    }

    bounce(p, forces);

    p.x += p.vx;
    p.y += p.vy;

    bounce(p, forces);
}

pub fn step_all(particles: &mut [Particle], forces: &Forces) {
    for particle in particles.iter_mut() {
        step_particle(particle, forces);
    }
}
