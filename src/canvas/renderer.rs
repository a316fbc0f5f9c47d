use web_sys::CanvasRenderingContext2d;

use super::background::Particle;
use super::shapes;
use crate::state::FieldState;

/// The drawing capability the field needs from its host: clear a frame and
/// fill circles. Implemented by the browser canvas below and by recording
/// surfaces in tests.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64, background: Option<&str>);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
}

/// A `<canvas>` 2D context.
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self { context }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64, background: Option<&str>) {
        shapes::fill_background(&self.context, width, height, background);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        shapes::fill_circle(&self.context, x, y, radius, color);
    }
}

pub fn draw_particles<S: Surface + ?Sized>(surface: &mut S, particles: &[Particle]) {
    for p in particles {
        surface.fill_circle(p.x, p.y, p.radius, &p.color);
    }
}

/// Render one complete frame of the field.
pub fn draw_field<S: Surface + ?Sized>(surface: &mut S, state: &FieldState) {
    surface.clear(state.width, state.height, state.config.background.as_deref());
    draw_particles(surface, &state.particles);
}
