pub mod background;
pub mod renderer;
pub mod shapes;
