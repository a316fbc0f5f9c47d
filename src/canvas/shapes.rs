use web_sys::CanvasRenderingContext2d;

pub fn fill_circle(context: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64, color: &str) {
    context.begin_path();
    let _ = context.arc(x, y, radius, 0.0, 2.0 * std::f64::consts::PI);
    context.set_fill_style_str(color);
    context.fill();
}

pub fn fill_background(context: &CanvasRenderingContext2d, width: f64, height: f64, color: Option<&str>) {
    context.clear_rect(0.0, 0.0, width, height);
    if let Some(color) = color {
        context.save();
        context.set_fill_style_str(color);
        context.fill_rect(0.0, 0.0, width, height);
        context.restore();
    }
}
