use crate::foundation::core::{Point, Rect, Rgba};
use crate::raster::canvas::Canvas;
use crate::raster::shape::Shape;

/// Composite `color` over every pixel `shape` covers, scaling its alpha by coverage.
///
/// Coverage is sampled at pixel centers. Pixels with zero coverage are skipped and the window is
/// clipped to the canvas, so degenerate or off-canvas shapes paint nothing.
pub fn fill_shape(canvas: &mut Canvas, shape: &Shape, color: Rgba) {
    let window = shape.pixel_window();
    let last = i64::from(canvas.size()) - 1;
    let (x0, x1) = (window.x0.max(0), window.x1.min(last));
    let (y0, y1) = (window.y0.max(0), window.y1.min(last));

    for y in y0..=y1 {
        for x in x0..=x1 {
            let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            let coverage = shape.coverage_at(center);
            if coverage <= 0.0 {
                continue;
            }
            canvas.composite(x, y, color.with_alpha(color.a * coverage));
        }
    }
}

/// Paint an anti-aliased disc.
pub fn draw_circle(
    canvas: &mut Canvas,
    center: Point,
    radius: f64,
    color: Rgba,
    softness: f64,
) {
    let shape = Shape::circle(center, radius).with_softness(softness);
    fill_shape(canvas, &shape, color);
}

/// Paint an anti-aliased rectangle spanning `rect`.
pub fn draw_rect(canvas: &mut Canvas, rect: Rect, color: Rgba, softness: f64) {
    let shape = Shape::rect(rect).with_softness(softness);
    fill_shape(canvas, &shape, color);
}

#[cfg(test)]
#[path = "../../tests/unit/raster/fill.rs"]
mod tests;
