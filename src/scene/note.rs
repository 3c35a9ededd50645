use crate::foundation::core::{DEFAULT_SOFTNESS, Point, Rect, Rgba, Vec2, clamp01};
use crate::raster::canvas::Canvas;
use crate::raster::fill::fill_shape;
use crate::raster::shape::Shape;
use crate::scene::Painter;

/// Colors used by [`NoteIcon`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NotePalette {
    /// Gradient color at the top-left.
    pub background_start: Rgba,
    /// Gradient color at the bottom-right.
    pub background_end: Rgba,
    /// Accent swirled in towards the top.
    pub background_accent: Rgba,
    /// Soft highlight near the upper-left third.
    pub highlight: Rgba,
    /// Edge darkening color.
    pub vignette: Rgba,
    /// Offset drop shadow under the glyph.
    pub shadow: Rgba,
    /// Glyph fill.
    pub glyph: Rgba,
}

impl Default for NotePalette {
    fn default() -> Self {
        Self {
            background_start: Rgba::rgb(0.118, 0.227, 0.541),
            background_end: Rgba::rgb(0.059, 0.09, 0.165),
            background_accent: Rgba::rgb(0.231, 0.51, 0.965),
            highlight: Rgba::rgb(1.0, 1.0, 1.0),
            vignette: Rgba::rgb(0.05, 0.05, 0.08),
            shadow: Rgba::new(0.02, 0.05, 0.08, 0.32),
            glyph: Rgba::new(0.95, 0.98, 1.0, 0.92),
        }
    }
}

/// Beamed eighth note with a drop shadow over a diagonal gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteIcon {
    /// Scene colors.
    pub palette: NotePalette,
    /// Feather width for every glyph shape.
    pub softness: f64,
}

impl Default for NoteIcon {
    fn default() -> Self {
        Self::new(NotePalette::default())
    }
}

impl NoteIcon {
    /// Icon with the given palette and [`DEFAULT_SOFTNESS`].
    pub fn new(palette: NotePalette) -> Self {
        Self {
            palette,
            softness: DEFAULT_SOFTNESS,
        }
    }

    fn paint_background(&self, canvas: &mut Canvas) {
        let p = &self.palette;
        let size = f64::from(canvas.size());
        let span = (size - 1.0).max(1.0);

        for y in 0..i64::from(canvas.size()) {
            let v = y as f64 / span;
            for x in 0..i64::from(canvas.size()) {
                let u = x as f64 / span;
                let base = mix(p.background_start, p.background_end, u * 0.55 + v * 0.45);
                let swirl = mix(
                    base,
                    p.background_accent,
                    (u * 0.4 + (1.0 - v) * 0.6).powf(1.2),
                );

                let glow = (x as f64 - size * 0.3).hypot(y as f64 - size * 0.22);
                let highlight = clamp01(1.0 - glow / (size * 0.9));
                let lit = mix(swirl, p.highlight, 0.18 * highlight.powf(1.6));

                let edge = (x as f64 - size / 2.0).hypot(y as f64 - size / 2.0) / (size * 0.72);
                let color = mix(lit, p.vignette, clamp01(edge * 0.12));
                canvas.composite(x, y, color.with_alpha(1.0));
            }
        }
    }

    fn glyph(&self, size: f64) -> [Shape; 4] {
        let stem_w = size * 0.12;
        let (stem_x0, stem_y0) = (size * 0.58, size * 0.24);
        let stem = Rect::new(stem_x0, stem_y0, stem_x0 + stem_w, stem_y0 + size * 0.46);
        let beam = Rect::new(size * 0.4, stem.y0, stem.x1, stem.y0 + size * 0.1);

        let head1_r = size * 0.12;
        let head1 = Point::new(size * 0.38, stem.y1 - head1_r * 0.3);
        let head2_r = size * 0.11;
        let head2 = Point::new(stem.x0 + stem_w * 0.45, stem.y1 - head2_r * 0.1);

        [
            Shape::rect(stem),
            Shape::rect(beam),
            Shape::circle(head1, head1_r),
            Shape::circle(head2, head2_r),
        ]
        .map(|s| s.with_softness(self.softness))
    }
}

impl Painter for NoteIcon {
    fn paint(&self, canvas: &mut Canvas) {
        self.paint_background(canvas);

        let size = f64::from(canvas.size());
        let glyph = self.glyph(size);
        let offset = Vec2::new(size * 0.02, size * 0.02);
        for shape in &glyph {
            fill_shape(canvas, &shape.translated(offset), self.palette.shadow);
        }
        for shape in &glyph {
            fill_shape(canvas, shape, self.palette.glyph);
        }
    }
}

fn mix(a: Rgba, b: Rgba, t: f64) -> Rgba {
    let lerp = |x: f64, y: f64| x + (y - x) * t;
    Rgba::new(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b), lerp(a.a, b.a))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/note.rs"]
mod tests;
