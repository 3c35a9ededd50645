use crate::foundation::core::{DEFAULT_SOFTNESS, MIN_SOFTNESS, Point, Rect, Vec2, clamp01};

/// Anti-aliased primitive understood by the rasterizer.
///
/// Both variants feather linearly: coverage is 1 inside the nominal outline and falls to 0 over
/// `softness` pixels outside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    /// Filled disc.
    Circle {
        /// Center in canvas coordinates.
        center: Point,
        /// Nominal radius; the feather band lies outside it.
        radius: f64,
        /// Feather width in pixels.
        softness: f64,
    },
    /// Filled rectangle whose feathered corners read as rounded.
    Rect {
        /// Opposite corners `(x0, y0)` and `(x1, y1)`.
        rect: Rect,
        /// Feather width in pixels.
        softness: f64,
    },
}

/// Inclusive pixel bounds a shape can touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PixelWindow {
    pub(crate) x0: i64,
    pub(crate) y0: i64,
    pub(crate) x1: i64,
    pub(crate) y1: i64,
}

impl Shape {
    /// Circle with [`DEFAULT_SOFTNESS`].
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::Circle {
            center,
            radius,
            softness: DEFAULT_SOFTNESS,
        }
    }

    /// Rectangle with [`DEFAULT_SOFTNESS`].
    pub fn rect(rect: Rect) -> Self {
        Self::Rect {
            rect,
            softness: DEFAULT_SOFTNESS,
        }
    }

    /// Same shape with a different feather width.
    pub fn with_softness(self, softness: f64) -> Self {
        match self {
            Self::Circle { center, radius, .. } => Self::Circle {
                center,
                radius,
                softness,
            },
            Self::Rect { rect, .. } => Self::Rect { rect, softness },
        }
    }

    /// Feather width in pixels.
    pub fn softness(&self) -> f64 {
        match *self {
            Self::Circle { softness, .. } | Self::Rect { softness, .. } => softness,
        }
    }

    /// Same shape moved by `offset`, e.g. to paint a drop shadow.
    pub fn translated(self, offset: Vec2) -> Self {
        match self {
            Self::Circle {
                center,
                radius,
                softness,
            } => Self::Circle {
                center: center + offset,
                radius,
                softness,
            },
            Self::Rect { rect, softness } => Self::Rect {
                rect: rect + offset,
                softness,
            },
        }
    }

    /// Fraction of the pixel sampled at `p` that the shape covers, in `[0, 1]`.
    pub fn coverage_at(&self, p: Point) -> f64 {
        let outside = self.outside_distance(p);
        if outside > 0.0 {
            clamp01(1.0 - outside / self.softness().max(MIN_SOFTNESS))
        } else {
            1.0
        }
    }

    /// Signed distance past the nominal outline; `<= 0` means inside.
    fn outside_distance(&self, p: Point) -> f64 {
        match *self {
            Self::Circle { center, radius, .. } => p.distance(center) - radius,
            Self::Rect { rect, .. } => {
                let dx = (rect.x0 - p.x).max(0.0).max(p.x - rect.x1);
                let dy = (rect.y0 - p.y).max(0.0).max(p.y - rect.y1);
                dx.hypot(dy)
            }
        }
    }

    /// Pixels that can receive coverage. Bounds truncate toward zero.
    pub(crate) fn pixel_window(&self) -> PixelWindow {
        match *self {
            Self::Circle {
                center,
                radius,
                softness,
            } => {
                let reach = radius + softness + 1.0;
                PixelWindow {
                    x0: (center.x - reach) as i64,
                    y0: (center.y - reach) as i64,
                    x1: (center.x + reach) as i64,
                    y1: (center.y + reach) as i64,
                }
            }
            Self::Rect { rect, softness } => PixelWindow {
                x0: (rect.x0 - softness) as i64,
                y0: (rect.y0 - softness) as i64,
                x1: (rect.x1 + softness) as i64,
                y1: (rect.y1 + softness) as i64,
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/shape.rs"]
mod tests;
