pub use kurbo::{Point, Rect, Vec2};

/// Feather width, in pixels, used by shapes that don't specify their own softness.
pub const DEFAULT_SOFTNESS: f64 = 1.5;

/// Lower bound applied to softness before dividing by it.
pub const MIN_SOFTNESS: f64 = 1e-6;

/// Straight-alpha RGBA color with `f64` channels nominally in `[0, 1]`.
///
/// Channels are stored as given; clamping only happens when the color is quantized for output.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Opacity; defaults to 1 when omitted from configuration.
    #[serde(default = "opaque_alpha")]
    pub a: f64,
}

fn opaque_alpha() -> f64 {
    1.0
}

impl Default for Rgba {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

impl Rgba {
    /// Fully transparent black, the default canvas fill.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Build a color from straight channels.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Same color with alpha replaced.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Quantize to 8-bit straight RGBA: `round(clamp01(c) * 255)` per channel.
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

fn quantize(c: f64) -> u8 {
    // NaN falls through clamp and saturates to 0 in the cast.
    (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

pub(crate) fn clamp01(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
