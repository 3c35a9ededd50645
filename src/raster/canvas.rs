use crate::foundation::core::Rgba;
use crate::foundation::error::{IconError, IconResult};

/// Square raster of straight-alpha [`Rgba`] pixels stored row-major in one flat buffer.
///
/// [`Canvas::composite`] is the only way pixels change after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    size: u32,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Allocate a `size`×`size` canvas filled with transparent black.
    pub fn new(size: u32) -> IconResult<Self> {
        Self::with_fill(size, Rgba::TRANSPARENT)
    }

    /// Allocate a `size`×`size` canvas with every pixel set to `fill`.
    pub fn with_fill(size: u32, fill: Rgba) -> IconResult<Self> {
        if size == 0 {
            return Err(IconError::invalid_size("canvas size must be > 0"));
        }
        let too_large = || IconError::invalid_size(format!("canvas size {size} is too large"));
        let len = (size as usize)
            .checked_mul(size as usize)
            .filter(|len| {
                len.checked_mul(std::mem::size_of::<Rgba>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(too_large)?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|e| {
            IconError::invalid_size(format!("canvas size {size} cannot be allocated: {e}"))
        })?;
        pixels.resize(len, fill);
        Ok(Self { size, pixels })
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Row-major pixel buffer (`y * size + x`).
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Blend `src` over the pixel at `(x, y)` using source-over compositing.
    ///
    /// Coordinates outside `[0, size)` are ignored. A blend whose resulting alpha is zero stores
    /// transparent black so no stale color survives under zero alpha.
    pub fn composite(&mut self, x: i64, y: i64, src: Rgba) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        self.pixels[i] = over(self.pixels[i], src);
    }

    /// Quantized 8-bit copy of the canvas.
    pub fn to_rgba8_image(&self) -> image::RgbaImage {
        let size = self.size as usize;
        image::RgbaImage::from_fn(self.size, self.size, |x, y| {
            image::Rgba(self.pixels[y as usize * size + x as usize].to_rgba8())
        })
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let size = i64::from(self.size);
        if !(0..size).contains(&x) || !(0..size).contains(&y) {
            return None;
        }
        Some((y * size + x) as usize)
    }
}

fn over(dst: Rgba, src: Rgba) -> Rgba {
    let inv = 1.0 - src.a;
    let out_a = src.a + dst.a * inv;
    if out_a == 0.0 {
        return Rgba::TRANSPARENT;
    }
    if src.a == 0.0 {
        return dst;
    }

    let blend = |s: f64, d: f64| (s * src.a + d * dst.a * inv) / out_a;
    Rgba {
        r: blend(src.r, dst.r),
        g: blend(src.g, dst.g),
        b: blend(src.b, dst.b),
        a: out_a,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/canvas.rs"]
mod tests;
