//! Scene painters: callers of the raster primitives that decide *what* an icon shows.

/// Default eighth-note icon.
pub mod note;

use crate::raster::canvas::Canvas;

/// Paints one scene onto a blank canvas of any size.
///
/// Painters must be resolution independent: the pipeline calls the same painter once per output
/// size, possibly from several threads.
pub trait Painter: Sync {
    /// Draw the scene onto `canvas`.
    fn paint(&self, canvas: &mut Canvas);
}

impl<F> Painter for F
where
    F: Fn(&mut Canvas) + Sync,
{
    fn paint(&self, canvas: &mut Canvas) {
        self(canvas)
    }
}
