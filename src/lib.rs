//! iconsmith renders anti-aliased favicon sets on the CPU and writes them as byte-exact PNG and
//! ICO files.
//!
//! # Pipeline overview
//!
//! 1. **Paint**: a [`Painter`] draws feathered [`Shape`]s onto a straight-alpha [`Canvas`] through
//!    source-over compositing.
//! 2. **Encode**: [`encode_png`] turns a canvas into an 8-bit RGBA PNG ([`EncodedImage`]).
//! 3. **Package**: [`encode_ico`] bundles several PNGs into one multi-resolution ICO.
//! 4. **Write** (optional): [`build_icon_set`] runs the above for every configured size and
//!    [`IconSet::write_to_dir`] stores the results.
//!
//! Painting and rasterization never fail: off-canvas pixels and degenerate shapes simply get zero
//! coverage. Everything before the final write is pure in-memory computation.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Byte-exact PNG and ICO encoders.
pub mod encode;
/// Icon-set configuration and generation.
pub mod pipeline;
/// Canvas, shapes and fills.
pub mod raster;
/// Scene painters built on the raster primitives.
pub mod scene;

pub use crate::foundation::core::{DEFAULT_SOFTNESS, MIN_SOFTNESS, Point, Rect, Rgba, Vec2};
pub use crate::foundation::error::{IconError, IconResult};

pub use crate::encode::ico::{IcoDirEntry, MAX_ICO_SIDE, encode_ico, ico_directory};
pub use crate::encode::png::{EncodedImage, PNG_SIGNATURE, encode_png};
pub use crate::pipeline::config::{AliasOutput, IcoOutput, IconSetConfig, SIZE_PLACEHOLDER};
pub use crate::pipeline::icon_set::{
    IconSet, OutputFile, RenderThreading, build_icon_set, render_icon, write_file_atomic,
};
pub use crate::raster::canvas::Canvas;
pub use crate::raster::fill::{draw_circle, draw_rect, fill_shape};
pub use crate::raster::shape::Shape;
pub use crate::scene::Painter;
pub use crate::scene::note::{NoteIcon, NotePalette};
