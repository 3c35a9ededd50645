//! CPU rasterization: a straight-alpha canvas and feathered shape fills.

/// Pixel storage and source-over compositing.
pub mod canvas;
/// Shared coverage-to-composite loop.
pub mod fill;
/// Shape primitives and their coverage functions.
pub mod shape;
