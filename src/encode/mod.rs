//! Byte-exact output formats.
//!
//! Both encoders are pure functions over in-memory buffers; nothing here touches the filesystem.

/// Multi-resolution ICO container.
pub mod ico;
/// Truecolor+alpha PNG.
pub mod png;
