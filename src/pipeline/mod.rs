//! Icon-set generation: render every configured size, encode, and write the outputs.

/// Serializable icon-set configuration.
pub mod config;
/// Rendering, packaging and file output.
pub mod icon_set;
