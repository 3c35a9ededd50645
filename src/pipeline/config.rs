use std::collections::BTreeSet;
use std::path::Path;

use crate::encode::ico::MAX_ICO_SIDE;
use crate::foundation::core::{DEFAULT_SOFTNESS, Rgba};
use crate::foundation::error::{IconError, IconResult};
use crate::scene::note::{NoteIcon, NotePalette};

/// Placeholder replaced by the side length in [`IconSetConfig::png_name`].
pub const SIZE_PLACEHOLDER: &str = "{size}";

/// Which files an icon-set run produces and how they are painted.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconSetConfig {
    /// Square side lengths to render, in output order.
    pub sizes: Vec<u32>,
    /// File name template for per-size PNGs; must contain `{size}`.
    pub png_name: String,
    /// Extra byte-identical copies of specific sizes.
    pub aliases: Vec<AliasOutput>,
    /// Optional multi-resolution ICO bundle.
    pub ico: Option<IcoOutput>,
    /// Initial canvas fill before painting.
    pub fill: Rgba,
    /// Colors for the built-in note icon.
    pub palette: NotePalette,
    /// Feather width for the built-in note icon.
    pub softness: f64,
}

/// A named copy of one rendered size.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasOutput {
    /// Output file name.
    pub file: String,
    /// Rendered size to copy.
    pub size: u32,
}

/// ICO bundle of several rendered sizes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IcoOutput {
    /// Output file name.
    pub file: String,
    /// Rendered sizes to embed, in directory order.
    pub sizes: Vec<u32>,
}

impl Default for IconSetConfig {
    fn default() -> Self {
        Self {
            sizes: vec![512, 192, 64, 32, 16],
            png_name: format!("icon-{SIZE_PLACEHOLDER}.png"),
            aliases: vec![
                AliasOutput {
                    file: "apple-touch-icon.png".to_string(),
                    size: 192,
                },
                AliasOutput {
                    file: "favicon.png".to_string(),
                    size: 32,
                },
            ],
            ico: Some(IcoOutput {
                file: "favicon.ico".to_string(),
                sizes: vec![64, 32, 16],
            }),
            fill: Rgba::TRANSPARENT,
            palette: NotePalette::default(),
            softness: DEFAULT_SOFTNESS,
        }
    }
}

impl IconSetConfig {
    /// Read and validate a JSON configuration file.
    pub fn from_path(path: &Path) -> IconResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| IconError::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(text: &str) -> IconResult<Self> {
        let cfg: Self = serde_json::from_str(text)
            .map_err(|e| IconError::serde(format!("parse icon set config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Pretty-printed JSON form.
    pub fn to_json_pretty(&self) -> IconResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| IconError::serde(format!("serialize icon set config: {e}")))
    }

    /// File name of the PNG rendered at `size`.
    pub fn png_file_name(&self, size: u32) -> String {
        self.png_name.replace(SIZE_PLACEHOLDER, &size.to_string())
    }

    /// The built-in painter configured with this palette and softness.
    pub fn note_icon(&self) -> NoteIcon {
        NoteIcon {
            palette: self.palette.clone(),
            softness: self.softness,
        }
    }

    /// Check sizes, references between outputs, and file names.
    pub fn validate(&self) -> IconResult<()> {
        if self.sizes.is_empty() {
            return Err(IconError::validation("at least one size is required"));
        }
        let mut seen = BTreeSet::new();
        for &size in &self.sizes {
            if size == 0 {
                return Err(IconError::validation("sizes must be > 0"));
            }
            if !seen.insert(size) {
                return Err(IconError::validation(format!("size {size} listed twice")));
            }
        }
        if !self.png_name.contains(SIZE_PLACEHOLDER) {
            return Err(IconError::validation(format!(
                "png_name '{}' must contain {SIZE_PLACEHOLDER}",
                self.png_name
            )));
        }
        if !self.softness.is_finite() {
            return Err(IconError::validation("softness must be finite"));
        }

        let mut names = BTreeSet::new();
        let mut claim = |name: String| -> IconResult<()> {
            check_file_name(&name)?;
            if !names.insert(name.clone()) {
                return Err(IconError::validation(format!(
                    "output '{name}' is produced twice"
                )));
            }
            Ok(())
        };

        for &size in &self.sizes {
            claim(self.png_file_name(size))?;
        }
        for alias in &self.aliases {
            if !seen.contains(&alias.size) {
                return Err(IconError::validation(format!(
                    "alias '{}' refers to size {} which is not rendered",
                    alias.file, alias.size
                )));
            }
            claim(alias.file.clone())?;
        }
        if let Some(ico) = &self.ico {
            if ico.sizes.is_empty() {
                return Err(IconError::validation("ico needs at least one size"));
            }
            for &size in &ico.sizes {
                if !seen.contains(&size) {
                    return Err(IconError::validation(format!(
                        "ico size {size} is not rendered"
                    )));
                }
                if size > MAX_ICO_SIDE {
                    return Err(IconError::validation(format!(
                        "ico size {size} exceeds {MAX_ICO_SIDE}"
                    )));
                }
            }
            claim(ico.file.clone())?;
        }
        Ok(())
    }
}

fn check_file_name(name: &str) -> IconResult<()> {
    // Leading dots are reserved for in-flight temporary files.
    let plain = !name.is_empty() && !name.starts_with('.') && !name.contains(['/', '\\']);
    if plain {
        Ok(())
    } else {
        Err(IconError::validation(format!(
            "output name '{name}' must be a plain file name"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
