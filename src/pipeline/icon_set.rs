use std::fs::File;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::encode::ico::encode_ico;
use crate::encode::png::{EncodedImage, encode_png};
use crate::foundation::core::Rgba;
use crate::foundation::error::{IconError, IconResult};
use crate::pipeline::config::IconSetConfig;
use crate::raster::canvas::Canvas;
use crate::scene::Painter;

/// Threading controls for rendering several sizes.
#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Render sizes on a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count (parallel mode only).
    pub threads: Option<usize>,
}

/// One output file held in memory until it is written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFile {
    /// File name relative to the output directory.
    pub name: String,
    /// Exact file contents.
    pub bytes: Vec<u8>,
}

/// Fully encoded icon set: per-size PNGs, aliases and the optional ICO bundle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconSet {
    images: Vec<EncodedImage>,
    files: Vec<OutputFile>,
}

impl IconSet {
    /// Encoded PNGs in configured size order.
    pub fn images(&self) -> &[EncodedImage] {
        &self.images
    }

    /// Every output file, in write order.
    pub fn files(&self) -> &[OutputFile] {
        &self.files
    }

    /// Look up an output by file name.
    pub fn file(&self, name: &str) -> Option<&OutputFile> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Look up the PNG rendered at `side`.
    pub fn image(&self, side: u32) -> Option<&EncodedImage> {
        self.images.iter().find(|i| i.side() == side)
    }

    /// Write every file into `dir`, creating it if absent.
    ///
    /// Each file is written to a temporary sibling and renamed into place, so a failure leaves
    /// previously written files intact and no partial file behind.
    #[tracing::instrument(skip_all, fields(dir = %dir.display(), files = self.files.len()))]
    pub fn write_to_dir(&self, dir: &Path) -> IconResult<Vec<PathBuf>> {
        std::fs::create_dir_all(dir).map_err(|e| IconError::io(dir, e))?;
        let mut written = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let path = dir.join(&file.name);
            write_file_atomic(&path, &file.bytes)?;
            tracing::info!(path = %path.display(), bytes = file.bytes.len(), "wrote");
            written.push(path);
        }
        Ok(written)
    }
}

/// Paint one canvas of side `size` starting from `fill`.
pub fn render_icon<P: Painter + ?Sized>(
    size: u32,
    fill: Rgba,
    painter: &P,
) -> IconResult<Canvas> {
    let mut canvas = Canvas::with_fill(size, fill)?;
    painter.paint(&mut canvas);
    Ok(canvas)
}

/// Render, encode and package every output `config` describes.
///
/// Output order does not depend on `threading`.
#[tracing::instrument(skip_all, fields(sizes = ?config.sizes, parallel = threading.parallel))]
pub fn build_icon_set<P: Painter + ?Sized>(
    config: &IconSetConfig,
    painter: &P,
    threading: &RenderThreading,
) -> IconResult<IconSet> {
    config.validate()?;

    let render_one = |&size: &u32| -> IconResult<EncodedImage> {
        let canvas = render_icon(size, config.fill, painter)?;
        encode_png(&canvas)
    };

    let images = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            config
                .sizes
                .par_iter()
                .map(render_one)
                .collect::<IconResult<Vec<_>>>()
        })?
    } else {
        config
            .sizes
            .iter()
            .map(render_one)
            .collect::<IconResult<Vec<_>>>()?
    };

    let mut files = Vec::with_capacity(images.len() + config.aliases.len() + 1);
    for image in &images {
        files.push(OutputFile {
            name: config.png_file_name(image.side()),
            bytes: image.bytes().to_vec(),
        });
    }
    for alias in &config.aliases {
        files.push(OutputFile {
            name: alias.file.clone(),
            bytes: rendered(&images, alias.size)?.bytes().to_vec(),
        });
    }
    if let Some(ico) = &config.ico {
        let members = ico
            .sizes
            .iter()
            .map(|&side| rendered(&images, side).cloned())
            .collect::<IconResult<Vec<_>>>()?;
        files.push(OutputFile {
            name: ico.file.clone(),
            bytes: encode_ico(&members)?,
        });
    }

    tracing::debug!(files = files.len(), "icon set encoded");
    Ok(IconSet { images, files })
}

fn rendered(images: &[EncodedImage], side: u32) -> IconResult<&EncodedImage> {
    images
        .iter()
        .find(|i| i.side() == side)
        .ok_or_else(|| IconError::validation(format!("size {side} was not rendered")))
}

/// Write `bytes` to `path` through a temporary sibling file and an atomic rename.
pub fn write_file_atomic(path: &Path, bytes: &[u8]) -> IconResult<()> {
    let name = path
        .file_name()
        .ok_or_else(|| IconError::validation(format!("'{}' has no file name", path.display())))?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    let result = File::create(&tmp)
        .and_then(|mut f| {
            f.write_all(bytes)?;
            f.sync_all()
        })
        .map_err(|e| IconError::io(&tmp, e))
        .and_then(|()| std::fs::rename(&tmp, path).map_err(|e| IconError::io(path, e)));

    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    result
}

fn build_thread_pool(threads: Option<usize>) -> IconResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(IconError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| IconError::Other(anyhow::Error::new(e).context("build rayon thread pool")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/icon_set.rs"]
mod tests;
