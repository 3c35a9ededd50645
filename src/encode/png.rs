use std::io::Write as _;

use flate2::{Compression, write::ZlibEncoder};

use crate::foundation::error::{IconError, IconResult};
use crate::raster::canvas::Canvas;

/// Fixed 8-byte PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

const COLOR_TYPE_RGBA: u8 = 6;
const BIT_DEPTH: u8 = 8;
const FILTER_NONE: u8 = 0;
// PNG caps record bodies at 2^31 - 1 bytes.
const MAX_CHUNK_LEN: usize = i32::MAX as usize;

/// One fully encoded square PNG together with its side length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    side: u32,
    bytes: Vec<u8>,
}

impl EncodedImage {
    /// Wrap PNG bytes, recovering the side length from the IHDR record.
    pub fn from_png_bytes(bytes: Vec<u8>) -> IconResult<Self> {
        if bytes.len() < 33 || bytes[..8] != PNG_SIGNATURE || &bytes[12..16] != b"IHDR" {
            return Err(IconError::validation("not a PNG stream with a leading IHDR"));
        }
        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        if width != height {
            return Err(IconError::validation(format!(
                "icon images must be square, got {width}x{height}"
            )));
        }
        Ok(Self { side: width, bytes })
    }

    /// Side length in pixels.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Encoded PNG bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Encode `canvas` as an 8-bit truecolor+alpha, non-interlaced PNG.
///
/// Scanlines are unfiltered and compressed with zlib at the best compression level, so output is
/// deterministic for a given canvas.
#[tracing::instrument(skip(canvas), fields(size = canvas.size()))]
pub fn encode_png(canvas: &Canvas) -> IconResult<EncodedImage> {
    let size = canvas.size();
    let image = canvas.to_rgba8_image();
    let stride = size as usize * 4;

    let mut scanlines = Vec::with_capacity((stride + 1) * size as usize);
    for row in image.as_raw().chunks_exact(stride) {
        scanlines.push(FILTER_NONE);
        scanlines.extend_from_slice(row);
    }
    let compressed = deflate(&scanlines)?;

    let mut ihdr = [0u8; 13];
    ihdr[0..4].copy_from_slice(&size.to_be_bytes());
    ihdr[4..8].copy_from_slice(&size.to_be_bytes());
    ihdr[8] = BIT_DEPTH;
    ihdr[9] = COLOR_TYPE_RGBA;
    // compression, filter and interlace methods stay 0

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + 3 * 12 + ihdr.len() + compressed.len());
    out.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut out, b"IHDR", &ihdr)?;
    write_chunk(&mut out, b"IDAT", &compressed)?;
    write_chunk(&mut out, b"IEND", &[])?;

    tracing::debug!(
        raw_bytes = scanlines.len(),
        idat_bytes = compressed.len(),
        png_bytes = out.len(),
        "encoded png"
    );
    Ok(EncodedImage {
        side: size,
        bytes: out,
    })
}

fn deflate(data: &[u8]) -> IconResult<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), Compression::best());
    encoder
        .write_all(data)
        .map_err(|e| IconError::encoding(format!("deflate scanlines: {e}")))?;
    encoder
        .finish()
        .map_err(|e| IconError::encoding(format!("finish deflate stream: {e}")))
}

/// Append one record: BE length, tag, body, BE CRC-32 of tag + body.
fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], body: &[u8]) -> IconResult<()> {
    if body.len() > MAX_CHUNK_LEN {
        return Err(IconError::encoding(format!(
            "{} record of {} bytes exceeds the PNG limit",
            String::from_utf8_lossy(tag),
            body.len()
        )));
    }
    let mut crc = flate2::Crc::new();
    crc.update(tag);
    crc.update(body);

    out.extend_from_slice(&(body.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(body);
    out.extend_from_slice(&crc.sum().to_be_bytes());
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
