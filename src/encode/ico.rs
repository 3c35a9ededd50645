use crate::encode::png::EncodedImage;
use crate::foundation::error::{IconError, IconResult};

/// Largest side an ICO directory entry can describe.
pub const MAX_ICO_SIDE: u32 = 256;

const HEADER_LEN: usize = 6;
const ENTRY_LEN: usize = 16;
const RESOURCE_TYPE_ICON: u16 = 1;
const COLOR_PLANES: u16 = 1;
const BITS_PER_PIXEL: u16 = 32;

/// One 16-byte ICO directory record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IcoDirEntry {
    side: u32,
    byte_len: u32,
    offset: u32,
}

impl IcoDirEntry {
    /// Entry for a `side`×`side` PNG of `byte_len` bytes stored at absolute `offset`.
    ///
    /// Fails with [`IconError::Validation`] unless `side` is in `1..=256`.
    pub fn new(side: u32, byte_len: u32, offset: u32) -> IconResult<Self> {
        if side == 0 || side > MAX_ICO_SIDE {
            return Err(IconError::validation(format!(
                "ico image side must be in 1..={MAX_ICO_SIDE}, got {side}"
            )));
        }
        Ok(Self {
            side,
            byte_len,
            offset,
        })
    }

    /// Square side length in pixels.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Length of the embedded PNG in bytes.
    pub fn byte_len(&self) -> u32 {
        self.byte_len
    }

    /// Absolute offset of the embedded PNG from the start of the file.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Serialize as little-endian fields; a side of 256 is stored as 0.
    pub fn to_bytes(self) -> [u8; 16] {
        // `new` bounds the side to 1..=256, so only 256 falls outside a byte.
        let dim = u8::try_from(self.side).unwrap_or(0);

        let mut out = [0u8; ENTRY_LEN];
        out[0] = dim;
        out[1] = dim;
        // out[2] color count, out[3] reserved
        out[4..6].copy_from_slice(&COLOR_PLANES.to_le_bytes());
        out[6..8].copy_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        out[8..12].copy_from_slice(&self.byte_len.to_le_bytes());
        out[12..16].copy_from_slice(&self.offset.to_le_bytes());
        out
    }
}

/// Compute directory entries for `images` laid out in order after the directory.
pub fn ico_directory(images: &[EncodedImage]) -> IconResult<Vec<IcoDirEntry>> {
    if images.len() > usize::from(u16::MAX) {
        return Err(IconError::validation(format!(
            "ico holds at most {} images, got {}",
            u16::MAX,
            images.len()
        )));
    }

    let mut offset = HEADER_LEN + ENTRY_LEN * images.len();
    let mut entries = Vec::with_capacity(images.len());
    for image in images {
        let len = image.bytes().len();
        let end = offset
            .checked_add(len)
            .filter(|end| u32::try_from(*end).is_ok())
            .ok_or_else(|| IconError::validation("ico payload exceeds 4 GiB"))?;
        entries.push(IcoDirEntry::new(image.side(), len as u32, offset as u32)?);
        offset = end;
    }
    Ok(entries)
}

/// Package PNG images into a multi-resolution ICO container.
///
/// Layout: 6-byte header, one 16-byte entry per image in input order, then the PNG blobs in the
/// same order starting at `6 + 16 * count`.
#[tracing::instrument(skip(images), fields(count = images.len()))]
pub fn encode_ico(images: &[EncodedImage]) -> IconResult<Vec<u8>> {
    let entries = ico_directory(images)?;
    let payload: usize = images.iter().map(|i| i.bytes().len()).sum();

    let mut out = Vec::with_capacity(HEADER_LEN + ENTRY_LEN * entries.len() + payload);
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&RESOURCE_TYPE_ICON.to_le_bytes());
    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for entry in &entries {
        out.extend_from_slice(&entry.to_bytes());
    }
    for image in images {
        out.extend_from_slice(image.bytes());
    }

    tracing::debug!(ico_bytes = out.len(), "encoded ico");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ico.rs"]
mod tests;
