use std::io::Read as _;

use super::*;
use crate::foundation::core::Rgba;

struct Chunk<'a> {
    tag: &'a [u8],
    body: &'a [u8],
    crc: u32,
}

fn chunks(png: &[u8]) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut at = PNG_SIGNATURE.len();
    while at < png.len() {
        let len = u32::from_be_bytes(png[at..at + 4].try_into().unwrap()) as usize;
        let tag = &png[at + 4..at + 8];
        let body = &png[at + 8..at + 8 + len];
        let crc = u32::from_be_bytes(png[at + 8 + len..at + 12 + len].try_into().unwrap());
        out.push(Chunk { tag, body, crc });
        at += 12 + len;
    }
    assert_eq!(at, png.len());
    out
}

fn sample_canvas() -> Canvas {
    let mut c = Canvas::new(3).unwrap();
    c.composite(0, 0, Rgba::rgb(1.0, 0.0, 0.0));
    c.composite(2, 1, Rgba::new(0.0, 0.5, 1.0, 0.5));
    c
}

#[test]
fn layout_is_signature_ihdr_idat_iend() {
    let png = encode_png(&sample_canvas()).unwrap();
    assert_eq!(png.side(), 3);
    assert_eq!(&png.bytes()[..8], &PNG_SIGNATURE);

    let tags: Vec<_> = chunks(png.bytes()).iter().map(|c| c.tag.to_vec()).collect();
    assert_eq!(tags, vec![b"IHDR".to_vec(), b"IDAT".to_vec(), b"IEND".to_vec()]);
}

#[test]
fn ihdr_fields() {
    let png = encode_png(&Canvas::new(300).unwrap()).unwrap();
    let all = chunks(png.bytes());
    assert_eq!(
        all[0].body,
        &[0u8, 0, 1, 44, 0, 0, 1, 44, 8, 6, 0, 0, 0][..]
    );
}

#[test]
fn iend_matches_the_well_known_record() {
    let png = encode_png(&sample_canvas()).unwrap();
    let tail = &png.bytes()[png.bytes().len() - 12..];
    assert_eq!(
        tail,
        &[0u8, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
    );
}

#[test]
fn every_crc_covers_tag_and_body() {
    let png = encode_png(&sample_canvas()).unwrap();
    for chunk in chunks(png.bytes()) {
        let mut crc = flate2::Crc::new();
        crc.update(chunk.tag);
        crc.update(chunk.body);
        assert_eq!(crc.sum(), chunk.crc);
    }
}

#[test]
fn idat_inflates_to_unfiltered_scanlines() {
    let png = encode_png(&sample_canvas()).unwrap();
    let idat = chunks(png.bytes())
        .into_iter()
        .find(|c| c.tag == b"IDAT")
        .unwrap()
        .body
        .to_vec();

    let mut raw = Vec::new();
    flate2::read::ZlibDecoder::new(&idat[..])
        .read_to_end(&mut raw)
        .unwrap();

    assert_eq!(raw.len(), 3 * (1 + 3 * 4));
    for row in raw.chunks_exact(13) {
        assert_eq!(row[0], 0);
    }
    assert_eq!(&raw[1..5], &[255u8, 0, 0, 255]);
    assert_eq!(&raw[13 + 1 + 8..13 + 1 + 12], &[0u8, 128, 255, 128]);
}

#[test]
fn encoding_is_deterministic() {
    let a = encode_png(&sample_canvas()).unwrap();
    let b = encode_png(&sample_canvas()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn from_png_bytes_recovers_side() {
    let png = encode_png(&Canvas::new(17).unwrap()).unwrap();
    let again = EncodedImage::from_png_bytes(png.bytes().to_vec()).unwrap();
    assert_eq!(again.side(), 17);
    assert_eq!(again, png);
}

#[test]
fn from_png_bytes_rejects_garbage() {
    assert!(matches!(
        EncodedImage::from_png_bytes(b"GIF89a not a png at all, sorry!!!".to_vec()),
        Err(IconError::Validation(_))
    ));
    assert!(EncodedImage::from_png_bytes(PNG_SIGNATURE.to_vec()).is_err());
}
