use super::*;

#[test]
fn new_rejects_zero_size() {
    assert!(matches!(Canvas::new(0), Err(IconError::InvalidSize(_))));
}

#[test]
fn new_is_transparent_black() {
    let c = Canvas::new(3).unwrap();
    assert_eq!(c.size(), 3);
    assert_eq!(c.pixels().len(), 9);
    assert!(c.pixels().iter().all(|p| *p == Rgba::TRANSPARENT));
}

#[test]
fn opaque_source_replaces_destination() {
    let mut c = Canvas::with_fill(2, Rgba::new(0.2, 0.4, 0.6, 0.7)).unwrap();
    let src = Rgba::new(0.9, 0.1, 0.3, 1.0);
    c.composite(1, 0, src);
    assert_eq!(c.pixel(1, 0), Some(src));
    assert_eq!(c.pixel(0, 0), Some(Rgba::new(0.2, 0.4, 0.6, 0.7)));
}

#[test]
fn transparent_source_leaves_destination() {
    let dst = Rgba::new(0.13, 0.57, 0.91, 0.33);
    let mut c = Canvas::with_fill(1, dst).unwrap();
    c.composite(0, 0, Rgba::new(1.0, 1.0, 1.0, 0.0));
    assert_eq!(c.pixel(0, 0), Some(dst));
}

#[test]
fn zero_alpha_result_normalizes_to_transparent_black() {
    let mut c = Canvas::with_fill(1, Rgba::new(0.8, 0.6, 0.4, 0.0)).unwrap();
    c.composite(0, 0, Rgba::new(0.5, 0.5, 0.5, 0.0));
    assert_eq!(c.pixel(0, 0), Some(Rgba::TRANSPARENT));
}

#[test]
fn half_over_opaque_mixes_channels() {
    let mut c = Canvas::with_fill(1, Rgba::rgb(0.0, 0.0, 1.0)).unwrap();
    c.composite(0, 0, Rgba::new(1.0, 0.0, 0.0, 0.5));
    let p = c.pixel(0, 0).unwrap();
    assert!((p.a - 1.0).abs() < 1e-6);
    assert!((p.r - 0.5).abs() < 1e-6);
    assert!(p.g.abs() < 1e-6);
    assert!((p.b - 0.5).abs() < 1e-6);
}

#[test]
fn half_over_transparent_keeps_source_color() {
    let mut c = Canvas::new(1).unwrap();
    c.composite(0, 0, Rgba::new(0.25, 0.5, 0.75, 0.5));
    let p = c.pixel(0, 0).unwrap();
    assert!((p.a - 0.5).abs() < 1e-6);
    assert!((p.r - 0.25).abs() < 1e-6);
    assert!((p.g - 0.5).abs() < 1e-6);
    assert!((p.b - 0.75).abs() < 1e-6);
}

#[test]
fn out_of_range_composite_is_noop() {
    let mut c = Canvas::new(2).unwrap();
    let before = c.clone();
    for (x, y) in [(-1, 0), (0, -1), (2, 0), (0, 2), (i64::MAX, i64::MIN)] {
        c.composite(x, y, Rgba::rgb(1.0, 1.0, 1.0));
    }
    assert_eq!(c, before);
    assert_eq!(c.pixel(2, 0), None);
}

#[test]
fn rgba8_image_is_row_major() {
    let mut c = Canvas::new(2).unwrap();
    c.composite(1, 0, Rgba::rgb(1.0, 0.0, 0.0));
    c.composite(0, 1, Rgba::rgb(0.0, 0.0, 1.0));
    let img = c.to_rgba8_image();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(0, 1).0, [0, 0, 255, 255]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
}

#[test]
fn unallocatable_size_is_an_error() {
    assert!(matches!(Canvas::new(u32::MAX), Err(IconError::InvalidSize(_))));
    let err = Canvas::with_fill(u32::MAX, Rgba::rgb(1.0, 1.0, 1.0)).unwrap_err();
    assert!(err.to_string().contains("4294967295"), "{err}");
}

#[test]
fn blend_is_computed_in_double_precision() {
    let mut c = Canvas::with_fill(1, Rgba::new(0.7, 0.3, 0.9, 0.6)).unwrap();
    c.composite(0, 0, Rgba::new(0.1, 0.8, 0.2, 0.3));
    let inv = 1.0 - 0.3;
    let out_a = 0.3 + 0.6 * inv;
    let p = c.pixel(0, 0).unwrap();
    assert_eq!(p.a, out_a);
    assert_eq!(p.r, (0.1 * 0.3 + 0.7 * 0.6 * inv) / out_a);
}
