use super::*;

fn painted(size: u32) -> Canvas {
    let mut c = Canvas::new(size).unwrap();
    NoteIcon::default().paint(&mut c);
    c
}

#[test]
fn background_is_fully_opaque() {
    let c = painted(32);
    assert!(c.pixels().iter().all(|p| (p.a - 1.0).abs() < 1e-6));
}

#[test]
fn glyph_center_is_glyph_over_background() {
    let size = 64u32;
    let c = painted(size);
    // Middle of the stem.
    let (x, y) = ((size as f64 * 0.64) as i64, (size as f64 * 0.47) as i64);
    let px = c.pixel(x, y).unwrap();
    assert!(px.r > 0.85 && px.g > 0.85 && px.b > 0.9, "{px:?}");
}

#[test]
fn corners_show_background_only() {
    let c = painted(64);
    let corner = c.pixel(0, 63).unwrap();
    assert!(corner.r < 0.3 && corner.g < 0.4, "{corner:?}");
}

#[test]
fn single_pixel_canvas_does_not_divide_by_zero() {
    let c = painted(1);
    let px = c.pixel(0, 0).unwrap();
    assert!(px.r.is_finite() && px.g.is_finite() && px.b.is_finite());
}

#[test]
fn default_icon_uses_default_softness() {
    assert_eq!(NoteIcon::default().softness, DEFAULT_SOFTNESS);
}

#[test]
fn mix_endpoints() {
    let a = Rgba::new(0.0, 0.25, 0.5, 1.0);
    let b = Rgba::new(1.0, 0.75, 0.0, 0.0);
    assert_eq!(mix(a, b, 0.0), a);
    assert_eq!(mix(a, b, 1.0), b);
}

#[test]
fn stem_ends_at_top_plus_stem_height() {
    let size = 512.0;
    let [stem, _, head1, _] = NoteIcon::default().glyph(size);
    let Shape::Rect { rect, .. } = stem else {
        panic!("stem should be a rect: {stem:?}");
    };
    assert_eq!(rect.y1, size * 0.24 + size * 0.46);
    let Shape::Circle { center, radius, .. } = head1 else {
        panic!("head should be a circle: {head1:?}");
    };
    assert_eq!(center.y, rect.y1 - radius * 0.3);
}

#[test]
fn mix_keeps_double_precision() {
    let a = Rgba::rgb(0.1, 0.2, 0.3);
    let b = Rgba::rgb(0.7, 0.9, 0.4);
    let t = 0.37;
    assert_eq!(mix(a, b, t).r, 0.1 + (0.7 - 0.1) * t);
}
