use super::*;

#[test]
fn over_transparent_src_is_noop() {
    let dst = [1, 2, 3, 4];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    assert_eq!(over([0, 0, 0, 255], [255, 0, 0, 255]), [255, 0, 0, 255]);
}

#[test]
fn premultiply_roundtrip_is_exact_for_opaque_and_clear() {
    assert_eq!(unpremultiply(premultiply([12, 34, 56, 255])), [12, 34, 56, 255]);
    assert_eq!(premultiply([12, 34, 56, 0]), [0, 0, 0, 0]);
    assert_eq!(unpremultiply([9, 9, 9, 0]), [0, 0, 0, 0]);
}

#[test]
fn unpremultiply_stays_close_for_partial_alpha() {
    let px = [200, 100, 50, 128];
    let back = unpremultiply(premultiply(px));
    for c in 0..3 {
        assert!((i32::from(back[c]) - i32::from(px[c])).abs() <= 2);
    }
    assert_eq!(back[3], 128);
}

#[test]
fn over_straight_fast_paths() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over_straight(dst, [1, 2, 3, 0]), dst);
    assert_eq!(over_straight(dst, [1, 2, 3, 255]), [1, 2, 3, 255]);
    assert_eq!(over_straight([0, 0, 0, 0], [1, 2, 3, 77]), [1, 2, 3, 77]);
}

#[test]
fn over_straight_half_white_on_black_is_mid_gray() {
    let out = over_straight([0, 0, 0, 255], [255, 255, 255, 128]);
    assert_eq!(out[3], 255);
    assert!((i32::from(out[0]) - 128).abs() <= 1);
}

#[test]
fn crossfade_t_0_is_a_and_t_1_is_b() {
    let a = [10, 20, 30, 40];
    let b = [200, 210, 220, 230];
    assert_eq!(crossfade(a, b, 0.0), a);
    assert_eq!(crossfade(a, b, 1.0), b);
}

#[test]
fn crossfade_buffers_rejects_mismatched_lengths() {
    assert!(crossfade_buffers(&[0; 8], &[0; 4], 0.5).is_err());
    let out = crossfade_buffers(&[0, 0, 0, 0], &[254, 254, 254, 254], 0.5).unwrap();
    assert_eq!(out, vec![127, 127, 127, 127]);
}

#[test]
fn paste_clips_negative_and_overhanging_positions() {
    let mut dst = Surface::filled(4, 4, [0, 0, 0, 255]).unwrap();
    let src = Surface::filled(3, 3, [255, 0, 0, 255]).unwrap();

    paste_at(&mut dst, &src, -2, -2);
    assert_eq!(dst.pixel(0, 0), [255, 0, 0, 255]);
    assert_eq!(dst.pixel(1, 0), [0, 0, 0, 255]);
    assert_eq!(dst.pixel(0, 1), [0, 0, 0, 255]);

    paste_at(&mut dst, &src, 3, 3);
    assert_eq!(dst.pixel(3, 3), [255, 0, 0, 255]);
    assert_eq!(dst.pixel(2, 3), [0, 0, 0, 255]);

    let before = dst.clone();
    paste_at(&mut dst, &src, 10, 0);
    paste_at(&mut dst, &src, 0, -3);
    assert_eq!(dst, before);
}

#[test]
fn paste_at_extreme_positions_is_a_clipped_noop() {
    let mut dst = Surface::filled(4, 4, [0, 0, 0, 255]).unwrap();
    let src = Surface::filled(2, 2, [255, 0, 0, 255]).unwrap();
    let before = dst.clone();
    paste_at(&mut dst, &src, i64::MAX, 0);
    paste_at(&mut dst, &src, 0, i64::MAX);
    paste_at(&mut dst, &src, i64::MIN, i64::MIN);
    paste_at(&mut dst, &src, i64::MAX - 1, i64::MAX - 1);
    assert_eq!(dst, before);
}

#[test]
fn paste_transparent_source_leaves_destination() {
    let mut dst = Surface::filled(2, 2, [5, 6, 7, 200]).unwrap();
    let src = Surface::new(2, 2).unwrap();
    paste_at(&mut dst, &src, 0, 0);
    assert_eq!(dst.pixel(1, 1), [5, 6, 7, 200]);
}

#[test]
fn alpha_mask_scales_and_clears() {
    let mut s = Surface::filled(2, 1, [50, 60, 70, 255]).unwrap();
    apply_alpha_mask(&mut s, &[0, 128]).unwrap();
    assert_eq!(s.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(s.pixel(1, 0), [50, 60, 70, 128]);
    assert!(apply_alpha_mask(&mut s, &[0]).is_err());
}

#[test]
fn premul_overlay_requires_matching_size() {
    let mut s = Surface::filled(2, 1, [0, 0, 255, 255]).unwrap();
    over_premul_onto(&mut s, &[255, 0, 0, 255, 0, 0, 0, 0]).unwrap();
    assert_eq!(s.pixel(0, 0), [255, 0, 0, 255]);
    assert_eq!(s.pixel(1, 0), [0, 0, 255, 255]);
    assert!(over_premul_onto(&mut s, &[0; 4]).is_err());
}
