use super::*;

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

fn assert_near(px: [u8; 4], want: [u8; 4]) {
    for c in 0..4 {
        assert!(
            (i32::from(px[c]) - i32::from(want[c])).abs() <= 3,
            "{px:?} vs {want:?}"
        );
    }
}

fn fill(color: [u8; 4]) -> ShapeStyle {
    ShapeStyle {
        fill: Some(color),
        ..ShapeStyle::default()
    }
}

fn outline(color: [u8; 4], stroke_width: f64) -> ShapeStyle {
    ShapeStyle {
        fill: None,
        outline: Some(color),
        stroke_width,
    }
}

#[test]
fn pixel_aligned_rectangle_fills_exactly() {
    let mut s = Surface::new(4, 4).unwrap();
    rectangle(&mut s, vk::Rect::new(1.0, 1.0, 3.0, 3.0), 0.0, &fill(RED)).unwrap();
    assert_near(s.pixel(1, 1), RED);
    assert_near(s.pixel(2, 2), RED);
    assert_eq!(s.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(s.pixel(3, 3), [0, 0, 0, 0]);
}

#[test]
fn rectangle_outline_stays_inside_the_box() {
    let mut s = Surface::new(6, 6).unwrap();
    rectangle(&mut s, vk::Rect::new(1.0, 1.0, 5.0, 5.0), 0.0, &outline(BLUE, 1.0)).unwrap();
    assert!(s.pixel(1, 1)[3] > 200);
    assert!(s.pixel(4, 2)[3] > 200);
    assert_eq!(s.pixel(0, 0)[3], 0);
    assert_eq!(s.pixel(5, 3)[3], 0);
    assert_eq!(s.pixel(2, 2)[3], 0);
}

#[test]
fn oversized_outline_fills_the_box() {
    let mut s = Surface::new(4, 4).unwrap();
    rectangle(&mut s, vk::Rect::new(0.0, 0.0, 4.0, 4.0), 0.0, &outline(BLUE, 10.0)).unwrap();
    assert_near(s.pixel(2, 2), BLUE);
}

#[test]
fn outline_is_drawn_over_fill() {
    let mut s = Surface::new(8, 8).unwrap();
    let style = ShapeStyle {
        fill: Some(RED),
        outline: Some(BLUE),
        stroke_width: 2.0,
    };
    rectangle(&mut s, vk::Rect::new(0.0, 0.0, 8.0, 8.0), 0.0, &style).unwrap();
    assert_near(s.pixel(0, 4), BLUE);
    assert_near(s.pixel(4, 4), RED);
}

#[test]
fn rounded_rectangle_clears_corners() {
    let mut s = Surface::new(20, 20).unwrap();
    rectangle(&mut s, vk::Rect::new(0.0, 0.0, 20.0, 20.0), 8.0, &fill(RED)).unwrap();
    assert_eq!(s.pixel(0, 0)[3], 0);
    assert_near(s.pixel(10, 10), RED);
    assert_near(s.pixel(10, 0), RED);
}

#[test]
fn ellipse_covers_center_not_corners() {
    let mut s = Surface::new(10, 10).unwrap();
    ellipse(&mut s, vk::Rect::new(0.0, 0.0, 10.0, 10.0), &fill(RED)).unwrap();
    assert_near(s.pixel(5, 5), RED);
    assert_eq!(s.pixel(0, 0)[3], 0);
    assert_eq!(s.pixel(9, 9)[3], 0);
}

#[test]
fn polygon_fills_triangle() {
    let mut s = Surface::new(10, 10).unwrap();
    let pts = [
        vk::Point::new(0.0, 0.0),
        vk::Point::new(10.0, 0.0),
        vk::Point::new(0.0, 10.0),
    ];
    polygon(&mut s, &pts, &fill(RED)).unwrap();
    assert_near(s.pixel(1, 1), RED);
    assert_eq!(s.pixel(8, 8)[3], 0);
}

#[test]
fn full_arc_is_a_ring() {
    let mut s = Surface::new(20, 20).unwrap();
    arc(&mut s, vk::Rect::new(0.0, 0.0, 20.0, 20.0), -90.0, 360.0, RED, 2.0).unwrap();
    assert!(s.pixel(10, 0)[3] > 200);
    assert!(s.pixel(10, 19)[3] > 200);
    assert!(s.pixel(0, 10)[3] > 200);
    assert_eq!(s.pixel(10, 10)[3], 0);
}

#[test]
fn half_arc_from_top_covers_right_side_only() {
    let mut s = Surface::new(20, 20).unwrap();
    arc(&mut s, vk::Rect::new(0.0, 0.0, 20.0, 20.0), -90.0, 180.0, RED, 2.0).unwrap();
    assert!(s.pixel(19, 10)[3] > 200);
    assert_eq!(s.pixel(0, 10)[3], 0);
}

#[test]
fn empty_sweep_draws_nothing() {
    let mut s = Surface::new(8, 8).unwrap();
    arc(&mut s, vk::Rect::new(0.0, 0.0, 8.0, 8.0), 0.0, 0.0, RED, 2.0).unwrap();
    assert!(s.as_raw().iter().all(|&b| b == 0));
}

#[test]
fn coverage_mask_matches_shape() {
    let mask = coverage_mask(10, 10, &ellipse_path(vk::Rect::new(0.0, 0.0, 10.0, 10.0))).unwrap();
    assert_eq!(mask.len(), 100);
    assert_eq!(mask[5 * 10 + 5], 255);
    assert_eq!(mask[0], 0);
}
