use super::*;

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255(255, 255), 255);
    assert_eq!(mul_div255(0, 255), 0);
    assert_eq!(mul_div255(128, 255), 128);
    assert_eq!(mul_div255(255, 128), 128);
}

#[test]
fn wide_source_crops_width_wise() {
    let w = centered_crop((200, 100), (100, 100));
    assert_eq!(
        w,
        CropWindow {
            x: 50,
            y: 0,
            width: 100,
            height: 100
        }
    );
}

#[test]
fn tall_source_crops_height_wise() {
    let w = centered_crop((100, 300), (100, 50));
    assert_eq!(w.x, 0);
    assert_eq!(w.width, 100);
    assert_eq!(w.y, 125);
    assert_eq!(w.height, 50);
}

#[test]
fn matching_aspect_keeps_everything() {
    let w = centered_crop((640, 480), (320, 240));
    assert_eq!(
        w,
        CropWindow {
            x: 0,
            y: 0,
            width: 640,
            height: 480
        }
    );
}

#[test]
fn extreme_aspect_never_collapses_to_zero() {
    let w = centered_crop((1, 1000), (1000, 1));
    assert!(w.width >= 1 && w.height >= 1);
}

#[test]
fn bar_width_is_percent_of_max() {
    assert_eq!(bar_fill_width(300.0, 100.0), 300.0);
    assert_eq!(bar_fill_width(300.0, 0.0), 0.0);
    assert_eq!(bar_fill_width(300.0, 50.0), 150.0);
}

#[test]
fn progress_sweep_starts_at_top() {
    assert_eq!(progress_sweep(100.0), (-90.0, 360.0));
    assert_eq!(progress_sweep(50.0), (-90.0, 180.0));
    assert_eq!(progress_sweep(0.0), (-90.0, 0.0));
    assert_eq!(progress_sweep(25.0), (-90.0, 90.0));
}

#[test]
fn up_arc_shifts_zero_to_top_and_wraps() {
    assert_eq!(up_arc(0.0, 90.0), (-90.0, 90.0));
    assert_eq!(up_arc(90.0, 0.0), (0.0, 270.0));
    assert_eq!(up_arc(0.0, 720.0), (-90.0, 360.0));
}

#[test]
fn rotated_bounds_handles_right_angles_and_diagonals() {
    assert_eq!(rotated_bounds(100, 50, 0.0), (100, 50));
    assert_eq!(rotated_bounds(100, 50, 90.0), (50, 100));
    assert_eq!(rotated_bounds(100, 50, 180.0), (100, 50));
    let (w, h) = rotated_bounds(100, 100, 45.0);
    assert_eq!((w, h), (142, 142));
}
