pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

/// Source-space window kept by an aspect-preserving crop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CropWindow {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

/// Center a window with the aspect ratio of `dst` inside `src`.
///
/// When the source is wider than the target the crop is width-wise, otherwise height-wise.
/// Offsets truncate toward zero, so odd remainders leave the extra pixel on the far edge.
pub(crate) fn centered_crop(src: (u32, u32), dst: (u32, u32)) -> CropWindow {
    let (w, h) = (f64::from(src.0), f64::from(src.1));
    let aspect = w / h;
    let ideal = f64::from(dst.0) / f64::from(dst.1);

    if aspect > ideal {
        let kept = ideal * h;
        let offset = ((w - kept) / 2.0) as u32;
        let width = src.0.saturating_sub(offset * 2).max(1);
        CropWindow {
            x: offset,
            y: 0,
            width,
            height: src.1,
        }
    } else {
        let kept = w / ideal;
        let offset = ((h - kept) / 2.0) as u32;
        let height = src.1.saturating_sub(offset * 2).max(1);
        CropWindow {
            x: 0,
            y: offset,
            width: src.0,
            height,
        }
    }
}

/// Drawn width of a progress bar; `percentage` is always on a 0..=100 scale.
pub(crate) fn bar_fill_width(max_width: f64, percentage: f64) -> f64 {
    (max_width / 100.0) * percentage
}

/// `(start, sweep)` in degrees for a circular progress indicator starting at 12 o'clock.
pub(crate) fn progress_sweep(percentage: f64) -> (f64, f64) {
    let start = -90.0;
    let end = percentage * 3.6 - 90.0;
    (start, clockwise_sweep(start, end))
}

/// `(start, sweep)` in degrees for an arc whose angle 0 points up.
pub(crate) fn up_arc(start: f64, rotation: f64) -> (f64, f64) {
    let start = start - 90.0;
    let end = rotation - 90.0;
    (start, clockwise_sweep(start, end))
}

/// Clockwise sweep from `start` to `end`; a difference of a full turn or more draws the full
/// ellipse, otherwise `end` wraps forward past `start`.
pub(crate) fn clockwise_sweep(start: f64, end: f64) -> f64 {
    let d = end - start;
    if d >= 360.0 { 360.0 } else { d.rem_euclid(360.0) }
}

/// Pixel size of the axis-aligned box enclosing a `w x h` rectangle rotated by `degrees`.
pub(crate) fn rotated_bounds(w: u32, h: u32, degrees: f64) -> (u32, u32) {
    let (s, c) = degrees.to_radians().sin_cos();
    let (w, h) = (f64::from(w), f64::from(h));
    // Trim float noise so right angles do not grow by a pixel.
    let bw = (w * c.abs() + h * s.abs() - 1e-6).ceil().max(1.0);
    let bh = (w * s.abs() + h * c.abs() - 1e-6).ceil().max(1.0);
    (bw as u32, bh as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
