use image::imageops::{self, FilterType};
use vello_cpu::kurbo as vk;

use crate::foundation::core::ensure_size;
use crate::foundation::error::{EaselError, EaselResult};
use crate::foundation::math::{centered_crop, rotated_bounds};
use crate::raster::pixmap::{image_paint, rasterize, surface_from_pixmap};
use crate::raster::surface::Surface;

/// Lanczos rescale to exactly `(width, height)`.
pub(crate) fn resize(src: &Surface, width: u32, height: u32) -> EaselResult<Surface> {
    ensure_size(width, height)?;
    if src.size() == (width, height) {
        return Ok(src.clone());
    }
    Surface::from_rgba_image(imageops::resize(
        src.as_rgba_image(),
        width,
        height,
        FilterType::Lanczos3,
    ))
}

/// Crop the centered window with the target aspect ratio, then rescale it to the target size.
pub(crate) fn resize_cropped(src: &Surface, width: u32, height: u32) -> EaselResult<Surface> {
    ensure_size(width, height)?;
    let win = centered_crop(src.size(), (width, height));
    tracing::trace!(?win, from = ?src.size(), "crop window");
    let cropped = imageops::crop_imm(src.as_rgba_image(), win.x, win.y, win.width, win.height)
        .to_image();
    resize(&Surface::from_rgba_image(cropped)?, width, height)
}

/// Rotate counter-clockwise by `degrees` about the center. With `expand` the output grows to the
/// rotated bounding box; uncovered pixels are transparent.
pub(crate) fn rotate(src: &Surface, degrees: f64, expand: bool) -> EaselResult<Surface> {
    if !degrees.is_finite() {
        return Err(EaselError::invalid_geometry(format!(
            "rotation must be finite, got {degrees}"
        )));
    }
    let turns = degrees.rem_euclid(360.0);
    if turns == 0.0 {
        return Ok(src.clone());
    }

    let (w, h) = src.size();
    let (out_w, out_h) = if expand {
        rotated_bounds(w, h, degrees)
    } else {
        (w, h)
    };

    // Screen space is y-down, so a negative angle turns counter-clockwise.
    let tr = vk::Affine::translate((f64::from(out_w) / 2.0, f64::from(out_h) / 2.0))
        * vk::Affine::rotate(-degrees.to_radians())
        * vk::Affine::translate((-f64::from(w) / 2.0, -f64::from(h) / 2.0));

    let paint = image_paint(src)?;
    let pixmap = rasterize(out_w, out_h, |ctx| {
        ctx.set_transform(tr);
        ctx.set_paint(paint);
        ctx.fill_rect(&vk::Rect::new(0.0, 0.0, f64::from(w), f64::from(h)));
        Ok(())
    })?;
    surface_from_pixmap(&pixmap)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/transform.rs"]
mod tests;
