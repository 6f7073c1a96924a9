use std::sync::Arc;

use vello_cpu::peniko::color::PremulRgba8;

use crate::foundation::error::{EaselError, EaselResult};
use crate::raster::composite::{premultiply, unpremultiply};
use crate::raster::surface::Surface;

pub(crate) fn pixmap_dims(width: u32, height: u32) -> EaselResult<(u16, u16)> {
    let w: u16 = width
        .try_into()
        .map_err(|_| EaselError::invalid_geometry(format!("width {width} exceeds u16")))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| EaselError::invalid_geometry(format!("height {height} exceeds u16")))?;
    if w == 0 || h == 0 {
        return Err(EaselError::invalid_geometry(format!(
            "size must be positive, got {width}x{height}"
        )));
    }
    Ok((w, h))
}

/// Premultiplied copy of `surface`.
pub(crate) fn pixmap_from_surface(surface: &Surface) -> EaselResult<vello_cpu::Pixmap> {
    let (w, h) = pixmap_dims(surface.width(), surface.height())?;
    let pixels: Vec<PremulRgba8> = surface
        .as_raw()
        .chunks_exact(4)
        .map(|px| PremulRgba8::from_u8_array(premultiply([px[0], px[1], px[2], px[3]])))
        .collect();
    let opaque = surface.as_raw().chunks_exact(4).all(|px| px[3] == 255);
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, opaque,
    ))
}

/// Image paint sampling `surface` in its own pixel space.
pub(crate) fn image_paint(surface: &Surface) -> EaselResult<vello_cpu::Image> {
    let pixmap = pixmap_from_surface(surface)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

/// Straight-alpha surface from a premultiplied pixmap.
pub(crate) fn surface_from_pixmap(pixmap: &vello_cpu::Pixmap) -> EaselResult<Surface> {
    let bytes = pixmap.data_as_u8_slice();
    let mut out = Vec::with_capacity(bytes.len());
    for px in bytes.chunks_exact(4) {
        out.extend_from_slice(&unpremultiply([px[0], px[1], px[2], px[3]]));
    }
    Surface::from_raw(
        u32::from(pixmap.width()),
        u32::from(pixmap.height()),
        out,
    )
}

/// Render `draw` into a fresh transparent pixmap of the given size.
pub(crate) fn rasterize(
    width: u32,
    height: u32,
    draw: impl FnOnce(&mut vello_cpu::RenderContext) -> EaselResult<()>,
) -> EaselResult<vello_cpu::Pixmap> {
    let (w, h) = pixmap_dims(width, height)?;
    let mut ctx = vello_cpu::RenderContext::new(w, h);
    draw(&mut ctx)?;
    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    Ok(pixmap)
}

pub(crate) fn paint_color(rgba: [u8; 4]) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}
