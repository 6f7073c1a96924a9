use vello_cpu::kurbo::{self as vk, Shape as _};

use crate::foundation::error::EaselResult;
use crate::raster::composite::over_premul_onto;
use crate::raster::pixmap::{paint_color, rasterize};
use crate::raster::surface::Surface;

const TOLERANCE: f64 = 0.1;

/// Resolved fill and outline for one shape.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct ShapeStyle {
    pub(crate) fill: Option<[u8; 4]>,
    pub(crate) outline: Option<[u8; 4]>,
    pub(crate) stroke_width: f64,
}

impl ShapeStyle {
    fn stroke(&self) -> Option<([u8; 4], f64)> {
        self.outline
            .filter(|_| self.stroke_width > 0.0)
            .map(|c| (c, self.stroke_width))
    }
}

/// Rasterize with `draw` and composite the result over `surface`.
pub(crate) fn draw_over(
    surface: &mut Surface,
    draw: impl FnOnce(&mut vello_cpu::RenderContext) -> EaselResult<()>,
) -> EaselResult<()> {
    let pixmap = rasterize(surface.width(), surface.height(), draw)?;
    over_premul_onto(surface, pixmap.data_as_u8_slice())
}

/// Box outline strokes stay inside `rect`; a stroke wider than the box fills it.
pub(crate) fn rectangle(
    surface: &mut Surface,
    rect: vk::Rect,
    radius: f64,
    style: &ShapeStyle,
) -> EaselResult<()> {
    draw_over(surface, |ctx| {
        if let Some(fill) = style.fill {
            ctx.set_paint(paint_color(fill));
            ctx.fill_path(&rect_path(rect, radius));
        }
        if let Some((color, sw)) = style.stroke() {
            ctx.set_paint(paint_color(color));
            match inset(rect, sw) {
                Some(inner) => {
                    let r = (radius - sw / 2.0).max(0.0);
                    ctx.set_stroke(vk::Stroke::new(sw).with_join(vk::Join::Miter));
                    ctx.stroke_path(&rect_path(inner, r));
                }
                None => ctx.fill_path(&rect_path(rect, radius)),
            }
        }
        Ok(())
    })
}

pub(crate) fn ellipse(surface: &mut Surface, rect: vk::Rect, style: &ShapeStyle) -> EaselResult<()> {
    draw_over(surface, |ctx| {
        if let Some(fill) = style.fill {
            ctx.set_paint(paint_color(fill));
            ctx.fill_path(&vk::Ellipse::from_rect(rect).to_path(TOLERANCE));
        }
        if let Some((color, sw)) = style.stroke() {
            ctx.set_paint(paint_color(color));
            match inset(rect, sw) {
                Some(inner) => {
                    ctx.set_stroke(vk::Stroke::new(sw));
                    ctx.stroke_path(&vk::Ellipse::from_rect(inner).to_path(TOLERANCE));
                }
                None => ctx.fill_path(&vk::Ellipse::from_rect(rect).to_path(TOLERANCE)),
            }
        }
        Ok(())
    })
}

pub(crate) fn polygon(
    surface: &mut Surface,
    points: &[vk::Point],
    style: &ShapeStyle,
) -> EaselResult<()> {
    let mut path = vk::BezPath::new();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            path.move_to(*p);
        } else {
            path.line_to(*p);
        }
    }
    path.close_path();

    draw_over(surface, |ctx| {
        if let Some(fill) = style.fill {
            ctx.set_paint(paint_color(fill));
            ctx.fill_path(&path);
        }
        if let Some((color, sw)) = style.stroke() {
            ctx.set_paint(paint_color(color));
            ctx.set_stroke(vk::Stroke::new(sw).with_join(vk::Join::Miter));
            ctx.stroke_path(&path);
        }
        Ok(())
    })
}

/// Stroke the elliptical arc inscribed in `rect`. Angles are degrees, 0 at 3 o'clock, clockwise
/// positive.
pub(crate) fn arc(
    surface: &mut Surface,
    rect: vk::Rect,
    start_deg: f64,
    sweep_deg: f64,
    color: [u8; 4],
    stroke_width: f64,
) -> EaselResult<()> {
    if sweep_deg <= 0.0 || stroke_width <= 0.0 {
        return Ok(());
    }
    let half = stroke_width / 2.0;
    let radii = vk::Vec2::new(
        (rect.width() / 2.0 - half).max(0.0),
        (rect.height() / 2.0 - half).max(0.0),
    );
    let arc = vk::Arc::new(
        rect.center(),
        radii,
        start_deg.to_radians(),
        sweep_deg.to_radians(),
        0.0,
    );
    draw_over(surface, |ctx| {
        ctx.set_paint(paint_color(color));
        ctx.set_stroke(vk::Stroke::new(stroke_width).with_caps(vk::Cap::Butt));
        ctx.stroke_path(&arc.to_path(TOLERANCE));
        Ok(())
    })
}

/// Per-pixel coverage (0..=255) of `path` filled on a `width x height` grid.
pub(crate) fn coverage_mask(width: u32, height: u32, path: &vk::BezPath) -> EaselResult<Vec<u8>> {
    let pixmap = rasterize(width, height, |ctx| {
        ctx.set_paint(paint_color([255, 255, 255, 255]));
        ctx.fill_path(path);
        Ok(())
    })?;
    Ok(pixmap
        .data_as_u8_slice()
        .chunks_exact(4)
        .map(|px| px[3])
        .collect())
}

pub(crate) fn rect_path(rect: vk::Rect, radius: f64) -> vk::BezPath {
    let radius = radius.min(rect.width().min(rect.height()) / 2.0);
    if radius > 0.0 {
        vk::RoundedRect::from_rect(rect, radius).to_path(TOLERANCE)
    } else {
        rect.to_path(TOLERANCE)
    }
}

pub(crate) fn ellipse_path(rect: vk::Rect) -> vk::BezPath {
    vk::Ellipse::from_rect(rect).to_path(TOLERANCE)
}

/// Center line of a stroke of width `sw` that stays inside `rect`.
fn inset(rect: vk::Rect, sw: f64) -> Option<vk::Rect> {
    let inner = rect.inset(-sw / 2.0);
    (inner.width() > 0.0 && inner.height() > 0.0).then_some(inner)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/draw.rs"]
mod tests;
