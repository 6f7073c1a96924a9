use std::path::Path;

use anyhow::Context;
use image::ImageFormat;
use vello_cpu::kurbo as vk;

use crate::editor::ops::{
    ArcArgs, BarArgs, EllipseArgs, MultiTextArgs, Op, PolygonArgs, RectangleArgs, RoundedBarArgs,
    TextArgs,
};
use crate::editor::source::ImageSource;
use crate::foundation::color::Color;
use crate::foundation::core::{
    BlurMode, Point, ensure_finite_point, ensure_non_negative, ensure_positive,
};
use crate::foundation::error::{EaselError, EaselResult};
use crate::foundation::math::{bar_fill_width, progress_sweep, up_arc};
use crate::raster::blur::blur_surface;
use crate::raster::composite::{apply_alpha_mask, crossfade_buffers, paste_at};
use crate::raster::draw::{self, ShapeStyle, coverage_mask, draw_over};
use crate::raster::surface::Surface;
use crate::raster::transform;
use crate::text::layout::{TextBrushRgba8, TextLayoutEngine, anchor_x, run_origins};

/// Stateful image editor owning one RGBA surface.
///
/// Every operation mutates the surface in place and returns `&mut Self` so calls chain with `?`:
///
/// ```no_run
/// use easel::{Canvas, Editor, EllipseArgs};
///
/// let mut editor = Editor::new(Canvas::new(200, 100, "white")?)?;
/// editor
///     .resize((100, 100), true)?
///     .ellipse(EllipseArgs::new((10.0, 10.0), 80.0, 80.0).fill("red"))?
///     .circle_image()?;
/// let png = editor.image_bytes()?;
/// # Ok::<(), easel::EaselError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Editor {
    surface: Surface,
}

impl Editor {
    /// Start editing `source`; undecodable input is [`EaselError::Construction`].
    pub fn new(source: impl Into<ImageSource>) -> EaselResult<Self> {
        Ok(Self {
            surface: source.into().into_surface()?,
        })
    }

    /// Current pixels.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Give up the editor and keep its pixels.
    pub fn into_surface(self) -> Surface {
        self.surface
    }

    /// `(width, height)` of the current surface.
    pub fn size(&self) -> (u32, u32) {
        self.surface.size()
    }

    /// Run one recorded operation.
    #[tracing::instrument(level = "trace", skip_all, fields(op = %op.kind()))]
    pub fn apply(&mut self, op: &Op) -> EaselResult<&mut Self> {
        match op {
            Op::Resize(a) => self.resize(a.size, a.crop),
            Op::RoundedCorners(a) => self.rounded_corners(a.radius, a.offset),
            Op::CircleImage => self.circle_image(),
            Op::Rotate(a) => self.rotate(a.degrees, a.expand),
            Op::Blur(a) => self.blur(a.mode, a.amount),
            Op::Blend(a) => self.blend_with(&a.image, a.alpha, a.on_top),
            Op::Paste(a) => self.paste_with(&a.image, a.position),
            Op::Text(a) => self.text_with(a),
            Op::MultiText(a) => self.multi_text_with(a),
            Op::Rectangle(a) => self.rectangle_with(a),
            Op::Bar(a) => self.bar_with(a),
            Op::RoundedBar(a) => self.rounded_bar_with(a),
            Op::Ellipse(a) => self.ellipse_with(a),
            Op::Polygon(a) => self.polygon_with(a),
            Op::Arc(a) => self.arc_with(a),
        }
    }

    /// Rescale to exactly `size` with a Lanczos filter. With `crop`, the centered window with the
    /// target aspect ratio is cut out first so nothing is distorted.
    pub fn resize(&mut self, size: (u32, u32), crop: bool) -> EaselResult<&mut Self> {
        let (w, h) = size;
        self.surface = if crop {
            transform::resize_cropped(&self.surface, w, h)?
        } else {
            transform::resize(&self.surface, w, h)?
        };
        Ok(self)
    }

    /// Clear everything outside a rounded rectangle inset by `offset`.
    pub fn rounded_corners(&mut self, radius: f64, offset: f64) -> EaselResult<&mut Self> {
        let radius = ensure_non_negative("corner radius", radius)?;
        let offset = ensure_non_negative("corner offset", offset)?;
        let (w, h) = self.size();
        let rect = vk::Rect::new(offset, offset, f64::from(w) - offset, f64::from(h) - offset);
        let mask = if rect.width() > 0.0 && rect.height() > 0.0 {
            coverage_mask(w, h, &draw::rect_path(rect, radius))?
        } else {
            vec![0; (w as usize) * (h as usize)]
        };
        apply_alpha_mask(&mut self.surface, &mask)?;
        Ok(self)
    }

    /// Clear everything outside the ellipse inscribed in the surface bounds.
    pub fn circle_image(&mut self) -> EaselResult<&mut Self> {
        let (w, h) = self.size();
        let rect = vk::Rect::new(0.5, 0.5, f64::from(w) - 0.5, f64::from(h) - 0.5);
        let mask = if rect.width() > 0.0 && rect.height() > 0.0 {
            coverage_mask(w, h, &draw::ellipse_path(rect))?
        } else {
            vec![0; (w as usize) * (h as usize)]
        };
        apply_alpha_mask(&mut self.surface, &mask)?;
        Ok(self)
    }

    /// Rotate counter-clockwise about the center.
    pub fn rotate(&mut self, degrees: f64, expand: bool) -> EaselResult<&mut Self> {
        self.surface = transform::rotate(&self.surface, degrees, expand)?;
        Ok(self)
    }

    /// Box blur of radius `amount`, or gaussian blur with standard deviation `amount`.
    pub fn blur(&mut self, mode: BlurMode, amount: f64) -> EaselResult<&mut Self> {
        blur_surface(&mut self.surface, mode, amount)?;
        Ok(self)
    }

    /// Linear interpolation with `other`, which is resized with crop when sizes differ.
    ///
    /// `on_top = false` gives `(1 - alpha) * other + alpha * self`, `on_top = true` gives
    /// `(1 - alpha) * self + alpha * other`.
    pub fn blend(&mut self, other: &Surface, alpha: f64, on_top: bool) -> EaselResult<&mut Self> {
        self.blend_with(other, alpha, on_top)
    }

    /// Alpha-over composite of `other` with its top-left corner at `position`.
    pub fn paste(&mut self, other: &Surface, position: impl Into<Point>) -> EaselResult<&mut Self> {
        self.paste_with(other, position.into())
    }

    /// Draw one line of text.
    pub fn text(&mut self, args: TextArgs) -> EaselResult<&mut Self> {
        self.text_with(&args)
    }

    /// Draw differently colored runs on one line.
    pub fn multi_text(&mut self, args: MultiTextArgs) -> EaselResult<&mut Self> {
        self.multi_text_with(&args)
    }

    /// Draw an axis-aligned, optionally rounded box.
    pub fn rectangle(&mut self, args: RectangleArgs) -> EaselResult<&mut Self> {
        self.rectangle_with(&args)
    }

    /// Draw a horizontal progress bar `percentage` percent of `max_width` wide.
    pub fn bar(&mut self, args: BarArgs) -> EaselResult<&mut Self> {
        self.bar_with(&args)
    }

    /// Draw a circular progress ring starting at 12 o'clock.
    pub fn rounded_bar(&mut self, args: RoundedBarArgs) -> EaselResult<&mut Self> {
        self.rounded_bar_with(&args)
    }

    /// Draw an ellipse inscribed in a box.
    pub fn ellipse(&mut self, args: EllipseArgs) -> EaselResult<&mut Self> {
        self.ellipse_with(&args)
    }

    /// Draw a closed polygon.
    pub fn polygon(&mut self, args: PolygonArgs) -> EaselResult<&mut Self> {
        self.polygon_with(&args)
    }

    /// Draw an elliptical arc; angle 0 points up and angles grow clockwise.
    pub fn arc(&mut self, args: ArcArgs) -> EaselResult<&mut Self> {
        self.arc_with(&args)
    }

    /// PNG encoding of the current surface.
    pub fn image_bytes(&self) -> EaselResult<Vec<u8>> {
        self.encode(ImageFormat::Png)
    }

    /// Encode the current surface as `format`.
    pub fn encode(&self, format: ImageFormat) -> EaselResult<Vec<u8>> {
        self.surface.encode(format)
    }

    /// Write to `path`, picking the format from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> EaselResult<()> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path).map_err(|e| {
            EaselError::invalid_argument(format!(
                "cannot infer image format of '{}': {e}",
                path.display()
            ))
        })?;
        self.save_with_format(path, format)
    }

    /// Write to `path` as `format`.
    pub fn save_with_format(&self, path: impl AsRef<Path>, format: ImageFormat) -> EaselResult<()> {
        let path = path.as_ref();
        let bytes = self.encode(format)?;
        std::fs::write(path, bytes)
            .with_context(|| format!("write image to '{}'", path.display()))?;
        Ok(())
    }

    fn blend_with(&mut self, other: &Surface, alpha: f64, on_top: bool) -> EaselResult<&mut Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(EaselError::invalid_argument(format!(
                "blend alpha must be within [0, 1], got {alpha}"
            )));
        }
        let (w, h) = self.size();
        let resized;
        let other: &Surface = if other.size() == (w, h) {
            other
        } else {
            resized = transform::resize_cropped(other, w, h)?;
            &resized
        };

        let t = alpha as f32;
        let blended = if on_top {
            crossfade_buffers(self.surface.as_raw(), other.as_raw(), t)?
        } else {
            crossfade_buffers(other.as_raw(), self.surface.as_raw(), t)?
        };
        self.surface.raw_mut().copy_from_slice(&blended);
        Ok(self)
    }

    fn paste_with(&mut self, other: &Surface, position: Point) -> EaselResult<&mut Self> {
        let p = ensure_finite_point("paste position", position)?;
        paste_at(
            &mut self.surface,
            other,
            p.x.round() as i64,
            p.y.round() as i64,
        );
        Ok(self)
    }

    fn text_with(&mut self, a: &TextArgs) -> EaselResult<&mut Self> {
        let p = ensure_finite_point("text position", a.position)?;
        let stroke_width = ensure_non_negative("stroke width", a.stroke_width)?;
        let fill = a.fill.to_rgba8()?;
        let stroke = if stroke_width > 0.0 {
            Some((a.stroke_fill.to_rgba8()?, stroke_width))
        } else {
            None
        };

        let mut engine = TextLayoutEngine::new();
        let line = engine.layout_line(&a.text, &a.font, TextBrushRgba8::from(fill))?;
        let x = anchor_x(p.x, line.extent().width, a.align);
        draw_over(&mut self.surface, |ctx| {
            line.draw(ctx, x, p.y, stroke);
            Ok(())
        })?;
        Ok(self)
    }

    fn multi_text_with(&mut self, a: &MultiTextArgs) -> EaselResult<&mut Self> {
        let p = ensure_finite_point("text position", a.position)?;
        if a.runs.is_empty() {
            return Ok(self);
        }

        let mut engine = TextLayoutEngine::new();
        let mut lines = Vec::with_capacity(a.runs.len());
        let mut widths = Vec::with_capacity(a.runs.len());
        for run in &a.runs {
            let line = engine.layout_line(&run.text, &run.font, run.fill.to_rgba8()?.into())?;
            let space = engine
                .layout_line(" ", &run.font, TextBrushRgba8::default())?
                .extent()
                .width;
            widths.push((line.extent().width, space));
            lines.push(line);
        }

        let origins = run_origins(p.x, &widths, a.space_separated, a.align);
        draw_over(&mut self.surface, |ctx| {
            for (line, x) in lines.iter().zip(origins) {
                let top = p.y - line.extent().height / 2.0;
                line.draw(ctx, x, top, None);
            }
            Ok(())
        })?;
        Ok(self)
    }

    fn rectangle_with(&mut self, a: &RectangleArgs) -> EaselResult<&mut Self> {
        let rect = box_rect("rectangle", a.position, a.width, a.height)?;
        let radius = ensure_non_negative("corner radius", a.radius)?;
        let style = shape_style(a.fill.as_ref(), a.outline.as_ref(), a.stroke_width)?;
        draw::rectangle(&mut self.surface, rect, radius, &style)?;
        Ok(self)
    }

    fn bar_with(&mut self, a: &BarArgs) -> EaselResult<&mut Self> {
        let max_width = ensure_positive("bar max_width", a.max_width)?;
        ensure_percentage(a.percentage)?;
        let drawn = bar_fill_width(max_width, a.percentage);
        if drawn <= 0.0 {
            return Ok(self);
        }
        let rect = box_rect("bar", a.position, drawn, a.height)?;
        let radius = ensure_non_negative("corner radius", a.radius)?;
        let style = shape_style(a.fill.as_ref(), a.outline.as_ref(), a.stroke_width)?;
        draw::rectangle(&mut self.surface, rect, radius, &style)?;
        Ok(self)
    }

    fn rounded_bar_with(&mut self, a: &RoundedBarArgs) -> EaselResult<&mut Self> {
        let rect = box_rect("rounded bar", a.position, a.width, a.height)?;
        ensure_percentage(a.percentage)?;
        let stroke_width = ensure_non_negative("stroke width", a.stroke_width)?;
        let (start, sweep) = progress_sweep(a.percentage);
        draw::arc(
            &mut self.surface,
            rect,
            start,
            sweep,
            a.fill.to_rgba8()?,
            stroke_width,
        )?;
        Ok(self)
    }

    fn ellipse_with(&mut self, a: &EllipseArgs) -> EaselResult<&mut Self> {
        let rect = box_rect("ellipse", a.position, a.width, a.height)?;
        let style = shape_style(a.fill.as_ref(), a.outline.as_ref(), a.stroke_width)?;
        draw::ellipse(&mut self.surface, rect, &style)?;
        Ok(self)
    }

    fn polygon_with(&mut self, a: &PolygonArgs) -> EaselResult<&mut Self> {
        if a.points.len() < 3 {
            return Err(EaselError::invalid_geometry(format!(
                "polygon needs at least 3 points, got {}",
                a.points.len()
            )));
        }
        let points = a
            .points
            .iter()
            .map(|p| ensure_finite_point("polygon point", *p).map(to_cpu_point))
            .collect::<EaselResult<Vec<_>>>()?;
        let style = shape_style(a.fill.as_ref(), a.outline.as_ref(), a.stroke_width)?;
        draw::polygon(&mut self.surface, &points, &style)?;
        Ok(self)
    }

    fn arc_with(&mut self, a: &ArcArgs) -> EaselResult<&mut Self> {
        let rect = box_rect("arc", a.position, a.width, a.height)?;
        if !a.start.is_finite() || !a.rotation.is_finite() {
            return Err(EaselError::invalid_geometry(format!(
                "arc angles must be finite, got {} and {}",
                a.start, a.rotation
            )));
        }
        let stroke_width = ensure_non_negative("stroke width", a.stroke_width)?;
        let (start, sweep) = up_arc(a.start, a.rotation);
        draw::arc(
            &mut self.surface,
            rect,
            start,
            sweep,
            a.fill.to_rgba8()?,
            stroke_width,
        )?;
        Ok(self)
    }
}

fn to_cpu_point(p: Point) -> vk::Point {
    vk::Point::new(p.x, p.y)
}

fn box_rect(what: &str, position: Point, width: f64, height: f64) -> EaselResult<vk::Rect> {
    let p = ensure_finite_point(&format!("{what} position"), position)?;
    let w = ensure_positive(&format!("{what} width"), width)?;
    let h = ensure_positive(&format!("{what} height"), height)?;
    Ok(vk::Rect::new(p.x, p.y, p.x + w, p.y + h))
}

fn shape_style(
    fill: Option<&Color>,
    outline: Option<&Color>,
    stroke_width: f64,
) -> EaselResult<ShapeStyle> {
    Ok(ShapeStyle {
        fill: fill.map(Color::to_rgba8).transpose()?,
        outline: outline.map(Color::to_rgba8).transpose()?,
        stroke_width: ensure_non_negative("stroke width", stroke_width)?,
    })
}

fn ensure_percentage(percentage: f64) -> EaselResult<()> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(EaselError::invalid_geometry(format!(
            "percentage must be within [0, 100], got {percentage}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/editor/image_editor.rs"]
mod tests;
