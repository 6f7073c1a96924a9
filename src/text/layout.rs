use std::collections::HashMap;

use crate::foundation::core::Align;
use crate::foundation::error::{EaselError, EaselResult};
use crate::raster::pixmap::paint_color;
use crate::text::font::Font;

/// Size of a laid-out single line of text, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    /// Advance width including trailing whitespace.
    pub width: f64,
    /// Line box height.
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<[u8; 4]> for TextBrushRgba8 {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

/// Laid-out line bound to the font it was shaped with.
pub(crate) struct LineLayout {
    layout: parley::Layout<TextBrushRgba8>,
    font: Font,
}

impl LineLayout {
    pub(crate) fn extent(&self) -> TextExtent {
        TextExtent {
            width: f64::from(self.layout.full_width()),
            height: f64::from(self.layout.height()),
        }
    }

    /// Draw glyphs with the line box's top-left corner at `(x, y)`. An outline stroke of
    /// `stroke.1` px around each glyph is painted under the fill.
    pub(crate) fn draw(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        x: f64,
        y: f64,
        stroke: Option<([u8; 4], f64)>,
    ) {
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, y)));
        for line in self.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let size = run.run().font_size();
                let glyphs = || {
                    run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: g.x,
                        y: g.y,
                    })
                };
                if let Some((color, width)) = stroke.filter(|(_, w)| *w > 0.0) {
                    ctx.set_paint(paint_color(color));
                    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width * 2.0));
                    ctx.glyph_run(self.font.render_data())
                        .font_size(size)
                        .stroke_glyphs(glyphs());
                }
                let brush = run.style().brush;
                ctx.set_paint(paint_color([brush.r, brush.g, brush.b, brush.a]));
                ctx.glyph_run(self.font.render_data())
                    .font_size(size)
                    .fill_glyphs(glyphs());
            }
        }
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }
}

/// Stateful helper for building Parley layouts from [`Font`] handles.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    faces: HashMap<u64, RegisteredFace>,
}

/// Family name and attributes that select one registered face out of its family.
#[derive(Clone, Debug)]
struct RegisteredFace {
    family: String,
    weight: parley::style::FontWeight,
    style: parley::style::FontStyle,
    width: parley::style::FontWidth,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            faces: HashMap::new(),
        }
    }

    /// Shape `text` as one unbroken line.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        font: &Font,
        brush: TextBrushRgba8,
    ) -> EaselResult<LineLayout> {
        let face = self.register(font)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(face.family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontWeight(face.weight));
        builder.push_default(parley::style::StyleProperty::FontStyle(face.style));
        builder.push_default(parley::style::StyleProperty::FontWidth(face.width));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size()));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        Ok(LineLayout {
            layout,
            font: font.clone(),
        })
    }

    fn register(&mut self, font: &Font) -> EaselResult<RegisteredFace> {
        if let Some(face) = self.faces.get(&font.id()) {
            return Ok(face.clone());
        }
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes().to_vec()), None);
        let (family_id, info) = families
            .first()
            .and_then(|(id, infos)| infos.first().map(|info| (*id, info.clone())))
            .ok_or_else(|| {
                EaselError::invalid_argument("no font families registered from font bytes")
            })?;

        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| EaselError::invalid_argument("registered font family has no name"))?
            .to_string();
        let face = RegisteredFace {
            family,
            weight: info.weight(),
            style: info.style(),
            width: info.width(),
        };
        self.faces.insert(font.id(), face.clone());
        Ok(face)
    }
}

/// Measure `text` set in `font` as a single line.
pub fn measure(text: &str, font: &Font) -> EaselResult<TextExtent> {
    let mut engine = TextLayoutEngine::new();
    Ok(engine
        .layout_line(text, font, TextBrushRgba8::default())?
        .extent())
}

/// Left edge of a run of `width` anchored at `x`.
pub(crate) fn anchor_x(x: f64, width: f64, align: Align) -> f64 {
    match align {
        Align::Left => x,
        Align::Center => x - width / 2.0,
        Align::Right => x - width,
    }
}

/// Left edges of consecutive runs given `(run width, space width)` pairs. With `spaced` every run
/// is followed by one space of its own font.
pub(crate) fn run_origins(x: f64, runs: &[(f64, f64)], spaced: bool, align: Align) -> Vec<f64> {
    let advance = |(width, space): (f64, f64)| if spaced { width + space } else { width };
    let total: f64 = runs.iter().copied().map(advance).sum();

    let mut cursor = anchor_x(x, total, align);
    let mut out = Vec::with_capacity(runs.len());
    for &run in runs {
        out.push(cursor);
        cursor += advance(run);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
