use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::foundation::color::Color;
use crate::foundation::core::{Align, BlurMode, Point};
use crate::foundation::error::{EaselError, EaselResult};
use crate::raster::surface::Surface;
use crate::text::font::Font;

/// Name of an editor operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// `resize`
    Resize,
    /// `rounded_corners`
    RoundedCorners,
    /// `circle_image`
    CircleImage,
    /// `rotate`
    Rotate,
    /// `blur`
    Blur,
    /// `blend`
    Blend,
    /// `paste`
    Paste,
    /// `text`
    Text,
    /// `multi_text`
    MultiText,
    /// `rectangle`
    Rectangle,
    /// `bar`
    Bar,
    /// `rounded_bar`
    RoundedBar,
    /// `ellipse`
    Ellipse,
    /// `polygon`
    Polygon,
    /// `arc`
    Arc,
}

impl OpKind {
    /// Every operation, in declaration order.
    pub const ALL: [OpKind; 15] = [
        Self::Resize,
        Self::RoundedCorners,
        Self::CircleImage,
        Self::Rotate,
        Self::Blur,
        Self::Blend,
        Self::Paste,
        Self::Text,
        Self::MultiText,
        Self::Rectangle,
        Self::Bar,
        Self::RoundedBar,
        Self::Ellipse,
        Self::Polygon,
        Self::Arc,
    ];

    /// Snake-case operation name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Resize => "resize",
            Self::RoundedCorners => "rounded_corners",
            Self::CircleImage => "circle_image",
            Self::Rotate => "rotate",
            Self::Blur => "blur",
            Self::Blend => "blend",
            Self::Paste => "paste",
            Self::Text => "text",
            Self::MultiText => "multi_text",
            Self::Rectangle => "rectangle",
            Self::Bar => "bar",
            Self::RoundedBar => "rounded_bar",
            Self::Ellipse => "ellipse",
            Self::Polygon => "polygon",
            Self::Arc => "arc",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpKind {
    type Err = EaselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| EaselError::unknown_operation(s))
    }
}

/// Named, typed argument of an operation.
///
/// Used to build operations by name and to shallow-merge new values into existing ones. Each
/// variant has exactly one parameter name, see [`Param::name`].
#[derive(Clone, Debug, PartialEq)]
pub enum Param {
    /// `size`: target width and height.
    Size(u32, u32),
    /// `crop`: keep the aspect ratio by cropping before resizing.
    Crop(bool),
    /// `radius`: corner radius.
    Radius(f64),
    /// `offset`: inset of the rounded-corner mask.
    Offset(f64),
    /// `degrees`: counter-clockwise rotation.
    Degrees(f64),
    /// `expand`: grow to the rotated bounds.
    Expand(bool),
    /// `mode`: blur kernel.
    Mode(BlurMode),
    /// `amount`: blur strength.
    Amount(f64),
    /// `image`: second image for blend and paste.
    Image(Arc<Surface>),
    /// `alpha`: blend weight in `[0, 1]`.
    Alpha(f64),
    /// `on_top`: weight the other image instead of this one.
    OnTop(bool),
    /// `position`: anchor point.
    Position(Point),
    /// `text`: the string to draw.
    Text(String),
    /// `font`: typeface and size.
    Font(Font),
    /// `fill`: fill or ink color.
    Fill(Color),
    /// `align`: horizontal text anchor.
    Align(Align),
    /// `stroke_width`: outline width in pixels.
    StrokeWidth(f64),
    /// `stroke_fill`: text outline color.
    StrokeFill(Color),
    /// `runs`: colored text segments.
    Runs(Vec<TextRun>),
    /// `space_separated`: follow every run with a space.
    SpaceSeparated(bool),
    /// `width`: box width.
    Width(f64),
    /// `height`: box height.
    Height(f64),
    /// `outline`: outline color.
    Outline(Color),
    /// `max_width`: width of a full bar.
    MaxWidth(f64),
    /// `percentage`: progress on a 0..=100 scale.
    Percentage(f64),
    /// `points`: polygon vertices.
    Points(Vec<Point>),
    /// `start`: arc start angle, 0 pointing up.
    Start(f64),
    /// `rotation`: arc end angle, 0 pointing up.
    Rotation(f64),
}

impl Param {
    /// Parameter name as used by operation calls.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Size(..) => "size",
            Self::Crop(_) => "crop",
            Self::Radius(_) => "radius",
            Self::Offset(_) => "offset",
            Self::Degrees(_) => "degrees",
            Self::Expand(_) => "expand",
            Self::Mode(_) => "mode",
            Self::Amount(_) => "amount",
            Self::Image(_) => "image",
            Self::Alpha(_) => "alpha",
            Self::OnTop(_) => "on_top",
            Self::Position(_) => "position",
            Self::Text(_) => "text",
            Self::Font(_) => "font",
            Self::Fill(_) => "fill",
            Self::Align(_) => "align",
            Self::StrokeWidth(_) => "stroke_width",
            Self::StrokeFill(_) => "stroke_fill",
            Self::Runs(_) => "runs",
            Self::SpaceSeparated(_) => "space_separated",
            Self::Width(_) => "width",
            Self::Height(_) => "height",
            Self::Outline(_) => "outline",
            Self::MaxWidth(_) => "max_width",
            Self::Percentage(_) => "percentage",
            Self::Points(_) => "points",
            Self::Start(_) => "start",
            Self::Rotation(_) => "rotation",
        }
    }

    fn into_f64(self) -> Option<f64> {
        match self {
            Self::Radius(v)
            | Self::Offset(v)
            | Self::Degrees(v)
            | Self::Amount(v)
            | Self::Alpha(v)
            | Self::StrokeWidth(v)
            | Self::Width(v)
            | Self::Height(v)
            | Self::MaxWidth(v)
            | Self::Percentage(v)
            | Self::Start(v)
            | Self::Rotation(v) => Some(v),
            _ => None,
        }
    }

    fn into_size(self) -> Option<(u32, u32)> {
        match self {
            Self::Size(w, h) => Some((w, h)),
            _ => None,
        }
    }

    fn into_point(self) -> Option<Point> {
        match self {
            Self::Position(p) => Some(p),
            _ => None,
        }
    }

    fn into_image(self) -> Option<Arc<Surface>> {
        match self {
            Self::Image(s) => Some(s),
            _ => None,
        }
    }

    fn into_text(self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    fn into_font(self) -> Option<Font> {
        match self {
            Self::Font(f) => Some(f),
            _ => None,
        }
    }

    fn into_runs(self) -> Option<Vec<TextRun>> {
        match self {
            Self::Runs(r) => Some(r),
            _ => None,
        }
    }

    fn into_points(self) -> Option<Vec<Point>> {
        match self {
            Self::Points(p) => Some(p),
            _ => None,
        }
    }
}

/// One colored segment of [`MultiTextArgs`].
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    /// Text of the segment.
    pub text: String,
    /// Font of the segment.
    pub font: Font,
    /// Ink color, black by default.
    pub fill: Color,
}

impl TextRun {
    /// Black run of `text` in `font`.
    pub fn new(text: impl Into<String>, font: &Font) -> Self {
        Self {
            text: text.into(),
            font: font.clone(),
            fill: Color::BLACK,
        }
    }

    /// Set the ink color.
    pub fn fill(mut self, fill: impl Into<Color>) -> Self {
        self.fill = fill.into();
        self
    }
}

/// Arguments of [`crate::Editor::resize`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeArgs {
    /// Output width and height.
    pub size: (u32, u32),
    /// Crop to the target aspect ratio first.
    pub crop: bool,
}

impl ResizeArgs {
    /// Plain rescale to `size`.
    pub fn new(size: (u32, u32)) -> Self {
        Self { size, crop: false }
    }

    /// Crop to the target aspect ratio before scaling.
    pub fn crop(mut self, crop: bool) -> Self {
        self.crop = crop;
        self
    }
}

/// Arguments of [`crate::Editor::rounded_corners`].
#[derive(Clone, Debug, PartialEq)]
pub struct RoundedCornersArgs {
    /// Corner radius, 10 by default.
    pub radius: f64,
    /// Mask inset from every edge, 2 by default.
    pub offset: f64,
}

impl Default for RoundedCornersArgs {
    fn default() -> Self {
        Self {
            radius: 10.0,
            offset: 2.0,
        }
    }
}

/// Arguments of [`crate::Editor::rotate`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RotateArgs {
    /// Counter-clockwise angle in degrees.
    pub degrees: f64,
    /// Grow the surface to the rotated bounds.
    pub expand: bool,
}

/// Arguments of [`crate::Editor::blur`].
#[derive(Clone, Debug, PartialEq)]
pub struct BlurArgs {
    /// Kernel shape, gaussian by default.
    pub mode: BlurMode,
    /// Radius (box) or standard deviation (gaussian), 1 by default.
    pub amount: f64,
}

impl Default for BlurArgs {
    fn default() -> Self {
        Self {
            mode: BlurMode::Gaussian,
            amount: 1.0,
        }
    }
}

/// Arguments of [`crate::Editor::blend`].
#[derive(Clone, Debug, PartialEq)]
pub struct BlendArgs {
    /// The other image; resized with crop when sizes differ.
    pub image: Arc<Surface>,
    /// Interpolation weight in `[0, 1]`.
    pub alpha: f64,
    /// Weight the other image by `alpha` instead of this one.
    pub on_top: bool,
}

impl BlendArgs {
    /// Blend with `image` at `alpha = 0`.
    pub fn new(image: impl Into<Arc<Surface>>) -> Self {
        Self {
            image: image.into(),
            alpha: 0.0,
            on_top: false,
        }
    }

    /// Set the interpolation weight.
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Put the other image on top.
    pub fn on_top(mut self, on_top: bool) -> Self {
        self.on_top = on_top;
        self
    }
}

/// Arguments of [`crate::Editor::paste`].
#[derive(Clone, Debug, PartialEq)]
pub struct PasteArgs {
    /// Image composited over this one.
    pub image: Arc<Surface>,
    /// Top-left corner; rounded to whole pixels.
    pub position: Point,
}

impl PasteArgs {
    /// Paste `image` with its top-left corner at `position`.
    pub fn new(image: impl Into<Arc<Surface>>, position: impl Into<Point>) -> Self {
        Self {
            image: image.into(),
            position: position.into(),
        }
    }
}

/// Arguments of [`crate::Editor::text`].
#[derive(Clone, Debug, PartialEq)]
pub struct TextArgs {
    /// Anchor point; the top edge of the line box sits at `position.y`.
    pub position: Point,
    /// Text to draw on one line.
    pub text: String,
    /// Typeface and size.
    pub font: Font,
    /// Ink color, black by default.
    pub fill: Color,
    /// Horizontal anchor.
    pub align: Align,
    /// Outline width; 0 draws no outline.
    pub stroke_width: f64,
    /// Outline color, black by default.
    pub stroke_fill: Color,
}

impl TextArgs {
    /// Black, left-anchored, unstroked text.
    pub fn new(position: impl Into<Point>, text: impl Into<String>, font: &Font) -> Self {
        Self {
            position: position.into(),
            text: text.into(),
            font: font.clone(),
            fill: Color::BLACK,
            align: Align::Left,
            stroke_width: 0.0,
            stroke_fill: Color::BLACK,
        }
    }

    /// Set the ink color.
    pub fn fill(mut self, fill: impl Into<Color>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Set the horizontal anchor.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Draw an outline of `width` pixels in `color` under the glyphs.
    pub fn stroke(mut self, width: f64, color: impl Into<Color>) -> Self {
        self.stroke_width = width;
        self.stroke_fill = color.into();
        self
    }
}

/// Arguments of [`crate::Editor::multi_text`].
#[derive(Clone, Debug, PartialEq)]
pub struct MultiTextArgs {
    /// Anchor; every run is vertically centered on `position.y`.
    pub position: Point,
    /// Segments drawn left to right.
    pub runs: Vec<TextRun>,
    /// Follow each run with one space of its font, true by default.
    pub space_separated: bool,
    /// Horizontal anchor of the whole line.
    pub align: Align,
}

impl MultiTextArgs {
    /// Left-anchored, space-separated runs.
    pub fn new(position: impl Into<Point>, runs: impl IntoIterator<Item = TextRun>) -> Self {
        Self {
            position: position.into(),
            runs: runs.into_iter().collect(),
            space_separated: true,
            align: Align::Left,
        }
    }

    /// Toggle the separating space.
    pub fn space_separated(mut self, space_separated: bool) -> Self {
        self.space_separated = space_separated;
        self
    }

    /// Set the horizontal anchor.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// Arguments of [`crate::Editor::rectangle`].
#[derive(Clone, Debug, PartialEq)]
pub struct RectangleArgs {
    /// Top-left corner.
    pub position: Point,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
    /// Interior color; none leaves the interior untouched.
    pub fill: Option<Color>,
    /// Border color; none draws no border.
    pub outline: Option<Color>,
    /// Border width, 1 by default.
    pub stroke_width: f64,
    /// Corner radius; 0 gives square corners.
    pub radius: f64,
}

impl RectangleArgs {
    /// Unfilled, unoutlined box.
    pub fn new(position: impl Into<Point>, width: f64, height: f64) -> Self {
        Self {
            position: position.into(),
            width,
            height,
            fill: None,
            outline: None,
            stroke_width: 1.0,
            radius: 0.0,
        }
    }

    /// Set the interior color.
    pub fn fill(mut self, fill: impl Into<Color>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Set the border color.
    pub fn outline(mut self, outline: impl Into<Color>) -> Self {
        self.outline = Some(outline.into());
        self
    }

    /// Set the border width.
    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Set the corner radius.
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

/// Arguments of [`crate::Editor::bar`].
#[derive(Clone, Debug, PartialEq)]
pub struct BarArgs {
    /// Top-left corner.
    pub position: Point,
    /// Width at 100%.
    pub max_width: f64,
    /// Bar height.
    pub height: f64,
    /// Filled share on a 0..=100 scale, 1 by default.
    pub percentage: f64,
    /// Interior color.
    pub fill: Option<Color>,
    /// Border color.
    pub outline: Option<Color>,
    /// Border width, 1 by default.
    pub stroke_width: f64,
    /// Corner radius.
    pub radius: f64,
}

impl BarArgs {
    /// Bar at 1%.
    pub fn new(position: impl Into<Point>, max_width: f64, height: f64) -> Self {
        Self {
            position: position.into(),
            max_width,
            height,
            percentage: 1.0,
            fill: None,
            outline: None,
            stroke_width: 1.0,
            radius: 0.0,
        }
    }

    /// Set the filled share.
    pub fn percentage(mut self, percentage: f64) -> Self {
        self.percentage = percentage;
        self
    }

    /// Set the interior color.
    pub fn fill(mut self, fill: impl Into<Color>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Set the border color.
    pub fn outline(mut self, outline: impl Into<Color>) -> Self {
        self.outline = Some(outline.into());
        self
    }

    /// Set the border width.
    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Set the corner radius.
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

/// Arguments of [`crate::Editor::rounded_bar`].
#[derive(Clone, Debug, PartialEq)]
pub struct RoundedBarArgs {
    /// Top-left corner of the bounding box.
    pub position: Point,
    /// Bounding box width.
    pub width: f64,
    /// Bounding box height.
    pub height: f64,
    /// Progress on a 0..=100 scale.
    pub percentage: f64,
    /// Ring color, white by default.
    pub fill: Color,
    /// Ring thickness, 1 by default.
    pub stroke_width: f64,
}

impl RoundedBarArgs {
    /// White 1px ring at `percentage`.
    pub fn new(position: impl Into<Point>, width: f64, height: f64, percentage: f64) -> Self {
        Self {
            position: position.into(),
            width,
            height,
            percentage,
            fill: Color::WHITE,
            stroke_width: 1.0,
        }
    }

    /// Set the ring color.
    pub fn fill(mut self, fill: impl Into<Color>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Set the ring thickness.
    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

/// Arguments of [`crate::Editor::ellipse`].
#[derive(Clone, Debug, PartialEq)]
pub struct EllipseArgs {
    /// Top-left corner of the bounding box.
    pub position: Point,
    /// Bounding box width.
    pub width: f64,
    /// Bounding box height.
    pub height: f64,
    /// Interior color.
    pub fill: Option<Color>,
    /// Border color.
    pub outline: Option<Color>,
    /// Border width, 1 by default.
    pub stroke_width: f64,
}

impl EllipseArgs {
    /// Unfilled, unoutlined ellipse.
    pub fn new(position: impl Into<Point>, width: f64, height: f64) -> Self {
        Self {
            position: position.into(),
            width,
            height,
            fill: None,
            outline: None,
            stroke_width: 1.0,
        }
    }

    /// Set the interior color.
    pub fn fill(mut self, fill: impl Into<Color>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Set the border color.
    pub fn outline(mut self, outline: impl Into<Color>) -> Self {
        self.outline = Some(outline.into());
        self
    }

    /// Set the border width.
    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

/// Arguments of [`crate::Editor::polygon`].
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonArgs {
    /// Vertices, at least three.
    pub points: Vec<Point>,
    /// Interior color.
    pub fill: Option<Color>,
    /// Border color.
    pub outline: Option<Color>,
    /// Border width, 1 by default.
    pub stroke_width: f64,
}

impl PolygonArgs {
    /// Unfilled, unoutlined polygon.
    pub fn new(points: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            fill: None,
            outline: None,
            stroke_width: 1.0,
        }
    }

    /// Set the interior color.
    pub fn fill(mut self, fill: impl Into<Color>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Set the border color.
    pub fn outline(mut self, outline: impl Into<Color>) -> Self {
        self.outline = Some(outline.into());
        self
    }

    /// Set the border width.
    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

/// Arguments of [`crate::Editor::arc`].
#[derive(Clone, Debug, PartialEq)]
pub struct ArcArgs {
    /// Top-left corner of the bounding box.
    pub position: Point,
    /// Bounding box width.
    pub width: f64,
    /// Bounding box height.
    pub height: f64,
    /// Start angle in degrees, 0 up, clockwise positive.
    pub start: f64,
    /// End angle in degrees, 0 up, clockwise positive.
    pub rotation: f64,
    /// Stroke color, white by default.
    pub fill: Color,
    /// Stroke thickness, 1 by default.
    pub stroke_width: f64,
}

impl ArcArgs {
    /// White 1px arc from `start` to `rotation`.
    pub fn new(
        position: impl Into<Point>,
        width: f64,
        height: f64,
        start: f64,
        rotation: f64,
    ) -> Self {
        Self {
            position: position.into(),
            width,
            height,
            start,
            rotation,
            fill: Color::WHITE,
            stroke_width: 1.0,
        }
    }

    /// Set the stroke color.
    pub fn fill(mut self, fill: impl Into<Color>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Set the stroke thickness.
    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }
}

/// One editor operation with its arguments.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    /// See [`crate::Editor::resize`].
    Resize(ResizeArgs),
    /// See [`crate::Editor::rounded_corners`].
    RoundedCorners(RoundedCornersArgs),
    /// See [`crate::Editor::circle_image`].
    CircleImage,
    /// See [`crate::Editor::rotate`].
    Rotate(RotateArgs),
    /// See [`crate::Editor::blur`].
    Blur(BlurArgs),
    /// See [`crate::Editor::blend`].
    Blend(BlendArgs),
    /// See [`crate::Editor::paste`].
    Paste(PasteArgs),
    /// See [`crate::Editor::text`].
    Text(TextArgs),
    /// See [`crate::Editor::multi_text`].
    MultiText(MultiTextArgs),
    /// See [`crate::Editor::rectangle`].
    Rectangle(RectangleArgs),
    /// See [`crate::Editor::bar`].
    Bar(BarArgs),
    /// See [`crate::Editor::rounded_bar`].
    RoundedBar(RoundedBarArgs),
    /// See [`crate::Editor::ellipse`].
    Ellipse(EllipseArgs),
    /// See [`crate::Editor::polygon`].
    Polygon(PolygonArgs),
    /// See [`crate::Editor::arc`].
    Arc(ArcArgs),
}

macro_rules! op_from_args {
    ($($args:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$args> for Op {
                fn from(args: $args) -> Self {
                    Op::$variant(args)
                }
            }
        )*
    };
}

op_from_args! {
    ResizeArgs => Resize,
    RoundedCornersArgs => RoundedCorners,
    RotateArgs => Rotate,
    BlurArgs => Blur,
    BlendArgs => Blend,
    PasteArgs => Paste,
    TextArgs => Text,
    MultiTextArgs => MultiText,
    RectangleArgs => Rectangle,
    BarArgs => Bar,
    RoundedBarArgs => RoundedBar,
    EllipseArgs => Ellipse,
    PolygonArgs => Polygon,
    ArcArgs => Arc,
}

impl Op {
    /// Name of this operation.
    pub fn kind(&self) -> OpKind {
        match self {
            Self::Resize(_) => OpKind::Resize,
            Self::RoundedCorners(_) => OpKind::RoundedCorners,
            Self::CircleImage => OpKind::CircleImage,
            Self::Rotate(_) => OpKind::Rotate,
            Self::Blur(_) => OpKind::Blur,
            Self::Blend(_) => OpKind::Blend,
            Self::Paste(_) => OpKind::Paste,
            Self::Text(_) => OpKind::Text,
            Self::MultiText(_) => OpKind::MultiText,
            Self::Rectangle(_) => OpKind::Rectangle,
            Self::Bar(_) => OpKind::Bar,
            Self::RoundedBar(_) => OpKind::RoundedBar,
            Self::Ellipse(_) => OpKind::Ellipse,
            Self::Polygon(_) => OpKind::Polygon,
            Self::Arc(_) => OpKind::Arc,
        }
    }

    /// Resolve an operation name and build it from `params`.
    pub fn from_name(name: &str, params: impl IntoIterator<Item = Param>) -> EaselResult<Self> {
        Self::from_params(name.parse()?, params)
    }

    /// Build `kind` from named parameters.
    ///
    /// When a name repeats, the last value wins. Missing required parameters and parameters the
    /// operation does not take are [`EaselError::InvalidArgument`].
    pub fn from_params(kind: OpKind, params: impl IntoIterator<Item = Param>) -> EaselResult<Self> {
        let mut bag = ParamBag {
            kind,
            params: params.into_iter().collect(),
        };
        let mut op = match kind {
            OpKind::Resize => Self::Resize(ResizeArgs::new(bag.require("size", Param::into_size)?)),
            OpKind::RoundedCorners => Self::RoundedCorners(RoundedCornersArgs::default()),
            OpKind::CircleImage => Self::CircleImage,
            OpKind::Rotate => Self::Rotate(RotateArgs::default()),
            OpKind::Blur => Self::Blur(BlurArgs::default()),
            OpKind::Blend => Self::Blend(BlendArgs::new(bag.require("image", Param::into_image)?)),
            OpKind::Paste => Self::Paste(PasteArgs::new(
                bag.require("image", Param::into_image)?,
                bag.require("position", Param::into_point)?,
            )),
            OpKind::Text => {
                let position = bag.require("position", Param::into_point)?;
                let text = bag.require("text", Param::into_text)?;
                let font = bag.require("font", Param::into_font)?;
                Self::Text(TextArgs::new(position, text, &font))
            }
            OpKind::MultiText => Self::MultiText(MultiTextArgs::new(
                bag.require("position", Param::into_point)?,
                bag.require("runs", Param::into_runs)?,
            )),
            OpKind::Rectangle => Self::Rectangle(RectangleArgs::new(
                bag.require("position", Param::into_point)?,
                bag.require("width", Param::into_f64)?,
                bag.require("height", Param::into_f64)?,
            )),
            OpKind::Bar => Self::Bar(BarArgs::new(
                bag.require("position", Param::into_point)?,
                bag.require("max_width", Param::into_f64)?,
                bag.require("height", Param::into_f64)?,
            )),
            OpKind::RoundedBar => Self::RoundedBar(RoundedBarArgs::new(
                bag.require("position", Param::into_point)?,
                bag.require("width", Param::into_f64)?,
                bag.require("height", Param::into_f64)?,
                bag.require("percentage", Param::into_f64)?,
            )),
            OpKind::Ellipse => Self::Ellipse(EllipseArgs::new(
                bag.require("position", Param::into_point)?,
                bag.require("width", Param::into_f64)?,
                bag.require("height", Param::into_f64)?,
            )),
            OpKind::Polygon => Self::Polygon(PolygonArgs::new(
                bag.require("points", Param::into_points)?,
            )),
            OpKind::Arc => Self::Arc(ArcArgs::new(
                bag.require("position", Param::into_point)?,
                bag.require("width", Param::into_f64)?,
                bag.require("height", Param::into_f64)?,
                bag.require("start", Param::into_f64)?,
                bag.require("rotation", Param::into_f64)?,
            )),
        };
        op.merge(bag.params)?;
        Ok(op)
    }

    /// Shallow merge: every provided parameter overwrites the current value, the rest are kept.
    pub fn merge(&mut self, params: impl IntoIterator<Item = Param>) -> EaselResult<()> {
        for p in params {
            self.set(p)?;
        }
        Ok(())
    }

    /// Overwrite one parameter.
    pub fn set(&mut self, param: Param) -> EaselResult<()> {
        match (&mut *self, param) {
            (Self::Resize(a), Param::Size(w, h)) => a.size = (w, h),
            (Self::Resize(a), Param::Crop(v)) => a.crop = v,

            (Self::RoundedCorners(a), Param::Radius(v)) => a.radius = v,
            (Self::RoundedCorners(a), Param::Offset(v)) => a.offset = v,

            (Self::Rotate(a), Param::Degrees(v)) => a.degrees = v,
            (Self::Rotate(a), Param::Expand(v)) => a.expand = v,

            (Self::Blur(a), Param::Mode(v)) => a.mode = v,
            (Self::Blur(a), Param::Amount(v)) => a.amount = v,

            (Self::Blend(a), Param::Image(v)) => a.image = v,
            (Self::Blend(a), Param::Alpha(v)) => a.alpha = v,
            (Self::Blend(a), Param::OnTop(v)) => a.on_top = v,

            (Self::Paste(a), Param::Image(v)) => a.image = v,
            (Self::Paste(a), Param::Position(v)) => a.position = v,

            (Self::Text(a), Param::Position(v)) => a.position = v,
            (Self::Text(a), Param::Text(v)) => a.text = v,
            (Self::Text(a), Param::Font(v)) => a.font = v,
            (Self::Text(a), Param::Fill(v)) => a.fill = v,
            (Self::Text(a), Param::Align(v)) => a.align = v,
            (Self::Text(a), Param::StrokeWidth(v)) => a.stroke_width = v,
            (Self::Text(a), Param::StrokeFill(v)) => a.stroke_fill = v,

            (Self::MultiText(a), Param::Position(v)) => a.position = v,
            (Self::MultiText(a), Param::Runs(v)) => a.runs = v,
            (Self::MultiText(a), Param::SpaceSeparated(v)) => a.space_separated = v,
            (Self::MultiText(a), Param::Align(v)) => a.align = v,

            (Self::Rectangle(a), Param::Position(v)) => a.position = v,
            (Self::Rectangle(a), Param::Width(v)) => a.width = v,
            (Self::Rectangle(a), Param::Height(v)) => a.height = v,
            (Self::Rectangle(a), Param::Fill(v)) => a.fill = Some(v),
            (Self::Rectangle(a), Param::Outline(v)) => a.outline = Some(v),
            (Self::Rectangle(a), Param::StrokeWidth(v)) => a.stroke_width = v,
            (Self::Rectangle(a), Param::Radius(v)) => a.radius = v,

            (Self::Bar(a), Param::Position(v)) => a.position = v,
            (Self::Bar(a), Param::MaxWidth(v)) => a.max_width = v,
            (Self::Bar(a), Param::Height(v)) => a.height = v,
            (Self::Bar(a), Param::Percentage(v)) => a.percentage = v,
            (Self::Bar(a), Param::Fill(v)) => a.fill = Some(v),
            (Self::Bar(a), Param::Outline(v)) => a.outline = Some(v),
            (Self::Bar(a), Param::StrokeWidth(v)) => a.stroke_width = v,
            (Self::Bar(a), Param::Radius(v)) => a.radius = v,

            (Self::RoundedBar(a), Param::Position(v)) => a.position = v,
            (Self::RoundedBar(a), Param::Width(v)) => a.width = v,
            (Self::RoundedBar(a), Param::Height(v)) => a.height = v,
            (Self::RoundedBar(a), Param::Percentage(v)) => a.percentage = v,
            (Self::RoundedBar(a), Param::Fill(v)) => a.fill = v,
            (Self::RoundedBar(a), Param::StrokeWidth(v)) => a.stroke_width = v,

            (Self::Ellipse(a), Param::Position(v)) => a.position = v,
            (Self::Ellipse(a), Param::Width(v)) => a.width = v,
            (Self::Ellipse(a), Param::Height(v)) => a.height = v,
            (Self::Ellipse(a), Param::Fill(v)) => a.fill = Some(v),
            (Self::Ellipse(a), Param::Outline(v)) => a.outline = Some(v),
            (Self::Ellipse(a), Param::StrokeWidth(v)) => a.stroke_width = v,

            (Self::Polygon(a), Param::Points(v)) => a.points = v,
            (Self::Polygon(a), Param::Fill(v)) => a.fill = Some(v),
            (Self::Polygon(a), Param::Outline(v)) => a.outline = Some(v),
            (Self::Polygon(a), Param::StrokeWidth(v)) => a.stroke_width = v,

            (Self::Arc(a), Param::Position(v)) => a.position = v,
            (Self::Arc(a), Param::Width(v)) => a.width = v,
            (Self::Arc(a), Param::Height(v)) => a.height = v,
            (Self::Arc(a), Param::Start(v)) => a.start = v,
            (Self::Arc(a), Param::Rotation(v)) => a.rotation = v,
            (Self::Arc(a), Param::Fill(v)) => a.fill = v,
            (Self::Arc(a), Param::StrokeWidth(v)) => a.stroke_width = v,

            (op, p) => {
                return Err(EaselError::invalid_argument(format!(
                    "operation '{}' takes no parameter '{}'",
                    op.kind(),
                    p.name()
                )));
            }
        }
        Ok(())
    }
}

struct ParamBag {
    kind: OpKind,
    params: Vec<Param>,
}

impl ParamBag {
    /// Remove every value named `name`, returning the last one.
    fn take(&mut self, name: &str) -> Option<Param> {
        let idx = self.params.iter().rposition(|p| p.name() == name)?;
        let last = self.params.remove(idx);
        self.params.retain(|p| p.name() != name);
        Some(last)
    }

    fn require<T>(&mut self, name: &'static str, pick: fn(Param) -> Option<T>) -> EaselResult<T> {
        let kind = self.kind;
        self.take(name).and_then(pick).ok_or_else(|| {
            EaselError::invalid_argument(format!(
                "operation '{kind}' requires parameter '{name}'"
            ))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/ops.rs"]
mod tests;
