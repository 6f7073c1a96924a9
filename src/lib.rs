//! Easel is a programmatic 2D image composition library.
//!
//! It is built for generated graphics such as profile cards, banners and progress widgets.
//! Three entry points share one operation vocabulary:
//!
//! - [`Editor`]: mutate one RGBA surface in place with chainable operations
//! - [`Workspace`]: retained layers of named components, composited by [`Workspace::generate`]
//! - [`InstructionQueue`]: record operations now, replay them on a worker pool later
//!
//! [`FrameSequence`] applies the same operations to animation frames and encodes GIFs.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod editor;
mod foundation;
mod frames;
mod queue;
mod raster;
mod text;
mod workspace;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{Align, BlurMode, Canvas, Point, Vec2};
pub use crate::foundation::error::{EaselError, EaselResult};

pub use crate::raster::surface::Surface;
pub use crate::text::font::{Font, FontVariant};
pub use crate::text::layout::{TextExtent, measure};

pub use crate::editor::image_editor::Editor;
pub use crate::editor::ops::{
    ArcArgs, BarArgs, BlendArgs, BlurArgs, EllipseArgs, MultiTextArgs, Op, OpKind, Param,
    PasteArgs, PolygonArgs, RectangleArgs, ResizeArgs, RotateArgs, RoundedBarArgs,
    RoundedCornersArgs, TextArgs, TextRun,
};
pub use crate::editor::source::ImageSource;

pub use crate::frames::sequence::FrameSequence;
pub use crate::queue::instruction::Instruction;
pub use crate::queue::opts::{QueueOpts, WORKER_THREADS_ENV};
pub use crate::queue::replay::InstructionQueue;
pub use crate::workspace::model::{Component, ComponentOp, Layer, Workspace};

/// Re-exported so callers can pick output encodings without depending on `image` directly.
pub use image::ImageFormat;
