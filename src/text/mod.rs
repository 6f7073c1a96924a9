//! Font handles and single-line text layout.
//!
//! Shaping goes through `parley`; glyph outlines are rasterized by `vello_cpu`.

/// Typeface handles at a fixed pixel size.
pub mod font;
/// Line layout, measurement and glyph drawing.
pub mod layout;
