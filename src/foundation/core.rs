use std::str::FromStr;

use crate::foundation::color::Color;
use crate::foundation::error::{EaselError, EaselResult};

pub use kurbo::{Point, Vec2};

/// Blank surface description: pixel size plus fill color.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Fill color of every pixel.
    #[serde(default)]
    pub color: Color,
}

impl Canvas {
    /// Create a validated canvas with `width, height > 0`.
    pub fn new(width: u32, height: u32, color: impl Into<Color>) -> EaselResult<Self> {
        let canvas = Self {
            width,
            height,
            color: color.into(),
        };
        canvas.validate()?;
        Ok(canvas)
    }

    /// Transparent canvas of the given size.
    pub fn transparent(width: u32, height: u32) -> EaselResult<Self> {
        Self::new(width, height, Color::TRANSPARENT)
    }

    /// `(width, height)` in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Reject zero-sized canvases.
    pub fn validate(&self) -> EaselResult<()> {
        ensure_size(self.width, self.height)
    }
}

/// Horizontal anchor used by the text operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Anchor at the left edge.
    #[default]
    Left,
    /// Anchor at the horizontal middle.
    Center,
    /// Anchor at the right edge.
    Right,
}

impl FromStr for Align {
    type Err = EaselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(EaselError::invalid_argument(format!(
                "unknown align '{other}' (expected left, center or right)"
            ))),
        }
    }
}

/// Blur kernel used by [`crate::Editor::blur`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurMode {
    /// Uniform box kernel; `amount` is the radius in pixels.
    Box,
    /// Gaussian kernel; `amount` is the standard deviation in pixels.
    #[default]
    Gaussian,
}

impl FromStr for BlurMode {
    type Err = EaselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "box" => Ok(Self::Box),
            "gaussian" => Ok(Self::Gaussian),
            other => Err(EaselError::invalid_argument(format!(
                "unknown blur mode '{other}' (expected box or gaussian)"
            ))),
        }
    }
}

pub(crate) fn ensure_size(width: u32, height: u32) -> EaselResult<()> {
    if width == 0 || height == 0 {
        return Err(EaselError::invalid_geometry(format!(
            "size must be positive, got {width}x{height}"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_positive(what: &str, v: f64) -> EaselResult<f64> {
    if !v.is_finite() || v <= 0.0 {
        return Err(EaselError::invalid_geometry(format!(
            "{what} must be finite and > 0, got {v}"
        )));
    }
    Ok(v)
}

pub(crate) fn ensure_non_negative(what: &str, v: f64) -> EaselResult<f64> {
    if !v.is_finite() || v < 0.0 {
        return Err(EaselError::invalid_geometry(format!(
            "{what} must be finite and >= 0, got {v}"
        )));
    }
    Ok(v)
}

pub(crate) fn ensure_finite_point(what: &str, p: Point) -> EaselResult<Point> {
    if !p.x.is_finite() || !p.y.is_finite() {
        return Err(EaselError::invalid_geometry(format!(
            "{what} must be finite, got ({}, {})",
            p.x, p.y
        )));
    }
    Ok(p)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
