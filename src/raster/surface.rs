use std::io::Cursor;

use anyhow::Context;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::foundation::core::{Canvas, ensure_size};
use crate::foundation::error::{EaselError, EaselResult};

/// Owned straight-alpha RGBA8 pixel buffer.
///
/// Every source format is converted to RGBA8 on the way in. Operations that change the
/// dimensions replace the buffer wholesale.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    /// Fully transparent surface.
    pub fn new(width: u32, height: u32) -> EaselResult<Self> {
        Self::filled(width, height, [0, 0, 0, 0])
    }

    /// Surface with every pixel set to `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> EaselResult<Self> {
        ensure_size(width, height)?;
        Ok(Self {
            image: RgbaImage::from_pixel(width, height, image::Rgba(rgba)),
        })
    }

    /// Materialize a [`Canvas`].
    pub fn from_canvas(canvas: &Canvas) -> EaselResult<Self> {
        canvas.validate()?;
        Self::filled(canvas.width, canvas.height, canvas.color.to_rgba8()?)
    }

    /// Adopt an RGBA8 image buffer.
    pub fn from_rgba_image(image: RgbaImage) -> EaselResult<Self> {
        let (w, h) = image.dimensions();
        if w == 0 || h == 0 {
            return Err(EaselError::construction(format!(
                "image has no pixels ({w}x{h})"
            )));
        }
        Ok(Self { image })
    }

    /// Convert any decoded image to RGBA8.
    pub fn from_dynamic(image: DynamicImage) -> EaselResult<Self> {
        Self::from_rgba_image(image.into_rgba8())
    }

    /// Build from raw straight-alpha RGBA8 bytes in row-major order.
    pub fn from_raw(width: u32, height: u32, rgba8: Vec<u8>) -> EaselResult<Self> {
        ensure_size(width, height)?;
        let image = RgbaImage::from_raw(width, height, rgba8).ok_or_else(|| {
            EaselError::construction(format!("rgba buffer does not match {width}x{height}"))
        })?;
        Ok(Self { image })
    }

    /// Decode encoded image bytes (any format the `image` crate detects).
    pub fn decode(bytes: &[u8]) -> EaselResult<Self> {
        let dyn_img = image::load_from_memory(bytes)
            .map_err(|e| EaselError::construction(format!("decode image from memory: {e}")))?;
        Self::from_dynamic(dyn_img)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// `(width, height)` in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Straight-alpha RGBA8 value at `(x, y)`.
    ///
    /// Panics when the coordinate is out of bounds, like [`RgbaImage::get_pixel`].
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Row-major RGBA8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Borrow the underlying image buffer.
    pub fn as_rgba_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Give up ownership of the underlying image buffer.
    pub fn into_rgba_image(self) -> RgbaImage {
        self.image
    }

    /// Stable content hash over dimensions and pixels.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = xxhash_rust::xxh3::Xxh3::new();
        hasher.update(&self.width().to_le_bytes());
        hasher.update(&self.height().to_le_bytes());
        hasher.update(self.as_raw());
        hasher.digest()
    }

    /// Encode to `format` in memory.
    pub fn encode(&self, format: ImageFormat) -> EaselResult<Vec<u8>> {
        let mut buf = Vec::new();
        let mut cursor = Cursor::new(&mut buf);
        // JPEG has no alpha channel.
        let written = if format == ImageFormat::Jpeg {
            DynamicImage::ImageRgba8(self.image.clone())
                .to_rgb8()
                .write_to(&mut cursor, format)
        } else {
            self.image.write_to(&mut cursor, format)
        };
        written.with_context(|| {
            format!(
                "encode {}x{} surface as {format:?}",
                self.width(),
                self.height()
            )
        })?;
        Ok(buf)
    }

    pub(crate) fn raw_mut(&mut self) -> &mut [u8] {
        &mut self.image
    }

    #[cfg(test)]
    pub(crate) fn rgba_image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("fingerprint", &format_args!("{:016x}", self.fingerprint()))
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/surface.rs"]
mod tests;
