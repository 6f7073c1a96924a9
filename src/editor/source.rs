use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage};

use crate::editor::image_editor::Editor;
use crate::foundation::core::Canvas;
use crate::foundation::error::{EaselError, EaselResult};
use crate::raster::surface::Surface;

/// Anything an [`Editor`] can be started from.
#[derive(Clone, Debug)]
pub enum ImageSource {
    /// Already decoded image of any pixel format.
    Image(DynamicImage),
    /// Image file on disk.
    Path(PathBuf),
    /// Encoded image bytes.
    Bytes(Vec<u8>),
    /// Blank canvas.
    Canvas(Canvas),
    /// Existing pixel buffer.
    Surface(Surface),
}

impl ImageSource {
    /// Decode or materialize into an RGBA8 surface.
    pub fn into_surface(self) -> EaselResult<Surface> {
        match self {
            Self::Image(img) => Surface::from_dynamic(img),
            Self::Path(path) => {
                let bytes = std::fs::read(&path).map_err(|e| {
                    EaselError::construction(format!("read image '{}': {e}", path.display()))
                })?;
                Surface::decode(&bytes)
            }
            Self::Bytes(bytes) => Surface::decode(&bytes),
            Self::Canvas(canvas) => Surface::from_canvas(&canvas),
            Self::Surface(surface) => Ok(surface),
        }
    }
}

impl From<DynamicImage> for ImageSource {
    fn from(img: DynamicImage) -> Self {
        Self::Image(img)
    }
}

impl From<RgbaImage> for ImageSource {
    fn from(img: RgbaImage) -> Self {
        Self::Image(DynamicImage::ImageRgba8(img))
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for ImageSource {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Canvas> for ImageSource {
    fn from(canvas: Canvas) -> Self {
        Self::Canvas(canvas)
    }
}

impl From<Surface> for ImageSource {
    fn from(surface: Surface) -> Self {
        Self::Surface(surface)
    }
}

impl From<&Editor> for ImageSource {
    fn from(editor: &Editor) -> Self {
        Self::Surface(editor.surface().clone())
    }
}

impl From<Editor> for ImageSource {
    fn from(editor: Editor) -> Self {
        Self::Surface(editor.into_surface())
    }
}
