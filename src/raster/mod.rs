//! Pixel storage and the raster primitives the editor is built from.
//!
//! Vector shapes and glyphs are rasterized by `vello_cpu` into a scratch premultiplied pixmap and
//! then composited over the straight-alpha [`Surface`](surface::Surface).

pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod draw;
pub(crate) mod pixmap;
/// Owned RGBA8 pixel buffer.
pub mod surface;
pub(crate) mod transform;
