use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use usvg::fontdb;

use crate::foundation::error::{EaselError, EaselResult};
use crate::text::layout::{TextExtent, measure};

/// Style picked when querying installed fonts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontVariant {
    /// Normal weight, upright.
    #[default]
    Regular,
    /// Bold weight, upright.
    Bold,
    /// Normal weight, italic.
    Italic,
    /// Light weight, upright.
    Light,
}

impl FontVariant {
    fn weight(self) -> fontdb::Weight {
        match self {
            Self::Regular | Self::Italic => fontdb::Weight::NORMAL,
            Self::Bold => fontdb::Weight::BOLD,
            Self::Light => fontdb::Weight::LIGHT,
        }
    }

    fn style(self) -> fontdb::Style {
        match self {
            Self::Italic => fontdb::Style::Italic,
            _ => fontdb::Style::Normal,
        }
    }
}

impl FromStr for FontVariant {
    type Err = EaselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            "light" => Ok(Self::Light),
            other => Err(EaselError::invalid_argument(format!(
                "unknown font variant '{other}' (expected regular, bold, italic or light)"
            ))),
        }
    }
}

struct FontFace {
    bytes: Arc<Vec<u8>>,
    data: vello_cpu::peniko::FontData,
    family: String,
    id: u64,
}

/// Immutable typeface handle at a fixed pixel size.
///
/// Cloning is cheap: the font bytes are shared. Two handles compare equal when they point at the
/// same font bytes and size.
#[derive(Clone)]
pub struct Font {
    face: Arc<FontFace>,
    size: f32,
}

impl Font {
    /// Load a font from TrueType/OpenType bytes (face 0 of a collection).
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, size: f32) -> EaselResult<Self> {
        Self::from_face(bytes.into(), 0, size)
    }

    /// Read a font file from disk.
    pub fn from_path(path: impl AsRef<Path>, size: f32) -> EaselResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            EaselError::construction(format!("read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(bytes, size)
    }

    /// Query the installed fonts by family name and variant.
    ///
    /// `sans-serif`, `serif` and `monospace` select the platform's generic families.
    pub fn system(family: &str, variant: FontVariant, size: f32) -> EaselResult<Self> {
        let db = system_fonts();
        let family_q = match family.trim().to_ascii_lowercase().as_str() {
            "sans-serif" => fontdb::Family::SansSerif,
            "serif" => fontdb::Family::Serif,
            "monospace" => fontdb::Family::Monospace,
            _ => fontdb::Family::Name(family),
        };
        let query = fontdb::Query {
            families: &[family_q],
            weight: variant.weight(),
            stretch: fontdb::Stretch::Normal,
            style: variant.style(),
        };
        let id = db.query(&query).ok_or_else(|| {
            EaselError::construction(format!("no installed font matches '{family}' ({variant:?})"))
        })?;
        let (bytes, index) = db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(|| {
                EaselError::construction(format!("font data for '{family}' is unavailable"))
            })?;
        tracing::debug!(family, ?variant, index, "resolved system font");
        Self::from_face(bytes, index, size)
    }

    /// First installed sans-serif font, trying the generic family and then common families.
    pub fn system_sans(variant: FontVariant, size: f32) -> EaselResult<Self> {
        const FALLBACKS: &[&str] = &[
            "sans-serif",
            "DejaVu Sans",
            "Liberation Sans",
            "Noto Sans",
            "Arial",
            "Helvetica",
        ];
        for family in FALLBACKS {
            if let Ok(font) = Self::system(family, variant, size) {
                return Ok(font);
            }
        }
        Err(EaselError::construction(
            "no installed sans-serif font was found",
        ))
    }

    /// Same typeface at another pixel size.
    pub fn with_size(&self, size: f32) -> EaselResult<Self> {
        Ok(Self {
            face: Arc::clone(&self.face),
            size: ensure_font_size(size)?,
        })
    }

    /// Pixel size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Family name recorded in the font file.
    pub fn family(&self) -> &str {
        &self.face.family
    }

    /// Content hash of the font bytes and face index.
    pub fn id(&self) -> u64 {
        self.face.id
    }

    /// Advance width and line height of `text` set in this font.
    pub fn measure(&self, text: &str) -> EaselResult<TextExtent> {
        measure(text, self)
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        &self.face.bytes
    }

    pub(crate) fn render_data(&self) -> &vello_cpu::peniko::FontData {
        &self.face.data
    }

    fn from_face(bytes: Vec<u8>, index: u32, size: f32) -> EaselResult<Self> {
        let size = ensure_font_size(size)?;

        let mut db = fontdb::Database::new();
        db.load_font_data(bytes.clone());
        let family = db
            .faces()
            .find(|f| f.index == index)
            .or_else(|| db.faces().next())
            .and_then(|f| f.families.first().map(|(name, _)| name.clone()))
            .ok_or_else(|| EaselError::construction("bytes do not contain a usable font face"))?;

        let mut hasher = xxhash_rust::xxh3::Xxh3::new();
        hasher.update(&bytes);
        hasher.update(&index.to_le_bytes());
        let id = hasher.digest();

        let data =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes.clone()), index);
        Ok(Self {
            face: Arc::new(FontFace {
                bytes: Arc::new(bytes),
                data,
                family,
                id,
            }),
            size,
        })
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.face.id == other.face.id && self.size == other.size
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("family", &self.face.family)
            .field("size", &self.size)
            .field("id", &format_args!("{:016x}", self.face.id))
            .finish()
    }
}

fn ensure_font_size(size: f32) -> EaselResult<f32> {
    if !size.is_finite() || size <= 0.0 {
        return Err(EaselError::invalid_geometry(format!(
            "font size must be finite and > 0, got {size}"
        )));
    }
    Ok(size)
}

fn system_fonts() -> &'static fontdb::Database {
    static DB: OnceLock<fontdb::Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts");
        db
    })
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
