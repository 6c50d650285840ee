//! The contracts between the catalog and the host font system
//!
//! The catalog never loads fonts. It names a face and a size; the host
//! answers through these traits.
//!
//! - [`FontFace`] - Your window into a loaded face
//! - [`FontProvider`] - Turns a family name and size into a [`Font`]

use crate::weight::Weight;
use std::fmt;
use std::sync::Arc;

/// A font face the host has loaded
///
/// ```ignore
/// struct MyFace {
///     name: String,
///     data: Vec<u8>,
/// }
///
/// impl FontFace for MyFace {
///     fn family_name(&self) -> &str {
///         &self.name
///     }
///
///     fn units_per_em(&self) -> u16 {
///         1000
///     }
///
///     fn data(&self) -> &[u8] {
///         &self.data
///     }
/// }
/// ```
pub trait FontFace: Send + Sync {
    /// Name the face is known by (PostScript name for file-backed faces)
    fn family_name(&self) -> &str;

    /// The face's internal coordinate system scale
    fn units_per_em(&self) -> u16;

    /// Raw font bytes; empty when the face is a platform font the host
    /// draws without handing out data
    fn data(&self) -> &[u8];
}

/// Where a [`Font`] came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSource {
    /// The face the style asked for by name
    Named,
    /// The system font substituted because the named face was unavailable
    SystemFallback { weight: Weight },
}

/// A face at a concrete point size, ready for a text run
#[derive(Clone)]
pub struct Font {
    pub face: Arc<dyn FontFace>,
    pub point_size: f32,
    pub source: FontSource,
}

impl Font {
    pub fn named(face: Arc<dyn FontFace>, point_size: f32) -> Self {
        Self {
            face,
            point_size,
            source: FontSource::Named,
        }
    }

    pub fn system(face: Arc<dyn FontFace>, point_size: f32, weight: Weight) -> Self {
        Self {
            face,
            point_size,
            source: FontSource::SystemFallback { weight },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, FontSource::SystemFallback { .. })
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("face", &self.face.family_name())
            .field("point_size", &self.point_size)
            .field("source", &self.source)
            .finish()
    }
}

/// The host's font loading system
///
/// Implementations must honour one contract: `system_font` always
/// succeeds. When [`FontProvider::font`] cannot load the named face, the
/// caller substitutes `system_font` at the same point size and the weight
/// the style asked for (see [`crate::attributes::select_font`]). Text is
/// never left without a font.
pub trait FontProvider: Send + Sync {
    /// Identify yourself in logs
    fn name(&self) -> &'static str;

    /// Load the face called `family_name` at `point_size`
    ///
    /// Returns `None` when the face is unavailable. That is not an error.
    fn font(&self, family_name: &str, point_size: f32) -> Option<Font>;

    /// The platform default face at `point_size` and `weight`
    fn system_font(&self, point_size: f32, weight: Weight) -> Font;
}

impl<P: FontProvider + ?Sized> FontProvider for Arc<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn font(&self, family_name: &str, point_size: f32) -> Option<Font> {
        (**self).font(family_name, point_size)
    }

    fn system_font(&self, point_size: f32, weight: Weight) -> Font {
        (**self).system_font(point_size, weight)
    }
}
