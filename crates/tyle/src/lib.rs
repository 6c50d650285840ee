//! Tyle - a typography style catalog
//!
//! Eleven named text styles, each resolving to the exact face, size, line
//! height, spacing and underline a UI should draw with:
//!
//! 1. Style selection - pick a [`StyleVariant`] and weight
//! 2. Resolution - [`resolve`] derives the attribute record
//! 3. Font selection - a [`FontProvider`] supplies the face, or the system
//!    font when the face is missing
//!
//! # Example
//!
//! ```
//! use tyle::prelude::*;
//!
//! let style = resolve(StyleVariant::body2_with(Weight::Bold, false));
//! assert_eq!(style.line_height, 20.0);
//! assert_eq!(style.letter_spacing, -0.5);
//! ```
//!
//! # Feature Flags
//!
//! - `fontdb` (default): the file-backed [`fontdb::FontDatabase`] provider

pub use tyle_core::{
    error, resolve, select_font, traits, Font, FontFace, FontProvider, FontSource, ParagraphStyle,
    ResolvedStyle, StyleKind, StyleVariant, TextAttributes, UnderlineStyle, Weight,
};

#[cfg(feature = "fontdb")]
pub use tyle_fontdb as fontdb;

/// Attributes for `variant` using fonts from the process-wide database.
///
/// The database is built once from `TYLE_FONT_DIRS` / `TYLE_FALLBACK_FONT`.
#[cfg(feature = "fontdb")]
pub fn attributes(variant: StyleVariant) -> TextAttributes {
    use std::sync::OnceLock;

    static DB: OnceLock<tyle_fontdb::FontDatabase> = OnceLock::new();
    let db = DB.get_or_init(|| {
        let db = tyle_fontdb::FontDatabase::from_env();
        log::debug!("Shared font database ready with {} face(s)", db.font_count());
        db
    });
    variant.attributes(db)
}

/// Common imports for typical usage
pub mod prelude {
    pub use tyle_core::{
        error::{Result, TyleError},
        resolve,
        traits::{Font, FontFace, FontProvider, FontSource},
        ResolvedStyle, StyleKind, StyleVariant, TextAttributes, UnderlineStyle, Weight,
    };
}
