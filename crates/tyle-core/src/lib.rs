//! Tyle Core: named text styles, resolved
//!
//! An app's screens draw text in a handful of fixed styles. This crate
//! holds that catalog and the rules that turn a style into concrete
//! rendering attributes.
//!
//! ## From Style to Attributes
//!
//! 1. **Pick a style** - a [`StyleVariant`] such as `headline(Bold)` or
//!    `body2(Regular, long)`
//! 2. **Resolve** - [`resolve`] derives the face name, point size, line
//!    height, spacing and underline
//! 3. **Assemble** - [`TextAttributes::assemble`] pairs that record with a
//!    real font from the host's [`FontProvider`]
//!
//! ```rust
//! use std::sync::Arc;
//! use tyle_core::{Font, FontFace, FontProvider, StyleVariant, Weight};
//!
//! # struct SystemFace;
//! # impl FontFace for SystemFace {
//! #     fn family_name(&self) -> &str { "system-ui" }
//! #     fn units_per_em(&self) -> u16 { 1000 }
//! #     fn data(&self) -> &[u8] { &[] }
//! # }
//! struct NoFonts;
//!
//! impl FontProvider for NoFonts {
//!     fn name(&self) -> &'static str { "none" }
//!     fn font(&self, _: &str, _: f32) -> Option<Font> { None }
//!     fn system_font(&self, size: f32, weight: Weight) -> Font {
//!         Font::system(Arc::new(SystemFace), size, weight)
//!     }
//! }
//!
//! let attrs = StyleVariant::caption1_with(Weight::Medium, true).attributes(&NoFonts);
//! assert!(attrs.font.is_fallback());
//! assert_eq!(attrs.font.point_size, 12.0);
//! assert!(attrs.underline.is_some());
//! ```
//!
//! Resolution is pure: no I/O, no shared state, safe from any thread.
//! Font loading belongs to the host; see [`traits`] for the contract.

pub mod attributes;
pub mod error;
pub mod style;
pub mod traits;
pub mod weight;

pub use attributes::{select_font, ParagraphStyle, TextAttributes};
pub use error::{FontLoadError, Result, TyleError};
pub use style::{
    font_name_for, resolve, ResolvedStyle, StyleKind, StyleVariant, UnderlineStyle, FONT_FAMILY,
};
pub use traits::{Font, FontFace, FontProvider, FontSource};
pub use weight::Weight;

#[cfg(test)]
mod proptests;
