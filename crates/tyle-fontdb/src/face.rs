// this_file: crates/tyle-fontdb/src/face.rs

//! Faces the database hands out
//!
//! [`FontFile`] is a face parsed from real font bytes. [`SystemFace`] is a
//! stand-in that tells the host to draw with its own default font.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use read_fonts::{types::NameId, FileRef, FontRef, TableProvider};
use tyle_core::{error::FontLoadError, FontFace};

/// Maximum font file size (50MB) to prevent resource exhaustion.
pub const MAX_FONT_SIZE: u64 = 50 * 1024 * 1024;

/// A face loaded from a font file or from memory
///
/// Faces from the same collection share one copy of the data.
pub struct FontFile {
    data: Arc<Vec<u8>>,
    face_index: u32,
    name: String,
    postscript_name: Option<String>,
    units_per_em: u16,
    path: Option<PathBuf>,
}

impl FontFile {
    /// Load every face in a font file (one, or several for TTC/OTC)
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<FontFile>, FontLoadError> {
        let path = path.as_ref();
        let meta = fs::metadata(path).map_err(|e| read_error(path, e))?;
        check_size(&path.display().to_string(), meta.len())?;

        let data = fs::read(path).map_err(|e| read_error(path, e))?;
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());

        let mut faces = Self::from_shared(Arc::new(data), stem)?;
        for face in &mut faces {
            face.path = Some(path.to_path_buf());
        }
        Ok(faces)
    }

    /// Parse a single face from memory
    pub fn from_data(data: Vec<u8>) -> Result<FontFile, FontLoadError> {
        Self::from_data_index(data, 0)
    }

    /// Parse one face of a collection from memory
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<FontFile, FontLoadError> {
        check_size("<memory>", data.len() as u64)?;
        Self::parse(Arc::new(data), face_index, None)
    }

    fn from_shared(data: Arc<Vec<u8>>, stem: Option<String>) -> Result<Vec<FontFile>, FontLoadError> {
        let count = match FileRef::new(&data).map_err(|_| FontLoadError::InvalidData)? {
            FileRef::Font(_) => 1,
            FileRef::Collection(collection) => collection.len(),
        };

        (0..count)
            .map(|index| {
                let stem = stem.as_deref().map(|stem| indexed_stem(stem, index));
                Self::parse(Arc::clone(&data), index, stem)
            })
            .collect()
    }

    fn parse(
        data: Arc<Vec<u8>>,
        face_index: u32,
        stem: Option<String>,
    ) -> Result<FontFile, FontLoadError> {
        let font =
            FontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        let units_per_em = font
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);
        let postscript_name = postscript_name(&font);

        let name = postscript_name
            .clone()
            .or(stem)
            .unwrap_or_else(|| format!("face-{face_index}"));

        Ok(FontFile {
            data,
            face_index,
            name,
            postscript_name,
            units_per_em,
            path: None,
        })
    }

    /// Face index within a collection (0 for single fonts)
    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    /// PostScript name from the `name` table, if the font has one
    pub fn postscript_name(&self) -> Option<&str> {
        self.postscript_name.as_deref()
    }

    /// File the face was loaded from, `None` for in-memory faces
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// File stem the face answers to besides its PostScript name
    pub(crate) fn stem(&self) -> Option<String> {
        let stem = self.path.as_ref()?.file_stem()?.to_string_lossy();
        Some(indexed_stem(&stem, self.face_index))
    }
}

impl FontFace for FontFile {
    fn family_name(&self) -> &str {
        &self.name
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn data(&self) -> &[u8] {
        &self.data
    }
}

/// The host's default face, described by name only
///
/// Carries no font data: the host maps the family name to its platform
/// font and draws with that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemFace {
    family: String,
}

impl SystemFace {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
        }
    }
}

impl FontFace for SystemFace {
    fn family_name(&self) -> &str {
        &self.family
    }

    fn units_per_em(&self) -> u16 {
        1000
    }

    fn data(&self) -> &[u8] {
        &[]
    }
}

/// Collection members past the first answer to `stem#index`
fn indexed_stem(stem: &str, face_index: u32) -> String {
    if face_index == 0 {
        stem.to_string()
    } else {
        format!("{stem}#{face_index}")
    }
}

fn read_error(path: &Path, err: io::Error) -> FontLoadError {
    let path = path.display().to_string();
    if err.kind() == io::ErrorKind::NotFound {
        FontLoadError::FileNotFound(path)
    } else {
        FontLoadError::Read { path, source: err }
    }
}

/// Reject fonts over [`MAX_FONT_SIZE`]
fn check_size(source: &str, size: u64) -> Result<(), FontLoadError> {
    if size > MAX_FONT_SIZE {
        return Err(FontLoadError::FontTooLarge {
            path: source.to_string(),
            size,
            max: MAX_FONT_SIZE,
        });
    }
    Ok(())
}

/// First non-empty PostScript name record (name ID 6)
fn postscript_name(font: &FontRef<'_>) -> Option<String> {
    let name = font.name().ok()?;
    name.name_record()
        .iter()
        .filter(|record| record.name_id() == NameId::POSTSCRIPT_NAME)
        .filter_map(|record| record.string(name.string_data()).ok())
        .map(|string| string.chars().collect::<String>())
        .find(|string| !string.is_empty())
}
