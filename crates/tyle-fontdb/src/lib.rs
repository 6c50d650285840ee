//! Where catalog faces are found: the font database for Tyle
//!
//! The style catalog names faces like `Pretendard-Bold`; something has to
//! find those files and, when they are missing, stand in with a system
//! font. [`FontDatabase`] is that something. It scans font directories,
//! indexes every face by PostScript name and file stem, and implements
//! [`FontProvider`] so it plugs straight into attribute assembly.
//!
//! ```no_run
//! use tyle_core::{StyleVariant, Weight};
//! use tyle_fontdb::FontDatabase;
//!
//! let db = FontDatabase::new();
//! db.add_dir("assets/fonts")?;
//!
//! let attrs = StyleVariant::headline(Weight::Bold).attributes(&db);
//! println!("{} at {}pt", attrs.font.face.family_name(), attrs.font.point_size);
//! # Ok::<(), tyle_core::TyleError>(())
//! ```

pub mod config;
pub mod face;

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use walkdir::WalkDir;

use tyle_core::{
    error::{FontLoadError, Result},
    Font, FontFace, FontProvider, Weight,
};

pub use config::FontDbConfig;
pub use face::{FontFile, SystemFace, MAX_FONT_SIZE};

/// File extensions scanned by [`FontDatabase::add_dir`]
pub const FONT_EXTENSIONS: [&str; 4] = ["ttf", "otf", "ttc", "otc"];

/// Your font library: every face found so far, plus the fallback
pub struct FontDatabase {
    inner: RwLock<Inner>,
}

struct Inner {
    faces: Vec<Arc<FontFile>>,
    by_name: HashMap<String, Arc<FontFile>>,
    /// Canonical paths already loaded, so rescans don't duplicate faces
    loaded_paths: HashSet<PathBuf>,
    fallback_family: String,
    fallback: Arc<dyn FontFace>,
}

impl Inner {
    fn insert(&mut self, face: FontFile) -> Arc<FontFile> {
        let face = Arc::new(face);

        let mut names = vec![face.family_name().to_string()];
        names.extend(face.stem());
        for name in names {
            // First face to claim a name keeps it
            self.by_name
                .entry(name)
                .or_insert_with(|| Arc::clone(&face));
        }

        if face.family_name() == self.fallback_family
            || face.stem().as_deref() == Some(self.fallback_family.as_str())
        {
            log::debug!("Using {} as system fallback face", face.family_name());
            self.fallback = Arc::clone(&face) as Arc<dyn FontFace>;
        }

        self.faces.push(Arc::clone(&face));
        face
    }
}

impl FontDatabase {
    /// Starts with an empty library and the host default as fallback
    pub fn new() -> Self {
        let fallback_family = config::SYSTEM_FAMILY.to_string();
        Self {
            inner: RwLock::new(Inner {
                faces: Vec::new(),
                by_name: HashMap::new(),
                loaded_paths: HashSet::new(),
                fallback: Arc::new(SystemFace::new(fallback_family.clone())),
                fallback_family,
            }),
        }
    }

    /// Build a database from configuration.
    ///
    /// Directories that cannot be scanned are logged and skipped so a stale
    /// environment variable never stops an app from starting.
    pub fn with_config(config: &FontDbConfig) -> Self {
        let db = Self::new();
        db.set_fallback_family(&config.fallback_family);
        for dir in &config.search_dirs {
            if let Err(err) = db.add_dir(dir) {
                log::warn!("Skipping font dir {}: {}", dir.display(), err);
            }
        }
        db
    }

    /// Build a database from the process environment (see [`config`])
    pub fn from_env() -> Self {
        Self::with_config(FontDbConfig::global())
    }

    /// Scan a directory tree and load every font file in it.
    ///
    /// Returns how many faces were added. Files that fail to load are
    /// logged and skipped.
    pub fn add_dir(&self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(FontLoadError::FileNotFound(dir.display().to_string()).into());
        }

        let mut added = 0;
        for entry in WalkDir::new(dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
        {
            let path = entry.path();
            if !entry.file_type().is_file() || !has_font_extension(path) {
                continue;
            }
            match self.add_font_file(path) {
                Ok(count) => added += count,
                Err(err) => log::warn!("Skipping {}: {}", path.display(), err),
            }
        }

        log::debug!("Loaded {} face(s) from {}", added, dir.display());
        Ok(added)
    }

    /// Load every face in one font file.
    ///
    /// Loading the same file twice is a no-op that returns 0.
    pub fn add_font_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if self.inner.read().loaded_paths.contains(&key) {
            return Ok(0);
        }

        let faces = FontFile::load_all(path)?;
        let count = faces.len();

        let mut inner = self.inner.write();
        if !inner.loaded_paths.insert(key) {
            return Ok(0);
        }
        for face in faces {
            inner.insert(face);
        }
        Ok(count)
    }

    /// Add a face from memory
    pub fn add_font_data(&self, data: Vec<u8>) -> Result<Arc<FontFile>> {
        let face = FontFile::from_data(data)?;
        Ok(self.inner.write().insert(face))
    }

    /// Use `face` whenever a catalog face is unavailable
    pub fn set_fallback_face(&self, face: Arc<dyn FontFace>) {
        let mut inner = self.inner.write();
        inner.fallback_family = face.family_name().to_string();
        inner.fallback = face;
    }

    /// Use the loaded face called `family` as fallback, or the host font of
    /// that name when no such face is loaded (yet)
    pub fn set_fallback_family(&self, family: &str) {
        let mut inner = self.inner.write();
        let fallback: Arc<dyn FontFace> = match inner.by_name.get(family) {
            Some(face) => Arc::clone(face) as Arc<dyn FontFace>,
            None => Arc::new(SystemFace::new(family)),
        };
        inner.fallback_family = family.to_string();
        inner.fallback = fallback;
    }

    /// Whether a face answers to `name`
    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().by_name.contains_key(name)
    }

    /// Look a face up by PostScript name or file stem
    pub fn face(&self, name: &str) -> Option<Arc<FontFile>> {
        self.inner.read().by_name.get(name).cloned()
    }

    /// Every name a face answers to, sorted
    pub fn family_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.read().by_name.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of faces loaded
    pub fn font_count(&self) -> usize {
        self.inner.read().faces.len()
    }

    /// Name of the face used when a catalog face is missing
    pub fn fallback_family(&self) -> String {
        self.inner.read().fallback.family_name().to_string()
    }

    /// Forget every loaded face; the fallback reverts to the host default
    /// of the configured family
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.faces.clear();
        inner.by_name.clear();
        inner.loaded_paths.clear();
        let fallback = Arc::new(SystemFace::new(inner.fallback_family.clone()));
        inner.fallback = fallback;
    }
}

impl Default for FontDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl FontProvider for FontDatabase {
    fn name(&self) -> &'static str {
        "fontdb"
    }

    fn font(&self, family_name: &str, point_size: f32) -> Option<Font> {
        let face = self.face(family_name)?;
        Some(Font::named(face, point_size))
    }

    fn system_font(&self, point_size: f32, weight: Weight) -> Font {
        let face = Arc::clone(&self.inner.read().fallback);
        Font::system(face, point_size, weight)
    }
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
