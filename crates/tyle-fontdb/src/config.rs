// this_file: crates/tyle-fontdb/src/config.rs

//! Font database configuration
//!
//! Where to look for font files and what to call the system fallback.
//! Read once from the environment; the CLI layers its own flags on top.
//!
//! # Environment Variables
//!
//! ```bash
//! TYLE_FONT_DIRS=/usr/share/fonts/pretendard:~/fonts ./my_app
//! TYLE_FALLBACK_FONT=Inter-Regular ./my_app
//! ```
//!
//! `TYLE_FONT_DIRS` uses the platform path-list separator (`:` on Unix,
//! `;` on Windows). `TYLE_FALLBACK_FONT` names a loaded face to use as the
//! system font; when no such face is loaded the host default is used.

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Directories searched for catalog faces
pub const FONT_DIRS_VAR: &str = "TYLE_FONT_DIRS";

/// Face used in place of a missing catalog face
pub const FALLBACK_FONT_VAR: &str = "TYLE_FALLBACK_FONT";

/// Family name of the host's own default face
pub const SYSTEM_FAMILY: &str = "system-ui";

static GLOBAL: OnceLock<FontDbConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontDbConfig {
    pub search_dirs: Vec<PathBuf>,
    pub fallback_family: String,
}

impl Default for FontDbConfig {
    fn default() -> Self {
        Self {
            search_dirs: Vec::new(),
            fallback_family: SYSTEM_FAMILY.to_string(),
        }
    }
}

impl FontDbConfig {
    /// Build from the current process environment
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var_os(FONT_DIRS_VAR),
            std::env::var(FALLBACK_FONT_VAR).ok(),
        )
    }

    /// Build from raw variable values; empty entries are ignored
    pub fn from_vars(font_dirs: Option<OsString>, fallback: Option<String>) -> Self {
        let search_dirs = font_dirs
            .map(|dirs| {
                std::env::split_paths(&dirs)
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let fallback_family = fallback
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| SYSTEM_FAMILY.to_string());

        Self {
            search_dirs,
            fallback_family,
        }
    }

    /// Process-wide configuration, read from the environment on first use
    pub fn global() -> &'static FontDbConfig {
        GLOBAL.get_or_init(|| {
            let config = Self::from_env();
            if !config.search_dirs.is_empty() || config.fallback_family != SYSTEM_FAMILY {
                log::info!(
                    "Tyle font config from env: {} dir(s), fallback {}",
                    config.search_dirs.len(),
                    config.fallback_family
                );
            }
            config
        })
    }

    /// Add a search directory after the configured ones
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }
}
