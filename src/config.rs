//! TOML configuration parsing and validation.
//!
//! Every section has defaults, so an empty file is a valid configuration.
//! [`load_config`] validates values the core types cannot express (a zero
//! page size, a zero autosave threshold).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use qalam_core::paginate::DEFAULT_PAGE_SIZE;
use qalam_core::stats::DEFAULT_AUTOSAVE_WORDS;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub library: LibraryConfig,
    #[serde(default)]
    pub paging: PagingConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LibraryConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            include_globs: default_include_globs(),
            exclude_globs: Vec::new(),
            follow_symlinks: false,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_include_globs() -> Vec<String> {
    vec!["**/*.txt".to_string(), "**/*.md".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct PagingConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE.get()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchConfig {
    #[serde(default)]
    pub ignore_diacritics: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EditorConfig {
    #[serde(default = "default_autosave_words")]
    pub autosave_words: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_words: default_autosave_words(),
        }
    }
}

fn default_autosave_words() -> usize {
    DEFAULT_AUTOSAVE_WORDS
}

impl Config {
    /// Defaults only, used when no config file exists. The library root is
    /// the current directory.
    pub fn minimal() -> Self {
        Self::default()
    }

    /// Validated page size.
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.paging.page_size).unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.paging.page_size == 0 {
        anyhow::bail!("paging.page_size must be > 0");
    }

    if config.editor.autosave_words == 0 {
        anyhow::bail!("editor.autosave_words must be > 0");
    }

    if config.library.include_globs.is_empty() {
        anyhow::bail!("library.include_globs must list at least one pattern");
    }

    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to [`Config::minimal`].
///
/// A file that exists but fails to parse or validate is still an error.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::minimal())
    }
}
