//! Filesystem library import.
//!
//! Walks `library.root`, keeps files matching the include globs (minus the
//! exclude globs and the default `.git` / `target` / `node_modules`
//! excludes), and imports each supported text file into an
//! [`InMemoryStore`]. Only `.txt` and `.md` files can be imported.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::WalkDir;

use qalam_core::store::memory::InMemoryStore;
use qalam_core::store::Store;

use crate::config::Config;
use crate::progress::{ImportProgressEvent, ImportProgressReporter};

/// File extensions accepted by [`import_file`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md"];

/// Text after the last `.` in `name`, or `""` when there is no dot.
///
/// `"archive.backup.tar.gz"` → `"gz"`, `".gitignore"` → `"gitignore"`,
/// `"."` → `""`.
pub fn file_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) => &name[pos + 1..],
        None => "",
    }
}

/// True when `name` has a supported extension (case-insensitive).
pub fn is_supported(name: &str) -> bool {
    let ext = file_extension(name);
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|s| s.eq_ignore_ascii_case(ext))
}

/// Import one file into `store`, returning the new document's id.
///
/// The document is named after the file name and takes its timestamps from
/// the file's metadata.
pub fn import_file<S: Store>(store: &mut S, path: &Path) -> Result<String> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if !is_supported(&name) {
        bail!(
            "Unsupported file type '{}': only {} files can be imported",
            file_extension(&name),
            SUPPORTED_EXTENSIONS.join(", ")
        );
    }

    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata: {}", path.display()))?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let modified = metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH);
    let created = metadata.created().unwrap_or(modified);

    Ok(store.import_document(
        &name,
        &content,
        DateTime::<Utc>::from(created),
        DateTime::<Utc>::from(modified),
    ))
}

/// List the library files selected by the config, sorted by relative path.
pub fn scan_library(config: &Config) -> Result<Vec<PathBuf>> {
    let lib = &config.library;
    let root = &lib.root;
    if !root.exists() {
        bail!("Library root does not exist: {}", root.display());
    }

    let include_set = build_globset(&lib.include_globs)?;

    let mut default_excludes = vec![
        "**/.git/**".to_string(),
        "**/target/**".to_string(),
        "**/node_modules/**".to_string(),
    ];
    default_excludes.extend(lib.exclude_globs.clone());
    let exclude_set = build_globset(&default_excludes)?;

    let mut files: Vec<(String, PathBuf)> = Vec::new();

    for entry in WalkDir::new(root).follow_links(lib.follow_symlinks) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().to_string();

        if exclude_set.is_match(&rel_str) || !include_set.is_match(&rel_str) {
            continue;
        }

        files.push((rel_str, path.to_path_buf()));
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files.into_iter().map(|(_, p)| p).collect())
}

/// Scan the library and import every selected file into a fresh store.
///
/// Files that fail to import are reported on stderr and skipped.
pub fn load_library(
    config: &Config,
    reporter: &dyn ImportProgressReporter,
) -> Result<InMemoryStore> {
    reporter.report(ImportProgressEvent::Scanning {
        root: config.library.root.display().to_string(),
    });

    let files = scan_library(config)?;
    let total = files.len() as u64;
    let mut store = InMemoryStore::new(config.page_size());
    let mut skipped = 0u64;

    for (i, path) in files.iter().enumerate() {
        if let Err(e) = import_file(&mut store, path) {
            eprintln!("Warning: skipping {}: {:#}", path.display(), e);
            skipped += 1;
        }
        reporter.report(ImportProgressEvent::Imported {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            n: i as u64 + 1,
            total,
        });
    }

    reporter.report(ImportProgressEvent::Finished {
        imported: store.len() as u64,
        skipped,
    });

    Ok(store)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).with_context(|| format!("Invalid glob: {}", pattern))?);
    }
    Ok(builder.build()?)
}
