//! Single-file commands: `qalam hash`, `qalam check`, `qalam paginate`.

use anyhow::{Context, Result};
use std::num::NonZeroUsize;
use std::path::Path;

use qalam_core::fingerprint::{fingerprint, is_unchanged};
use qalam_core::paginate::paginate;

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

pub fn run_hash(path: &Path) -> Result<()> {
    let content = read_file(path)?;
    println!("{}  {}", fingerprint(&content), path.display());
    Ok(())
}

/// Compare a file against a stored fingerprint. Returns true when unchanged.
pub fn run_check(path: &Path, hash: &str) -> Result<bool> {
    let content = read_file(path)?;
    let unchanged = is_unchanged(&content, hash);
    println!("{}", if unchanged { "unchanged" } else { "modified" });
    Ok(unchanged)
}

pub fn run_paginate(path: &Path, page_size: NonZeroUsize) -> Result<()> {
    let content = read_file(path)?;
    let name = path.display().to_string();
    let pages = paginate(&name, &content, page_size);

    println!("{}: {} page(s) of {} chars", name, pages.len(), page_size);
    for page in &pages {
        println!();
        println!("--- Page {} ---", page.page_number);
        println!("{}", page.content);
    }
    Ok(())
}
