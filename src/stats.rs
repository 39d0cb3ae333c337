//! Library statistics.
//!
//! Provides a quick summary of what's in the library: document and page
//! counts, word and line totals, average word length, and which documents
//! are past the autosave threshold. Used by `qalam stats`.

use anyhow::{Context, Result};
use std::path::Path;

use qalam_core::stats::{should_autosave, TextStats};
use qalam_core::store::Store;

use crate::config::Config;
use crate::library::load_library;
use crate::progress::ImportProgressReporter;

/// Per-document breakdown.
struct DocumentStats {
    name: String,
    pages: usize,
    bytes: u64,
    text: TextStats,
    autosave: bool,
}

/// Run the stats command over the whole library.
pub fn run_stats(config: &Config, reporter: &dyn ImportProgressReporter) -> Result<()> {
    let store = load_library(config, reporter)?;
    let threshold = config.editor.autosave_words;

    let rows: Vec<DocumentStats> = store
        .documents()
        .into_iter()
        .map(|doc| {
            let content = doc.content();
            DocumentStats {
                name: doc.name.clone(),
                pages: doc.pages.len(),
                bytes: content.len() as u64,
                text: TextStats::of(&content),
                autosave: should_autosave(&content, threshold),
            }
        })
        .collect();

    let total_pages: usize = rows.iter().map(|r| r.pages).sum();
    let total_words: usize = rows.iter().map(|r| r.text.words).sum();
    let total_lines: usize = rows.iter().map(|r| r.text.lines).sum();
    let total_bytes: u64 = rows.iter().map(|r| r.bytes).sum();

    println!("Qalam — Library Stats");
    println!("=====================");
    println!();
    println!("  Library:     {}", config.library.root.display());
    println!("  Size:        {}", format_bytes(total_bytes));
    println!("  Page size:   {} chars", config.page_size());
    println!();
    println!("  Documents:   {}", rows.len());
    println!("  Pages:       {}", total_pages);
    println!("  Words:       {}", total_words);
    println!("  Lines:       {}", total_lines);

    if !rows.is_empty() {
        println!();
        println!("  By document:");
        println!(
            "  {:<32} {:>6} {:>8} {:>7} {:>8}   {}",
            "NAME", "PAGES", "WORDS", "LINES", "AVG LEN", "AUTOSAVE"
        );
        println!("  {}", "-".repeat(80));

        for r in &rows {
            println!(
                "  {:<32} {:>6} {:>8} {:>7} {:>8.2}   {}",
                r.name,
                r.pages,
                r.text.words,
                r.text.lines,
                r.text.average_word_length,
                if r.autosave { "yes" } else { "no" }
            );
        }
    }

    println!();
    Ok(())
}

/// Run the stats command for a single file outside the library.
pub fn run_file_stats(config: &Config, path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let stats = TextStats::of(&content);

    println!("{}", path.display());
    println!("  words:            {}", stats.words);
    println!("  lines:            {}", stats.lines);
    println!("  avg word length:  {:.2}", stats.average_word_length);
    println!(
        "  autosave:         {}",
        if should_autosave(&content, config.editor.autosave_words) {
            "yes"
        } else {
            "no"
        }
    );
    Ok(())
}

/// Format a byte count as a human-readable string.
fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
