//! # Qalam CLI (`qalam`)
//!
//! The `qalam` binary imports a directory of `.txt` / `.md` documents into
//! memory and runs keyword search, TF-IDF ranking, fingerprinting,
//! pagination and statistics over it.
//!
//! ## Usage
//!
//! ```bash
//! qalam --config ./config/qalam.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `qalam list` | List library documents with page counts and hashes |
//! | `qalam get <name>` | Print one document's metadata and pages |
//! | `qalam search <keyword>` | Whole-word, case-insensitive keyword search |
//! | `qalam rank` | Rank library documents by TF-IDF |
//! | `qalam score "<text>"` | TF-IDF score of arbitrary text against the library |
//! | `qalam hash <file>` | Content fingerprint of a file |
//! | `qalam check <file> <hash>` | Report whether a file still matches a fingerprint |
//! | `qalam paginate <file>` | Split a file into pages |
//! | `qalam stats` | Library or single-file statistics |
//! | `qalam completions <shell>` | Generate shell completions |

use clap::{CommandFactory, Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use qalam::progress::ProgressMode;
use qalam::{config, get, inspect, search, stats};

/// Qalam — Arabic-aware document library indexing.
///
/// Commands that read the library accept a `--config` flag pointing to a
/// TOML configuration file. Without one, the current directory is the
/// library root and all defaults apply.
#[derive(Parser)]
#[command(
    name = "qalam",
    about = "Qalam — Arabic-aware document library indexing",
    version,
    long_about = "Qalam imports plain-text and Markdown documents, splits them into fixed-size \
    pages, fingerprints them for change detection, and answers whole-word keyword and TF-IDF \
    relevance queries."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/qalam.toml`. When the file does not exist,
    /// built-in defaults are used.
    #[arg(long, global = true, default_value = "./config/qalam.toml")]
    config: PathBuf,

    /// Import progress on stderr. Defaults to `human` on a TTY, else `off`.
    #[arg(long, global = true, value_enum)]
    progress: Option<ProgressMode>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List library documents.
    List,

    /// Print a document's metadata and pages.
    Get {
        /// Document name (file name) or id.
        name: String,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Search the library for a keyword.
    ///
    /// Matches whole words, ignoring case. The keyword must be at least
    /// three characters long.
    Search {
        keyword: String,

        /// Strip Arabic diacritics before comparing words.
        #[arg(long)]
        ignore_diacritics: bool,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Rank library documents by TF-IDF against the library corpus.
    Rank {
        /// Maximum number of documents to show.
        #[arg(long)]
        limit: Option<usize>,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Score arbitrary text against the library corpus.
    Score {
        text: String,
    },

    /// Print the content fingerprint of a file.
    Hash {
        path: PathBuf,
    },

    /// Check whether a file still matches a fingerprint.
    ///
    /// Prints `unchanged` or `modified`; exits with status 1 when modified.
    Check {
        path: PathBuf,
        hash: String,
    },

    /// Split a file into pages.
    Paginate {
        path: PathBuf,

        /// Characters per page (overrides `[paging].page_size`).
        #[arg(long)]
        page_size: Option<NonZeroUsize>,
    },

    /// Show library statistics, or statistics for one file.
    Stats {
        /// Report on this file instead of the library.
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Generate shell completions on stdout.
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Commands that don't require config
    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "qalam", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Hash { path } => {
            inspect::run_hash(path)?;
            return Ok(());
        }
        Commands::Check { path, hash } => {
            if !inspect::run_check(path, hash)? {
                std::process::exit(1);
            }
            return Ok(());
        }
        _ => {}
    }

    let cfg = config::load_or_default(&cli.config)?;
    let mode = cli.progress.unwrap_or_else(ProgressMode::default_for_tty);
    let reporter = mode.reporter();

    match cli.command {
        Commands::List => {
            get::run_list(&cfg, reporter.as_ref())?;
        }
        Commands::Get { name, json } => {
            get::run_get(&cfg, reporter.as_ref(), &name, json)?;
        }
        Commands::Search {
            keyword,
            ignore_diacritics,
            json,
        } => {
            search::run_search(&cfg, reporter.as_ref(), &keyword, ignore_diacritics, json)?;
        }
        Commands::Rank { limit, json } => {
            search::run_rank(&cfg, reporter.as_ref(), limit, json)?;
        }
        Commands::Score { text } => {
            search::run_score(&cfg, reporter.as_ref(), &text)?;
        }
        Commands::Paginate { path, page_size } => {
            inspect::run_paginate(&path, page_size.unwrap_or_else(|| cfg.page_size()))?;
        }
        Commands::Stats { file } => match file {
            Some(path) => stats::run_file_stats(&cfg, &path)?,
            None => stats::run_stats(&cfg, reporter.as_ref())?,
        },
        Commands::Completions { .. } | Commands::Hash { .. } | Commands::Check { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
