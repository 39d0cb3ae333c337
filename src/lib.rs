//! # Qalam
//!
//! Arabic-aware indexing for a library of plain-text and Markdown
//! documents.
//!
//! Qalam imports `.txt` / `.md` files from a directory into an in-memory
//! store, splits them into fixed-size pages, fingerprints their content for
//! change detection, and answers whole-word keyword queries and TF-IDF
//! relevance queries. The algorithms live in [`qalam_core`]; this crate adds
//! configuration, filesystem import, progress reporting and the `qalam` CLI.
//!
//! ## Quick Start
//!
//! ```bash
//! qalam list                        # documents in the library
//! qalam search "الرحمن"              # whole-word keyword search
//! qalam rank --limit 10             # TF-IDF relevance of each document
//! qalam hash notes.txt              # content fingerprint
//! qalam paginate notes.txt --page-size 80
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`library`] | Filesystem import into an in-memory store |
//! | [`progress`] | Import progress on stderr |
//! | [`search`] | Keyword search, ranking and scoring commands |
//! | [`get`] | Document listing and retrieval |
//! | [`stats`] | Library and file statistics |
//! | [`inspect`] | Hash, change check and pagination of single files |

pub mod config;
pub mod get;
pub mod inspect;
pub mod library;
pub mod progress;
pub mod search;
pub mod stats;

pub use qalam_core;
