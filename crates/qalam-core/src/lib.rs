//! # Qalam Core
//!
//! Pure document indexing and retrieval logic for Qalam: data models,
//! content fingerprinting, Arabic text normalization, fixed-width
//! pagination, TF-IDF scoring, whole-word keyword search, and editor text
//! statistics.
//!
//! This crate performs no I/O and holds no global state. Persistence and
//! presentation belong to the calling application, which supplies documents
//! and consumes hashes, pages, scores and search results.

pub mod error;
pub mod fingerprint;
pub mod models;
pub mod normalize;
pub mod paginate;
pub mod search;
pub mod stats;
pub mod store;
pub mod tfidf;

pub use error::{IndexError, Result};
