//! Core data models: documents, pages, and search results.
//!
//! A [`Document`] exclusively owns its ordered [`Page`]s. Pages refer back
//! to their document by id only, so there is no ownership cycle.

use std::fmt;
use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::fingerprint::fingerprint;
use crate::paginate::paginate;

/// A fixed-size slice of a document's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub id: String,
    /// Owning document id (foreign key, not ownership).
    pub document_id: String,
    /// 1-based position within the document.
    pub page_number: u32,
    pub content: String,
}

/// A named text document with its fingerprint and pages.
///
/// `hash` and `pages` always describe the same content: both are derived
/// in [`Document::new`] and replaced together in [`Document::set_content`].
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    /// Fingerprint of the current content.
    pub hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a document from raw content, fingerprinting and paginating it.
    pub fn new(name: &str, content: &str, page_size: NonZeroUsize) -> Self {
        let now = Utc::now();
        Self::with_timestamps(name, content, page_size, now, now)
    }

    /// Like [`Document::new`], with timestamps supplied by the caller
    /// (e.g. taken from file metadata on import).
    pub fn with_timestamps(
        name: &str,
        content: &str,
        page_size: NonZeroUsize,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let id = Uuid::new_v4().to_string();
        let pages = paginate(&id, content, page_size);
        Self {
            id,
            name: name.to_string(),
            hash: fingerprint(content),
            created_at,
            updated_at,
            pages,
        }
    }

    /// Reassemble the full content from the pages, in order.
    pub fn content(&self) -> String {
        self.pages.iter().map(|p| p.content.as_str()).collect()
    }

    /// Returns true when `content` differs from what this document holds.
    pub fn is_modified(&self, content: &str) -> bool {
        !crate::fingerprint::is_unchanged(content, &self.hash)
    }

    /// Replace the document's content.
    ///
    /// Recomputes the hash and re-derives the pages together. Returns false
    /// and leaves the document untouched when the content is unchanged.
    pub fn set_content(&mut self, content: &str, page_size: NonZeroUsize) -> bool {
        let hash = fingerprint(content);
        if hash == self.hash {
            return false;
        }
        self.pages = paginate(&self.id, content, page_size);
        self.hash = hash;
        self.updated_at = Utc::now();
        true
    }
}

/// One keyword occurrence found by [`search_keyword`](crate::search::search_keyword).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub document_name: String,
    /// Word immediately before the match on the same page; empty when the
    /// match is the page's first word.
    pub context: String,
    pub keyword: String,
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context.is_empty() {
            write!(f, "{} - {}...", self.document_name, self.keyword)
        } else {
            write!(
                f,
                "{} - {} {}...",
                self.document_name, self.context, self.keyword
            )
        }
    }
}
