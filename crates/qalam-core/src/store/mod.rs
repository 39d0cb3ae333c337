//! Document storage abstraction.
//!
//! The [`Store`] trait is the seam between the indexing core and whatever
//! owns documents in an application (an in-memory arena, a database, a
//! file library). It keeps every document's hash and pages consistent with
//! its content: content only changes through [`Store::update_content`],
//! which recomputes both together.
//!
//! # Operations
//!
//! | Method | Purpose |
//! |--------|---------|
//! | [`create_document`](Store::create_document) | Fingerprint, paginate and store new content |
//! | [`get_document`](Store::get_document) | Look up a document by id |
//! | [`find_by_name`](Store::find_by_name) | Look up a document by display name |
//! | [`documents`](Store::documents) | All documents in insertion order |
//! | [`update_content`](Store::update_content) | Replace content, hash and pages |
//! | [`delete_document`](Store::delete_document) | Remove a document and its pages |

pub mod memory;

use chrono::{DateTime, Utc};

use crate::models::Document;

/// Result of [`Store::update_content`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Content changed; hash and pages were recomputed.
    Updated,
    /// The new content has the same fingerprint; nothing was touched.
    Unchanged,
    /// No document has the given id.
    NotFound,
}

/// Abstract document store.
pub trait Store {
    /// Store new content under `name` and return the new document's id.
    fn create_document(&mut self, name: &str, content: &str) -> String;

    /// Store new content with caller-supplied timestamps.
    fn import_document(
        &mut self,
        name: &str,
        content: &str,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> String;

    fn get_document(&self, id: &str) -> Option<&Document>;

    /// First document (in insertion order) whose name equals `name`.
    fn find_by_name(&self, name: &str) -> Option<&Document>;

    /// All documents in insertion order. Empty for an empty store.
    fn documents(&self) -> Vec<&Document>;

    /// Replace a document's content, re-deriving hash and pages.
    fn update_content(&mut self, id: &str, content: &str) -> UpdateOutcome;

    /// Remove a document. Returns false for unknown ids.
    fn delete_document(&mut self, id: &str) -> bool;
}
