//! In-memory [`Store`] implementation.
//!
//! Documents live in a `HashMap` keyed by id, with a separate `Vec` of ids
//! preserving insertion order. Pages are stored inside their owning
//! document. There is no internal locking: share a store across threads by
//! wrapping it in a `RwLock`.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};

use crate::models::Document;
use crate::paginate::DEFAULT_PAGE_SIZE;

use super::{Store, UpdateOutcome};

/// In-memory document arena.
pub struct InMemoryStore {
    docs: HashMap<String, Document>,
    order: Vec<String>,
    page_size: NonZeroUsize,
}

impl InMemoryStore {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            docs: HashMap::new(),
            order: Vec::new(),
            page_size,
        }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn insert(&mut self, doc: Document) -> String {
        let id = doc.id.clone();
        self.order.push(id.clone());
        self.docs.insert(id.clone(), doc);
        id
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Store for InMemoryStore {
    fn create_document(&mut self, name: &str, content: &str) -> String {
        let doc = Document::new(name, content, self.page_size);
        self.insert(doc)
    }

    fn import_document(
        &mut self,
        name: &str,
        content: &str,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> String {
        let doc = Document::with_timestamps(name, content, self.page_size, created_at, updated_at);
        self.insert(doc)
    }

    fn get_document(&self, id: &str) -> Option<&Document> {
        self.docs.get(id)
    }

    fn find_by_name(&self, name: &str) -> Option<&Document> {
        self.documents().into_iter().find(|d| d.name == name)
    }

    fn documents(&self) -> Vec<&Document> {
        self.order.iter().filter_map(|id| self.docs.get(id)).collect()
    }

    fn update_content(&mut self, id: &str, content: &str) -> UpdateOutcome {
        let page_size = self.page_size;
        match self.docs.get_mut(id) {
            None => UpdateOutcome::NotFound,
            Some(doc) => {
                if doc.set_content(content, page_size) {
                    UpdateOutcome::Updated
                } else {
                    UpdateOutcome::Unchanged
                }
            }
        }
    }

    fn delete_document(&mut self, id: &str) -> bool {
        if self.docs.remove(id).is_none() {
            return false;
        }
        self.order.retain(|existing| existing != id);
        true
    }
}
