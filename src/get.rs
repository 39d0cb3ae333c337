//! Document listing and retrieval.
//!
//! Backs `qalam list` (one line per document) and `qalam get` (metadata plus
//! every page of one document).

use anyhow::{bail, Result};
use serde::Serialize;

use qalam_core::models::Document;
use qalam_core::store::memory::InMemoryStore;
use qalam_core::store::Store;

use crate::config::Config;
use crate::library::load_library;
use crate::progress::ImportProgressReporter;

/// Document response for `qalam get --json`.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentResponse {
    pub id: String,
    pub name: String,
    pub hash: String,
    pub created_at: String, // ISO8601
    pub updated_at: String, // ISO8601
    pub pages: Vec<PageResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    pub number: u32,
    pub text: String,
}

impl From<&Document> for DocumentResponse {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            name: doc.name.clone(),
            hash: doc.hash.clone(),
            created_at: doc.created_at.to_rfc3339(),
            updated_at: doc.updated_at.to_rfc3339(),
            pages: doc
                .pages
                .iter()
                .map(|p| PageResponse {
                    number: p.page_number,
                    text: p.content.clone(),
                })
                .collect(),
        }
    }
}

/// Look up a document by name, falling back to id.
pub fn get_document(store: &InMemoryStore, name_or_id: &str) -> Result<DocumentResponse> {
    let doc = store
        .find_by_name(name_or_id)
        .or_else(|| store.get_document(name_or_id));
    match doc {
        Some(doc) => Ok(DocumentResponse::from(doc)),
        None => bail!("document not found: {}", name_or_id),
    }
}

pub fn run_get(
    config: &Config,
    reporter: &dyn ImportProgressReporter,
    name_or_id: &str,
    json: bool,
) -> Result<()> {
    let store = load_library(config, reporter)?;
    let doc = get_document(&store, name_or_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    println!("--- Document ---");
    println!("id:         {}", doc.id);
    println!("name:       {}", doc.name);
    println!("hash:       {}", doc.hash);
    println!("created:    {}", doc.created_at);
    println!("modified:   {}", doc.updated_at);
    println!("pages:      {}", doc.pages.len());

    for page in &doc.pages {
        println!();
        println!("--- Page {} ---", page.number);
        println!("{}", page.text);
    }
    Ok(())
}

pub fn run_list(config: &Config, reporter: &dyn ImportProgressReporter) -> Result<()> {
    let store = load_library(config, reporter)?;
    let docs = store.documents();

    if docs.is_empty() {
        println!("No documents.");
        return Ok(());
    }

    println!(
        "  {:<32} {:>6}  {:<32}  {}",
        "NAME", "PAGES", "HASH", "MODIFIED"
    );
    println!("  {}", "-".repeat(90));
    for doc in docs {
        println!(
            "  {:<32} {:>6}  {:<32}  {}",
            doc.name,
            doc.pages.len(),
            doc.hash,
            doc.updated_at.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}
