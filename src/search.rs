//! Keyword search and TF-IDF relevance over the imported library.
//!
//! Used by the `qalam search`, `qalam rank` and `qalam score` commands. The
//! library is imported into memory on each invocation and handed to the core
//! search and scoring functions.

use anyhow::Result;

use qalam_core::models::SearchResult;
use qalam_core::search::{search_keyword_with, SearchOptions};
use qalam_core::store::memory::InMemoryStore;
use qalam_core::store::Store;
use qalam_core::tfidf::{RankedDocument, TfIdfEngine};

use crate::config::Config;
use crate::library::load_library;
use crate::progress::ImportProgressReporter;

/// Core search function returning structured results (used by the CLI and tests).
pub fn search_library(
    store: &InMemoryStore,
    keyword: &str,
    ignore_diacritics: bool,
) -> Result<Vec<SearchResult>> {
    let options = SearchOptions { ignore_diacritics };
    Ok(search_keyword_with(keyword, store.documents(), &options)?)
}

pub fn run_search(
    config: &Config,
    reporter: &dyn ImportProgressReporter,
    keyword: &str,
    ignore_diacritics: bool,
    json: bool,
) -> Result<()> {
    let store = load_library(config, reporter)?;
    let ignore = ignore_diacritics || config.search.ignore_diacritics;
    let results = search_library(&store, keyword, ignore)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for result in &results {
        println!("{}", result);
    }
    println!();
    println!("{} match(es)", results.len());
    Ok(())
}

/// Rank library documents by TF-IDF against a corpus built from the library.
pub fn rank_library(store: &InMemoryStore) -> Vec<RankedDocument> {
    let docs = store.documents();
    let engine = TfIdfEngine::from_documents(docs.iter().copied());
    engine.rank_documents(docs)
}

pub fn run_rank(
    config: &Config,
    reporter: &dyn ImportProgressReporter,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let store = load_library(config, reporter)?;
    let mut ranked = rank_library(&store);
    if let Some(lim) = limit {
        ranked.truncate(lim);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No documents.");
        return Ok(());
    }

    println!("{:>4}  {:>10}  NAME", "#", "SCORE");
    for (i, r) in ranked.iter().enumerate() {
        println!("{:>4}  {:>10.4}  {}", i + 1, r.score, r.name);
    }
    Ok(())
}

pub fn run_score(config: &Config, reporter: &dyn ImportProgressReporter, text: &str) -> Result<()> {
    let store = load_library(config, reporter)?;
    let engine = TfIdfEngine::from_documents(store.documents());
    let score = engine.calculate_document_tf_idf(text);
    println!("corpus documents: {}", engine.document_count());
    println!("score: {:.6}", score);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> InMemoryStore {
        let mut store = InMemoryStore::default();
        store.create_document("doc1.txt", "the quick brown fox jumps over the lazy dog");
        store.create_document("doc2.txt", "hello world this is a test document");
        store.create_document("doc3.txt", "بِسْمِ اللَّهِ الرَّحْمَنِ الرَّحِيمِ");
        store
    }

    #[test]
    fn test_search_library() {
        let store = sample_store();
        let results = search_library(&store, "fox", false).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].to_string(), "doc1.txt - brown fox...");
    }

    #[test]
    fn test_search_library_short_keyword() {
        let store = sample_store();
        let err = search_library(&store, "ab", false).unwrap_err();
        assert!(err.to_string().contains("invalid argument"));
    }

    #[test]
    fn test_search_library_ignore_diacritics() {
        let store = sample_store();
        assert!(search_library(&store, "الله", false).unwrap().is_empty());
        assert_eq!(search_library(&store, "الله", true).unwrap().len(), 1);
    }

    #[test]
    fn test_rank_library() {
        let store = sample_store();
        let ranked = rank_library(&store);
        assert_eq!(ranked.len(), 3);
        // Only the Arabic document has in-script terms.
        assert_eq!(ranked[0].name, "doc3.txt");
        assert!(ranked[0].score > 0.0);
        assert!(ranked.iter().skip(1).all(|r| r.score == 0.0));
        let json = serde_json::to_string(&ranked).unwrap();
        assert!(!json.contains("-0.0"), "negative zero in {}", json);
    }
}
