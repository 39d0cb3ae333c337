//! TF-IDF relevance scoring over a normalized-term corpus.
//!
//! A [`TfIdfEngine`] owns one [`Corpus`]: the document frequency of every
//! normalized term and the number of documents added. Engines are plain
//! values; independent sessions use independent engines.
//!
//! # Scoring
//!
//! For a text with raw term counts `tf(t)`, against a corpus of `N`
//! documents where `df(t)` documents contain `t`:
//!
//! ```text
//! score = Σ tf(t) · ln((1 + N) / (1 + df(t)))
//! ```
//!
//! The smoothed idf is finite and non-negative for every `N` and `df`
//! (including an empty corpus and unseen terms), so scoring never yields
//! NaN or infinity.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::Document;
use crate::normalize::preprocess;

/// Document frequencies plus the count of documents added.
///
/// `df(t) <= document_count` for every term.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    document_frequency: HashMap<String, usize>,
    document_count: usize,
}

/// A document paired with its TF-IDF score.
#[derive(Debug, Clone, Serialize)]
pub struct RankedDocument {
    pub id: String,
    pub name: String,
    pub score: f64,
}

/// Incrementally built TF-IDF scorer.
#[derive(Debug, Clone, Default)]
pub struct TfIdfEngine {
    corpus: Corpus,
}

impl TfIdfEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine with one corpus entry per document's full content.
    pub fn from_documents<'a, I>(documents: I) -> Self
    where
        I: IntoIterator<Item = &'a Document>,
    {
        let mut engine = Self::new();
        for doc in documents {
            engine.add_document_to_corpus(&doc.content());
        }
        engine
    }

    /// Register `text` as one more corpus document.
    ///
    /// Each distinct term bumps its document frequency once, however often it
    /// repeats. Texts with no terms still count as a document.
    pub fn add_document_to_corpus(&mut self, text: &str) {
        let normalized = preprocess(text);
        let distinct: HashSet<&str> = normalized.split_whitespace().collect();
        for term in distinct {
            *self
                .corpus
                .document_frequency
                .entry(term.to_string())
                .or_insert(0) += 1;
        }
        self.corpus.document_count += 1;
    }

    /// Score `text` against the corpus. Always finite and never negative
    /// (a text with no terms scores `+0.0`); never mutates.
    pub fn calculate_document_tf_idf(&self, text: &str) -> f64 {
        let normalized = preprocess(text);
        let mut term_counts: HashMap<&str, usize> = HashMap::new();
        for term in normalized.split_whitespace() {
            *term_counts.entry(term).or_insert(0) += 1;
        }

        term_counts
            .iter()
            .map(|(term, &tf)| tf as f64 * self.idf(term))
            .fold(0.0, |acc, x| acc + x)
    }

    /// Smoothed inverse document frequency of an already-normalized term.
    pub fn idf(&self, term: &str) -> f64 {
        let n = self.corpus.document_count as f64;
        let df = self.document_frequency(term) as f64;
        ((1.0 + n) / (1.0 + df)).ln()
    }

    /// Number of corpus documents containing `term` (0 if unseen).
    pub fn document_frequency(&self, term: &str) -> usize {
        self.corpus
            .document_frequency
            .get(term)
            .copied()
            .unwrap_or(0)
    }

    pub fn document_count(&self) -> usize {
        self.corpus.document_count
    }

    /// Score every document's content and sort by score (desc), then name.
    pub fn rank_documents<'a, I>(&self, documents: I) -> Vec<RankedDocument>
    where
        I: IntoIterator<Item = &'a Document>,
    {
        let mut ranked: Vec<RankedDocument> = documents
            .into_iter()
            .map(|doc| RankedDocument {
                id: doc.id.clone(),
                name: doc.name.clone(),
                score: self.calculate_document_tf_idf(&doc.content()),
            })
            .collect();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        ranked
    }
}
