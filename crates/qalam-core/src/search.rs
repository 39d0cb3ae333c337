//! Whole-word keyword search across documents and their pages.
//!
//! The search operates on caller-supplied [`Document`]s and never mutates
//! them. Each page is split on whitespace; a word matches when it
//! equals the keyword ignoring case. Substrings and stems do not match.
//!
//! # Result Order
//!
//! 1. Documents in iteration order.
//! 2. Pages in page order within each document.
//! 3. Occurrences left to right within each page.
//!
//! Every occurrence is reported, not only the first per document. Each
//! result carries the word immediately before the match on the same page,
//! or an empty string when the match opens the page.

use crate::error::{IndexError, Result};
use crate::models::{Document, SearchResult};
use crate::normalize::remove_diacritics;

/// Minimum keyword length in characters, after trimming.
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Matching options for [`search_keyword_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    /// Compare words with Arabic diacritics stripped from both sides.
    pub ignore_diacritics: bool,
}

/// Search `documents` for whole-word, case-insensitive occurrences of
/// `keyword`.
///
/// Returns [`IndexError::InvalidArgument`] before scanning anything when the
/// trimmed keyword is shorter than [`MIN_KEYWORD_CHARS`]. An empty document
/// slice or a keyword with no matches yields `Ok(vec![])`.
///
/// # Example
///
/// ```rust
/// use qalam_core::models::Document;
/// use qalam_core::paginate::DEFAULT_PAGE_SIZE;
/// use qalam_core::search::search_keyword;
///
/// let docs = vec![Document::new(
///     "doc1.txt",
///     "the quick brown fox jumps over the lazy dog",
///     DEFAULT_PAGE_SIZE,
/// )];
/// let results = search_keyword("fox", &docs).unwrap();
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].context, "brown");
/// ```
pub fn search_keyword(keyword: &str, documents: &[Document]) -> Result<Vec<SearchResult>> {
    search_keyword_with(keyword, documents, &SearchOptions::default())
}

/// [`search_keyword`] with explicit [`SearchOptions`].
///
/// Takes any iterator of borrowed documents, so a store's document list can
/// be searched without cloning it. With `ignore_diacritics` set, the keyword
/// must still have [`MIN_KEYWORD_CHARS`] characters once its diacritics are
/// stripped.
pub fn search_keyword_with<'a, I>(
    keyword: &str,
    documents: I,
    options: &SearchOptions,
) -> Result<Vec<SearchResult>>
where
    I: IntoIterator<Item = &'a Document>,
{
    let keyword = keyword.trim();
    let keyword_len = keyword.chars().count();
    if keyword_len < MIN_KEYWORD_CHARS {
        return Err(IndexError::InvalidArgument(format!(
            "keyword must be at least {} characters, got {}",
            MIN_KEYWORD_CHARS, keyword_len
        )));
    }
    if options.ignore_diacritics {
        let bare_len = remove_diacritics(keyword).chars().count();
        if bare_len < MIN_KEYWORD_CHARS {
            return Err(IndexError::InvalidArgument(format!(
                "keyword must be at least {} characters without diacritics, got {}",
                MIN_KEYWORD_CHARS, bare_len
            )));
        }
    }

    let needle = match_key(keyword, options);
    let mut results = Vec::new();

    for doc in documents {
        for page in &doc.pages {
            let mut previous: Option<&str> = None;
            for word in page.content.split_whitespace() {
                if match_key(word, options) == needle {
                    results.push(SearchResult {
                        document_name: doc.name.clone(),
                        context: previous.unwrap_or_default().to_string(),
                        keyword: keyword.to_string(),
                    });
                }
                previous = Some(word);
            }
        }
    }

    Ok(results)
}

/// Comparison key for a word under the given options.
fn match_key(word: &str, options: &SearchOptions) -> String {
    if options.ignore_diacritics {
        remove_diacritics(word).to_lowercase()
    } else {
        word.to_lowercase()
    }
}
