//! Fixed-width paginator.
//!
//! Splits document content into [`Page`]s of exactly `page_size` characters
//! (Unicode scalar values, not bytes). The last page holds the remainder.
//!
//! Slicing is purely positional: a word may straddle two pages. Each page
//! receives a fresh UUID and a 1-based page number.
//!
//! # Guarantees
//!
//! - At least one page is always returned (a single empty page for empty
//!   content).
//! - Page numbers are contiguous: `1, 2, …, N`.
//! - Concatenating page contents in order reproduces the input exactly.
//! - The same content always yields the same page count, contents and order.
//!
//! # Example
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use qalam_core::paginate::paginate;
//!
//! let pages = paginate("doc-1", "abcdefg", NonZeroUsize::new(3).unwrap());
//! let texts: Vec<&str> = pages.iter().map(|p| p.content.as_str()).collect();
//! assert_eq!(texts, ["abc", "def", "g"]);
//! assert_eq!(pages[2].page_number, 3);
//! ```

use std::num::NonZeroUsize;

use uuid::Uuid;

use crate::models::Page;

/// Characters per page when the caller does not choose.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(n) => n,
    None => panic!("page size must be non-zero"),
};

/// Split `content` into consecutive pages of `page_size` characters.
pub fn paginate(document_id: &str, content: &str, page_size: NonZeroUsize) -> Vec<Page> {
    if content.is_empty() {
        return vec![make_page(document_id, 1, content)];
    }

    let page_size = page_size.get();
    let mut pages = Vec::new();
    let mut start = 0;
    let mut chars_in_page = 0;

    for (idx, _) in content.char_indices() {
        if chars_in_page == page_size {
            pages.push(make_page(document_id, pages.len() as u32 + 1, &content[start..idx]));
            start = idx;
            chars_in_page = 0;
        }
        chars_in_page += 1;
    }
    pages.push(make_page(document_id, pages.len() as u32 + 1, &content[start..]));

    pages
}

fn make_page(document_id: &str, page_number: u32, text: &str) -> Page {
    Page {
        id: Uuid::new_v4().to_string(),
        document_id: document_id.to_string(),
        page_number,
        content: text.to_string(),
    }
}
