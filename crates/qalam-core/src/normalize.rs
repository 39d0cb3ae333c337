//! Arabic-aware text normalization.
//!
//! Three pure transforms used ahead of term extraction:
//!
//! 1. [`remove_diacritics`] strips Arabic combining marks (harakat, tanween,
//!    shadda, sukun, Quranic annotation marks) and leaves every other
//!    character alone.
//! 2. [`restrict_to_script`] keeps Arabic letters and whitespace and deletes
//!    everything else. Deleted characters are not replaced, so a removed word
//!    between two spaces leaves both spaces behind.
//! 3. [`preprocess`] chains lowercase folding, diacritic removal and script
//!    restriction, in that order. Diacritics must go first: a mark is not a
//!    letter and would otherwise be judged on its own.
//!
//! # Example
//!
//! ```rust
//! use qalam_core::normalize::restrict_to_script;
//!
//! let out = restrict_to_script("Hello مرحبا World بالعالم");
//! assert_eq!(out, " مرحبا  بالعالم");
//! ```

/// Returns true for Arabic combining marks removed by [`remove_diacritics`].
pub fn is_diacritic(c: char) -> bool {
    matches!(c,
        '\u{0610}'..='\u{061A}'
        | '\u{064B}'..='\u{065F}'
        | '\u{0670}'
        | '\u{06D6}'..='\u{06DC}'
        | '\u{06DF}'..='\u{06E4}'
        | '\u{06E7}'..='\u{06E8}'
        | '\u{06EA}'..='\u{06ED}'
        | '\u{08D3}'..='\u{08E1}'
        | '\u{08E3}'..='\u{08FF}'
    )
}

/// Returns true for letters of the Arabic script.
///
/// Covers the base Arabic block, Arabic Supplement, Arabic Extended-A and
/// both presentation-form blocks. Arabic-Indic digits, punctuation and the
/// tatweel are not letters.
pub fn is_script_letter(c: char) -> bool {
    matches!(c,
        '\u{0621}'..='\u{063A}'
        | '\u{0641}'..='\u{064A}'
        | '\u{066E}'..='\u{066F}'
        | '\u{0671}'..='\u{06D3}'
        | '\u{06D5}'
        | '\u{06E5}'..='\u{06E6}'
        | '\u{06EE}'..='\u{06EF}'
        | '\u{06FA}'..='\u{06FC}'
        | '\u{06FF}'
        | '\u{0750}'..='\u{077F}'
        | '\u{08A0}'..='\u{08C9}'
        | '\u{FB50}'..='\u{FD3D}'
        | '\u{FD50}'..='\u{FDFB}'
        | '\u{FE70}'..='\u{FEFC}'
    )
}

/// Strip Arabic diacritical marks, keeping base letters and all other text.
pub fn remove_diacritics(text: &str) -> String {
    text.chars().filter(|c| !is_diacritic(*c)).collect()
}

/// Keep only Arabic letters and whitespace.
pub fn restrict_to_script(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_whitespace() || is_script_letter(*c))
        .collect()
}

/// Full normalization pipeline used for term extraction.
pub fn preprocess(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let folded = text.to_lowercase();
    let bare = remove_diacritics(&folded);
    restrict_to_script(&bare)
}
