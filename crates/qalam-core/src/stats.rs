//! Editor text statistics: word count, line count, average word length,
//! and the autosave word threshold.

use serde::Serialize;

/// Autosave triggers once a document holds more than this many words.
pub const DEFAULT_AUTOSAVE_WORDS: usize = 500;

/// Summary figures for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub lines: usize,
    pub average_word_length: f64,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            words: word_count(text),
            lines: line_count(text),
            average_word_length: average_word_length(text),
        }
    }
}

/// Number of whitespace-separated words; 0 for blank text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of lines split on `\n` or `\r\n`; trailing empty lines are not
/// counted and empty text has no lines.
pub fn line_count(text: &str) -> usize {
    let lines: Vec<&str> = text.lines().collect();
    lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map(|last| last + 1)
        .unwrap_or(0)
}

/// Mean length in characters of the non-empty words; 0.0 when there are none.
pub fn average_word_length(text: &str) -> f64 {
    let (total, count) = text
        .split_whitespace()
        .fold((0usize, 0usize), |(total, count), w| {
            (total + w.chars().count(), count + 1)
        });
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// True when `text` holds strictly more than `threshold` words.
pub fn should_autosave(text: &str, threshold: usize) -> bool {
    word_count(text) > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("the quick brown fox jumps"), 5);
        assert_eq!(word_count("بسم الله الرحمن الرحيم"), 4);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("hello"), 1);
        assert_eq!(word_count("  hello   world   test  "), 3);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count("line1\nline2\nline3"), 3);
        assert_eq!(line_count("single line"), 1);
        assert_eq!(line_count(""), 0);
        assert_eq!(line_count("line1\r\nline2\r\nline3"), 3);
        assert_eq!(line_count("a\n\nb\n\n"), 3);
    }

    #[test]
    fn test_average_word_length() {
        assert!((average_word_length("hi by") - 2.0).abs() < 0.01);
        assert_eq!(average_word_length(""), 0.0);
        assert!((average_word_length("a") - 1.0).abs() < 0.01);
        assert!((average_word_length("مرحبا بالعالم") - 6.0).abs() < 0.01);
    }

    #[test]
    fn test_autosave_threshold() {
        let words = |n: usize| "كلمة ".repeat(n);
        assert!(should_autosave(&words(501), DEFAULT_AUTOSAVE_WORDS));
        assert!(should_autosave(&"text ".repeat(1000), DEFAULT_AUTOSAVE_WORDS));
        assert!(!should_autosave(&words(500), DEFAULT_AUTOSAVE_WORDS));
        assert!(!should_autosave(&words(499), DEFAULT_AUTOSAVE_WORDS));
        assert!(!should_autosave(&words(100), DEFAULT_AUTOSAVE_WORDS));
        assert!(!should_autosave("", DEFAULT_AUTOSAVE_WORDS));
        assert!(!should_autosave("   ", DEFAULT_AUTOSAVE_WORDS));
        assert!(!should_autosave("كلمة", DEFAULT_AUTOSAVE_WORDS));
    }

    #[test]
    fn test_text_stats_of() {
        let stats = TextStats::of("hi by\nok");
        assert_eq!(stats.words, 3);
        assert_eq!(stats.lines, 2);
        assert!((stats.average_word_length - 2.0).abs() < 0.01);
    }
}
