//! Content fingerprinting for change detection.
//!
//! A fingerprint is the MD5 digest of the content's UTF-8 bytes, rendered
//! as 32 uppercase hex characters. Two documents whose fingerprints are
//! equal are treated as having identical content.
//!
//! # Example
//!
//! ```rust
//! use qalam_core::fingerprint::fingerprint;
//!
//! assert_eq!(fingerprint("Hello World"), "B10A8DB164E0754105B7A99BE72E3FE5");
//! assert_eq!(fingerprint("").len(), 32);
//! ```

/// Length of a rendered fingerprint in hex characters.
pub const FINGERPRINT_LEN: usize = 32;

/// Compute the fingerprint of `content`.
///
/// Total over all input: empty strings and any Unicode (including
/// right-to-left scripts) produce a valid 32-character digest.
pub fn fingerprint(content: &str) -> String {
    format!("{:X}", md5::compute(content.as_bytes()))
}

/// Returns true when `content` still matches a previously stored `hash`.
///
/// Hex case is ignored so digests persisted in lowercase still compare equal.
pub fn is_unchanged(content: &str, hash: &str) -> bool {
    fingerprint(content).eq_ignore_ascii_case(hash)
}
