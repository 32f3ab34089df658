//! Text normalization for title comparison.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Words that carry no title information in release names.
static NOISE_WORDS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)subtitles|titulky").unwrap());

/// Canonicalize text into a comparison key: trim, lowercase, decompose
/// accented characters (NFD) and strip the combining diacritics.
///
/// Scripts without decompositions pass through unchanged, so word
/// boundaries in non-Latin text survive. Idempotent.
pub fn normalize_text(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Clean a raw title or file name for fuzzy comparison.
///
/// Removes subtitle noise words, replaces every character that is not a
/// Unicode letter, digit or whitespace with a space (underscores included),
/// then normalizes. Idempotent.
pub fn clean_title(text: &str) -> String {
    let stripped = NOISE_WORDS_RE.replace_all(text, "");
    let spaced: String = stripped
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    normalize_text(&spaced)
}
