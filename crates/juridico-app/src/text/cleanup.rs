use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::stopwords::StopwordSet;

/// Knobs for [`normalize_text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions<'a> {
    /// When set, tokens found in this set are dropped after cleanup.
    pub stopwords: Option<&'a StopwordSet>,
}

impl<'a> NormalizeOptions<'a> {
    pub fn removing_stopwords(stopwords: &'a StopwordSet) -> Self {
        Self {
            stopwords: Some(stopwords),
        }
    }
}

/// Lowercases text and keeps only Portuguese letters separated by single spaces.
///
/// Applying the function to its own output is a no-op.
pub fn normalize_text(text: &str, options: NormalizeOptions<'_>) -> String {
    let mut cleaned = text.nfc().collect::<String>().to_lowercase();
    cleaned = strip_non_letters(&cleaned);
    cleaned = collapse_whitespace(&cleaned);

    match options.stopwords {
        Some(stopwords) => remove_stopwords(&cleaned, stopwords),
        None => cleaned,
    }
}

/// [`normalize_text`] with stopwords kept.
pub fn clean_text(text: &str) -> String {
    normalize_text(text, NormalizeOptions::default())
}

fn strip_non_letters(input: &str) -> String {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zà-öø-ÿ\s]").unwrap());
    RE.replace_all(input, "").into_owned()
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn remove_stopwords(input: &str, stopwords: &StopwordSet) -> String {
    input
        .split(' ')
        .filter(|word| !word.is_empty() && !stopwords.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}
