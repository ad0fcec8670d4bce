use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static ABBREVIATIONS: &[&str] = &[
    "art.",
    "arts.",
    "inc.",
    "incs.",
    "al.",
    "parág.",
    "fl.",
    "fls.",
    "nº",
    "n.º",
    "núm.",
    "pág.",
    "págs.",
    "pp.",
    "cf.",
    "ex.",
    "exmo.",
    "exma.",
    "dr.",
    "dra.",
    "drs.",
    "sr.",
    "sra.",
    "srs.",
    "des.",
    "min.",
    "rel.",
    "proc.",
    "adv.",
    "cap.",
    "sec.",
    "vs.",
    "etc.",
    "e.g.",
    "i.e.",
    "v.g.",
    "ltda.",
    "s.a.",
    "cia.",
    "av.",
    "obs.",
    "prof.",
    "profa.",
    "res.",
    "dec.",
    "emb.",
    "resp.",
    "agr.",
    "c.c.",
    "c/c",
    "cpc.",
    "cpp.",
    "clt.",
    "stf.",
    "stj.",
    "tj.",
    "aprox.",
    "máx.",
    "mín.",
    "séc.",
    "vol.",
    "trad.",
    "coord.",
    "op. cit.",
    "ibid.",
];

static ABBREVIATIONS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for &abbr in ABBREVIATIONS {
        set.insert(abbr.to_string());
        set.insert(abbr.to_lowercase());
        let trimmed = abbr.trim_end_matches('.');
        if trimmed != abbr {
            set.insert(trimmed.to_string());
            set.insert(trimmed.to_lowercase());
        }
    }
    set
});

static PAIRED_DELIMITERS: &[(char, char)] = &[
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('«', '»'),
    ('“', '”'),
];

const MAX_DELIMITER_SEARCH: usize = 1000;

/// Failure reported by a segmentation service.
#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("segmenter `{engine}` failed: {reason}")]
    Engine { engine: String, reason: String },
}

impl SegmentError {
    pub fn engine(engine: impl Into<String>, reason: impl Into<String>) -> Self {
        SegmentError::Engine {
            engine: engine.into(),
            reason: reason.into(),
        }
    }
}

/// Splits text into an ordered sequence of sentences.
///
/// Implementations are read-only after construction and shared between
/// pipeline runs.
pub trait SentenceSegmenter: Send + Sync {
    fn name(&self) -> &'static str;

    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentError>;
}

/// Selects one of the built-in segmentation engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    /// Abbreviation-aware rules for legal prose (primary engine).
    #[default]
    Legal,
    /// Splits on terminal punctuation followed by whitespace.
    Simple,
}

impl SegmenterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SegmenterKind::Legal => "legal",
            SegmenterKind::Simple => "simple",
        }
    }
}

impl fmt::Display for SegmenterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmenterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legal" => Ok(SegmenterKind::Legal),
            "simple" => Ok(SegmenterKind::Simple),
            other => Err(format!(
                "unknown segmenter `{other}` (expected `legal` or `simple`)"
            )),
        }
    }
}

/// Segmenter tuned for Portuguese legal text with expanded abbreviation support.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalSentenceSegmenter;

impl LegalSentenceSegmenter {
    pub fn split(text: &str) -> Vec<String> {
        SentenceParser::new(text).collect()
    }
}

impl SentenceSegmenter for LegalSentenceSegmenter {
    fn name(&self) -> &'static str {
        "legal"
    }

    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentError> {
        Ok(Self::split(text))
    }
}

/// Punctuation-only splitter: a sentence ends at `.`, `!`, `?` or `…`
/// (optionally followed by closing quotes or brackets) plus whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleSentenceSegmenter;

impl SimpleSentenceSegmenter {
    pub fn split(text: &str) -> Vec<String> {
        static BOUNDARY: Lazy<Regex> =
            Lazy::new(|| Regex::new(r#"[.!?…]+["'”»)\]]*\s+"#).unwrap());

        let mut sentences = Vec::new();
        let mut start = 0;
        for boundary in BOUNDARY.find_iter(text) {
            push_trimmed(&mut sentences, &text[start..boundary.end()]);
            start = boundary.end();
        }
        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }
}

impl SentenceSegmenter for SimpleSentenceSegmenter {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn segment(&self, text: &str) -> Result<Vec<String>, SegmentError> {
        Ok(Self::split(text))
    }
}

fn push_trimmed(sentences: &mut Vec<String>, fragment: &str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

fn sentence_tail_is_abbreviation(sentence: &str) -> bool {
    let (_, last) = split_last_word(sentence);
    if last.is_empty() {
        return false;
    }
    if is_initial(last) {
        return true;
    }
    is_abbreviation_like(last)
}

fn sentence_is_ordinal_marker(sentence: &str) -> bool {
    const MAX_MARKER_PREFIX: usize = 3;

    let (prefix, last) = split_last_word(sentence);
    if last.is_empty() {
        return false;
    }

    let digits = last.trim_end_matches('.');
    if digits.is_empty() {
        return true;
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let mut words = prefix.split_whitespace();
    words
        .by_ref()
        .take(MAX_MARKER_PREFIX)
        .all(is_abbreviation_like)
        && words.next().is_none()
}

/// Splits off the last whitespace-separated word without scanning the rest.
fn split_last_word(sentence: &str) -> (&str, &str) {
    let trimmed = sentence.trim_end();
    trimmed
        .rsplit_once(char::is_whitespace)
        .unwrap_or(("", trimmed))
}

fn is_abbreviation_like(word: &str) -> bool {
    let trimmed = word.trim_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | '"' | '\''));
    if trimmed.is_empty() {
        return true;
    }

    if ABBREVIATIONS_SET.contains(trimmed) {
        return true;
    }
    let lower = trimmed.to_lowercase();
    if ABBREVIATIONS_SET.contains(lower.as_str()) {
        return true;
    }

    let mut dotted = lower;
    dotted.push('.');
    ABBREVIATIONS_SET.contains(dotted.as_str())
}

fn is_initial(fragment: &str) -> bool {
    let mut chars = fragment.trim().chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(first), Some('.'), None) if first.is_uppercase()
    )
}

pub trait PortugueseSentenceSplit {
    fn split_portuguese_sentences(&self) -> Vec<String>;
}

impl<T: AsRef<str>> PortugueseSentenceSplit for T {
    fn split_portuguese_sentences(&self) -> Vec<String> {
        LegalSentenceSegmenter::split(self.as_ref())
    }
}

#[derive(Debug)]
pub struct SentenceParser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> SentenceParser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn is_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn byte_len_of_chars(&self, n: usize) -> (usize, usize) {
        let remaining = &self.input[self.position..];
        let mut end = 0;
        let mut char_count = 0;

        for ch in remaining.chars() {
            if char_count >= n {
                break;
            }
            end += ch.len_utf8();
            char_count += 1;
        }

        (end, char_count)
    }

    fn maybe_consume_abbreviation(&mut self) -> Option<&'a str> {
        const COMMON_LENGTHS: &[usize] = &[3, 4, 2, 5, 6, 7, 8];

        let has_word_prefix = self.input[..self.position]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphabetic());
        if has_word_prefix {
            return None;
        }

        for &len in COMMON_LENGTHS {
            let (end, char_count) = self.byte_len_of_chars(len);
            if char_count < len {
                continue;
            }

            let start = self.position;
            let ahead = &self.input[start..start + end];
            if ABBREVIATIONS_SET.contains(ahead) {
                self.position += end;
                return Some(ahead);
            }
        }
        None
    }

    fn maybe_consume_digits(&mut self) -> Option<&'a str> {
        let start = self.position;
        let remaining = &self.input[self.position..];

        if !remaining.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }

        let mut end = 0;
        let mut last_was_dot = false;

        for ch in remaining.chars() {
            match ch {
                '0'..='9' => {
                    end += 1;
                    last_was_dot = false;
                }
                '.' if !last_was_dot => {
                    end += 1;
                    last_was_dot = true;
                }
                _ => break,
            }
        }

        if last_was_dot {
            end -= 1;
        }

        self.position += end;
        Some(&self.input[start..start + end])
    }

    fn maybe_consume_nested_delimited(&mut self) -> Option<&'a str> {
        let start = self.position;
        let remaining = &self.input[self.position..];
        let first = remaining.chars().next()?;
        let &(open, close) = PAIRED_DELIMITERS.iter().find(|(open, _)| *open == first)?;

        let mut depth = 0usize;
        let mut end = 0;
        for ch in remaining.chars() {
            end += ch.len_utf8();
            if ch == open {
                depth += 1;
            } else if ch == close {
                depth -= 1;
                if depth == 0 {
                    self.position += end;
                    return Some(&self.input[start..self.position]);
                }
            }

            if end > MAX_DELIMITER_SEARCH {
                break;
            }
        }
        None
    }

    fn at_sentence_boundary(&self, sentence: &str) -> bool {
        if sentence_tail_is_abbreviation(sentence) || sentence_is_ordinal_marker(sentence) {
            return false;
        }

        const BOUNDARY_PUNCTUATION: &[char] = &['"', '\'', ')', ']', '}', '«', '“'];
        let next_non_space = self.input[self.position..]
            .chars()
            .find(|c| !c.is_whitespace());

        match next_non_space {
            None => true,
            Some(next) => {
                next.is_uppercase() || next.is_ascii_digit() || BOUNDARY_PUNCTUATION.contains(&next)
            }
        }
    }

    pub fn parse_sentence(&mut self) -> Option<String> {
        if self.is_end() {
            return None;
        }

        let mut sentence = String::new();

        while !self.is_end() {
            if let Some(abbrev) = self.maybe_consume_abbreviation() {
                sentence.push_str(abbrev);
                continue;
            }

            if let Some(digits) = self.maybe_consume_digits() {
                sentence.push_str(digits);
                continue;
            }

            if let Some(delimited) = self.maybe_consume_nested_delimited() {
                sentence.push_str(delimited);
                continue;
            }

            let Some(ch) = self.input[self.position..].chars().next() else {
                break;
            };
            sentence.push(ch);
            self.position += ch.len_utf8();

            if matches!(ch, '.' | '!' | '?' | '…') && self.at_sentence_boundary(&sentence) {
                break;
            }
        }

        if sentence.is_empty() {
            None
        } else {
            Some(sentence)
        }
    }
}

impl Iterator for SentenceParser<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_sentence()
    }
}
