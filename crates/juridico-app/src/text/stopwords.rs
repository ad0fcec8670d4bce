use std::collections::HashSet;

/// Portuguese stopword list shipped with the crate; installed into the data
/// directory on first use.
pub const BUNDLED_STOPWORDS: &str = include_str!("../../resources/stopwords/portuguese.txt");

/// Read-only set of lowercase words excluded when stopword removal is requested.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Parse a word list: one word per line, blank lines and `#` comments ignored.
    pub fn parse(source: &str) -> Self {
        let words = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    pub fn bundled() -> Self {
        Self::parse(BUNDLED_STOPWORDS)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }
}
