use std::num::NonZeroUsize;

use crate::text::SegmenterKind;

/// Validate a sentence count: a positive integer.
pub fn parse_sentence_count(s: &str) -> Result<NonZeroUsize, String> {
    let value: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("sentence count must be a positive integer, got `{s}`"))?;
    NonZeroUsize::new(value).ok_or_else(|| "sentence count must be at least 1".to_string())
}

/// Validate a segmenter name (`legal` or `simple`).
pub fn parse_segmenter(s: &str) -> Result<SegmenterKind, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_counts() {
        assert_eq!(parse_sentence_count("3").map(NonZeroUsize::get), Ok(3));
        assert_eq!(parse_sentence_count(" 12 ").map(NonZeroUsize::get), Ok(12));
    }

    #[test]
    fn rejects_zero_and_garbage() {
        assert_eq!(
            parse_sentence_count("0"),
            Err("sentence count must be at least 1".to_string())
        );
        assert!(parse_sentence_count("-1").is_err());
        assert!(parse_sentence_count("três").is_err());
    }

    #[test]
    fn parses_segmenter_names() {
        assert_eq!(parse_segmenter("legal"), Ok(SegmenterKind::Legal));
        assert_eq!(parse_segmenter("SIMPLE"), Ok(SegmenterKind::Simple));
        assert!(parse_segmenter("spacy").is_err());
    }
}
