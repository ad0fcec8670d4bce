use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Legal term paired with its plain-language gloss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JargonEntry {
    pub term: &'static str,
    pub explanation: &'static str,
}

static ENTRIES: &[JargonEntry] = &[
    JargonEntry {
        term: "litisconsórcio",
        explanation: "quando várias pessoas são parte em um processo",
    },
    JargonEntry {
        term: "jurisprudência",
        explanation: "conjunto de decisões de tribunais",
    },
    JargonEntry {
        term: "petição inicial",
        explanation: "primeiro documento de um processo",
    },
    JargonEntry {
        term: "ação rescisória",
        explanation: "ação que visa desfazer uma decisão judicial já tomada",
    },
    JargonEntry {
        term: "preclusão",
        explanation: "perda de um direito por não ter sido exercido no tempo certo",
    },
];

static DEFAULT_DICTIONARY: Lazy<JargonDictionary> = Lazy::new(|| JargonDictionary::new(ENTRIES));

/// Ordered term table plus the matcher compiled from it.
#[derive(Debug)]
pub struct JargonDictionary {
    entries: &'static [JargonEntry],
    matcher: Regex,
}

impl JargonDictionary {
    fn new(entries: &'static [JargonEntry]) -> Self {
        let alternation = entries
            .iter()
            .map(|entry| format!("({})", regex::escape(entry.term)))
            .collect::<Vec<_>>()
            .join("|");
        let matcher = Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap();
        Self { entries, matcher }
    }

    /// The built-in legal glossary.
    pub fn standard() -> &'static JargonDictionary {
        &DEFAULT_DICTIONARY
    }

    pub fn entries(&self) -> &'static [JargonEntry] {
        self.entries
    }

    /// Gloss for `term`, compared case-insensitively.
    pub fn explain(&self, term: &str) -> Option<&'static str> {
        let wanted = term.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.term == wanted)
            .map(|entry| entry.explanation)
    }

    /// Rewrites every whole-word occurrence of a term as `[term: explanation]`.
    ///
    /// All spans are found in one left-to-right pass, so inserted glosses are
    /// never matched again. Matched casing is kept inside the brackets.
    pub fn annotate(&self, text: &str) -> String {
        self.matcher
            .replace_all(text, |caps: &Captures<'_>| {
                let matched = &caps[0];
                match self.matched_entry(caps) {
                    Some(entry) => format!("[{matched}: {}]", entry.explanation),
                    None => matched.to_string(),
                }
            })
            .into_owned()
    }

    /// Each entry owns one capture group, numbered in dictionary order.
    fn matched_entry(&self, caps: &Captures<'_>) -> Option<&'static JargonEntry> {
        let group = caps.iter().skip(1).position(|group| group.is_some())?;
        self.entries.get(group)
    }
}

/// Annotates legal jargon using the built-in glossary.
pub fn translate_jargon(text: &str) -> String {
    JargonDictionary::standard().annotate(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn annotates_multi_word_term() {
        let translated = translate_jargon("a petição inicial já indicava o pedido");
        assert_eq!(
            translated,
            "a [petição inicial: primeiro documento de um processo] já indicava o pedido"
        );
    }

    #[test]
    fn keeps_matched_casing() {
        let translated = translate_jargon("Houve PRECLUSÃO e Jurisprudência farta.");
        assert_eq!(
            translated,
            "Houve [PRECLUSÃO: perda de um direito por não ter sido exercido no tempo certo] \
             e [Jurisprudência: conjunto de decisões de tribunais] farta."
        );
    }

    #[test]
    fn ignores_partial_words() {
        let input = "os litisconsórcios e a jurisprudencial tese";
        assert_eq!(translate_jargon(input), input);
    }

    #[test]
    fn annotates_every_occurrence() {
        let translated = translate_jargon("ação rescisória ou ação rescisória");
        assert_eq!(
            translated
                .matches("[ação rescisória: ação que visa desfazer uma decisão judicial já tomada]")
                .count(),
            2
        );
    }

    #[test]
    fn explain_is_case_insensitive() {
        let dictionary = JargonDictionary::standard();
        assert_eq!(
            dictionary.explain("Litisconsórcio"),
            Some("quando várias pessoas são parte em um processo")
        );
        assert_eq!(dictionary.explain("sentença"), None);
        assert_eq!(dictionary.entries().len(), 5);
        assert_eq!(dictionary.entries()[0].term, "litisconsórcio");
    }

    #[test]
    fn annotates_matches_found_through_case_folding() {
        assert_eq!(
            translate_jargon("a litiſconsórcio"),
            "a [litiſconsórcio: quando várias pessoas são parte em um processo]"
        );
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(translate_jargon(""), "");
    }

    proptest! {
        #[test]
        fn text_without_terms_is_unchanged(input in "[a-z ]{0,80}") {
            prop_assert_eq!(translate_jargon(&input), input);
        }

        #[test]
        fn only_inserts_brackets_for_known_terms(prefix in "[a-z ]{0,20}", suffix in "[a-z ]{0,20}") {
            let input = format!("{prefix} preclusão {suffix}");
            let translated = translate_jargon(&input);
            prop_assert_eq!(translated.matches('[').count(), 1);
            prop_assert!(translated.contains(
                "[preclusão: perda de um direito por não ter sido exercido no tempo certo]"
            ));
        }
    }
}
