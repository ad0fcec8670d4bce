//! Phrase heuristics for a handful of rhetorical fallacies.

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Rendered when no rule matches.
pub const NO_FALLACY_SENTINEL: &str = "✅ Nenhuma falácia detectada com as heurísticas atuais.";

/// Literal phrase test combined with conjunction/disjunction.
#[derive(Debug, Clone, Copy)]
pub enum PhrasePattern {
    Phrase(&'static str),
    All(&'static [PhrasePattern]),
    Any(&'static [PhrasePattern]),
}

impl PhrasePattern {
    /// `haystack` must already be lowercase.
    pub fn matches(&self, haystack: &str) -> bool {
        match self {
            PhrasePattern::Phrase(phrase) => haystack.contains(phrase),
            PhrasePattern::All(patterns) => patterns.iter().all(|p| p.matches(haystack)),
            PhrasePattern::Any(patterns) => patterns.iter().any(|p| p.matches(haystack)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FallacyRule {
    pub label: &'static str,
    pub explanation: &'static str,
    pub pattern: PhrasePattern,
}

impl FallacyRule {
    fn finding(&self) -> FallacyFinding {
        FallacyFinding {
            label: self.label,
            explanation: self.explanation,
        }
    }
}

/// Evaluated in this order; findings keep it.
pub static FALLACY_RULES: &[FallacyRule] = &[
    FallacyRule {
        label: "Apelo à Autoridade",
        explanation: "argumento baseado em autoridade sem evidência.",
        pattern: PhrasePattern::All(&[
            PhrasePattern::Phrase("segundo especialistas"),
            PhrasePattern::Any(&[
                PhrasePattern::Phrase("sem provas"),
                PhrasePattern::Phrase("sem apresentar provas"),
            ]),
        ]),
    },
    FallacyRule {
        label: "Generalização Apressada",
        explanation: "conclusão ampla com base em poucos casos.",
        pattern: PhrasePattern::Any(&[
            PhrasePattern::Phrase("todo mundo sabe que"),
            PhrasePattern::Phrase("sempre acontece assim"),
        ]),
    },
    FallacyRule {
        label: "Espantalho",
        explanation: "distorção do argumento adversário para refutá-lo facilmente.",
        pattern: PhrasePattern::Phrase("eles acham que tudo é culpa do estado"),
    },
    FallacyRule {
        label: "Ad Hominem",
        explanation: "ataque à pessoa em vez do argumento.",
        pattern: PhrasePattern::Any(&[
            PhrasePattern::Phrase("essa pessoa não entende nada"),
            PhrasePattern::Phrase("incompetente demais para opinar"),
        ]),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallacyFinding {
    pub label: &'static str,
    pub explanation: &'static str,
}

impl fmt::Display for FallacyFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "🔸 {}: {}", self.label, self.explanation)
    }
}

/// Outcome of [`detect_fallacies`]; `Detected` never holds an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallacyReport {
    Detected(Vec<FallacyFinding>),
    NoneDetected,
}

impl FallacyReport {
    pub fn from_findings(findings: Vec<FallacyFinding>) -> Self {
        if findings.is_empty() {
            FallacyReport::NoneDetected
        } else {
            FallacyReport::Detected(findings)
        }
    }

    pub fn findings(&self) -> &[FallacyFinding] {
        match self {
            FallacyReport::Detected(findings) => findings,
            FallacyReport::NoneDetected => &[],
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.findings().iter().map(|finding| finding.label).collect()
    }

    pub fn is_detected(&self) -> bool {
        matches!(self, FallacyReport::Detected(_))
    }
}

impl fmt::Display for FallacyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallacyReport::NoneDetected => f.write_str(NO_FALLACY_SENTINEL),
            FallacyReport::Detected(findings) => {
                for (idx, finding) in findings.iter().enumerate() {
                    if idx > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{finding}")?;
                }
                Ok(())
            }
        }
    }
}

/// Serializes as a list of rendered findings, or the sentinel string.
impl Serialize for FallacyReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FallacyReport::NoneDetected => serializer.serialize_str(NO_FALLACY_SENTINEL),
            FallacyReport::Detected(findings) => {
                let mut seq = serializer.serialize_seq(Some(findings.len()))?;
                for finding in findings {
                    seq.serialize_element(&finding.to_string())?;
                }
                seq.end()
            }
        }
    }
}

/// Runs every rule against the lowercased text.
pub fn detect_fallacies(text: &str) -> FallacyReport {
    let lowered = text.to_lowercase();
    let findings = FALLACY_RULES
        .iter()
        .filter(|rule| rule.pattern.matches(&lowered))
        .map(FallacyRule::finding)
        .collect();
    FallacyReport::from_findings(findings)
}
