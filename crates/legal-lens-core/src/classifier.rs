/// Heuristic legal-document classifier.
///
/// Scores a page from three independent checks:
/// - URL contains any strong keyword: flat `URL_WEIGHT`
/// - Title contains any strong keyword: flat `TITLE_WEIGHT`
/// - Each legal phrase found in the text sample: `PHRASE_WEIGHT` per phrase
///
/// The sum is not capped. A page is legal when the score reaches `THRESHOLD`.
use crate::signals::PageSignals;

/// Strong indicator terms checked against the URL and the title.
pub const KEYWORDS: [&str; 9] = [
    "terms",
    "privacy",
    "legal",
    "policy",
    "agreement",
    "tos",
    "eula",
    "conditions",
    "gdpr",
];

/// Legal-register phrases checked against the text sample.
pub const PHRASES: [&str; 13] = [
    "effective date",
    "last updated",
    "governed by",
    "jurisdiction",
    "arbitration",
    "class action waiver",
    "intellectual property rights",
    "disclaimer of warranties",
    "limitation of liability",
    "these terms",
    "privacy policy",
    "by accessing",
    "you agree to",
];

pub const URL_WEIGHT: u32 = 3;
pub const TITLE_WEIGHT: u32 = 4;
pub const PHRASE_WEIGHT: u32 = 2;

/// Minimum score at which a page counts as a legal document.
pub const THRESHOLD: u32 = 5;

/// Outcome of a single page evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationResult {
    pub score: u32,
    pub is_legal_page: bool,
}

impl ClassificationResult {
    pub fn from_score(score: u32) -> Self {
        Self {
            score,
            is_legal_page: score >= THRESHOLD,
        }
    }
}

/// Which signals fired for a page, in keyword/phrase table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// First keyword found in the URL
    pub url_keyword: Option<&'static str>,
    /// First keyword found in the title
    pub title_keyword: Option<&'static str>,
    /// Every phrase found in the text sample
    pub phrases: Vec<&'static str>,
}

impl ScoreBreakdown {
    pub fn score(&self) -> u32 {
        let url = if self.url_keyword.is_some() { URL_WEIGHT } else { 0 };
        let title = if self.title_keyword.is_some() { TITLE_WEIGHT } else { 0 };
        url + title + PHRASE_WEIGHT * self.phrases.len() as u32
    }

    pub fn result(&self) -> ClassificationResult {
        ClassificationResult::from_score(self.score())
    }
}

/// Evaluate every check and record what matched.
pub fn explain(signals: &PageSignals) -> ScoreBreakdown {
    ScoreBreakdown {
        url_keyword: first_keyword(signals.url()),
        title_keyword: first_keyword(signals.title()),
        phrases: PHRASES
            .iter()
            .copied()
            .filter(|phrase| signals.text_sample().contains(phrase))
            .collect(),
    }
}

/// Score a page and decide whether it is a legal document.
pub fn classify(signals: &PageSignals) -> ClassificationResult {
    explain(signals).result()
}

fn first_keyword(haystack: &str) -> Option<&'static str> {
    KEYWORDS.iter().copied().find(|k| haystack.contains(k))
}
