use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classifier::{
    ScoreBreakdown, KEYWORDS, PHRASES, PHRASE_WEIGHT, THRESHOLD, TITLE_WEIGHT, URL_WEIGHT,
};
use crate::signals::{PageSignals, MAX_TEXT_SAMPLE_CHARS};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PageParams {
    /// Full URL of the page as seen by the browser.
    pub url: String,
    /// Document title.
    pub title: String,
    /// Visible text of the page body. Only the first 5000 characters are considered.
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DetectLegalPageResponse {
    pub score: u32,
    pub is_legal_page: bool,
    pub threshold: u32,
    /// Keyword that matched the URL, if any.
    pub url_keyword: Option<String>,
    /// Keyword that matched the title, if any.
    pub title_keyword: Option<String>,
    pub matched_phrases: Vec<String>,
    /// Whether the visible text was cut to the sample limit.
    pub text_truncated: bool,
}

impl DetectLegalPageResponse {
    pub fn from_breakdown(breakdown: &ScoreBreakdown, text_truncated: bool) -> Self {
        let result = breakdown.result();
        Self {
            score: result.score,
            is_legal_page: result.is_legal_page,
            threshold: THRESHOLD,
            url_keyword: breakdown.url_keyword.map(str::to_string),
            title_keyword: breakdown.title_keyword.map(str::to_string),
            matched_phrases: breakdown.phrases.iter().map(|p| p.to_string()).collect(),
            text_truncated,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractSignalsResponse {
    pub url: String,
    pub title: String,
    pub text_sample: String,
    pub text_sample_chars: usize,
    pub text_truncated: bool,
}

impl ExtractSignalsResponse {
    pub fn new(signals: PageSignals, text_truncated: bool) -> Self {
        let text_sample_chars = signals.text_sample_chars();
        let (url, title, text_sample) = signals.into_parts();
        Self {
            url,
            title,
            text_sample,
            text_sample_chars,
            text_truncated,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IndicatorSetResponse {
    pub keywords: Vec<String>,
    pub phrases: Vec<String>,
    pub url_weight: u32,
    pub title_weight: u32,
    pub phrase_weight: u32,
    pub threshold: u32,
    pub max_text_sample_chars: usize,
}

impl IndicatorSetResponse {
    pub fn current() -> Self {
        Self {
            keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
            phrases: PHRASES.iter().map(|p| p.to_string()).collect(),
            url_weight: URL_WEIGHT,
            title_weight: TITLE_WEIGHT,
            phrase_weight: PHRASE_WEIGHT,
            threshold: THRESHOLD,
            max_text_sample_chars: MAX_TEXT_SAMPLE_CHARS,
        }
    }
}
