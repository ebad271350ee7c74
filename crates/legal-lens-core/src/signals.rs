//! Page signal extraction.
//!
//! The host hands over three already-extracted strings (URL, title, visible text).
//! This module normalizes them into [`PageSignals`]: URL and title lowercased in full,
//! visible text cut to the first [`MAX_TEXT_SAMPLE_CHARS`] characters and lowercased.
//! No DOM or network access happens here.

/// Upper bound on the visible-text sample, in characters (Unicode scalar values).
pub const MAX_TEXT_SAMPLE_CHARS: usize = 5000;

/// Normalized signals for a single page evaluation.
///
/// Only [`PageSignals::extract`] builds one, so the sample bound always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSignals {
    url: String,
    title: String,
    text_sample: String,
}

impl PageSignals {
    /// Extract signals from raw page strings. Never fails; empty inputs yield empty fields.
    pub fn extract(raw_url: &str, raw_title: &str, raw_visible_text: &str) -> Self {
        let sample = take_chars(raw_visible_text, MAX_TEXT_SAMPLE_CHARS).to_lowercase();

        // Lowercasing can expand a character (e.g. 'İ'), so clamp once more.
        let text_sample = take_chars(&sample, MAX_TEXT_SAMPLE_CHARS).to_string();

        Self {
            url: raw_url.to_lowercase(),
            title: raw_title.to_lowercase(),
            text_sample,
        }
    }

    /// Lowercased page URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Lowercased page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Lowercased prefix of the visible text, at most `MAX_TEXT_SAMPLE_CHARS` characters.
    pub fn text_sample(&self) -> &str {
        &self.text_sample
    }

    /// Split into `(url, title, text_sample)`.
    pub fn into_parts(self) -> (String, String, String) {
        (self.url, self.title, self.text_sample)
    }

    /// Number of characters in the text sample.
    pub fn text_sample_chars(&self) -> usize {
        self.text_sample.chars().count()
    }

    /// Whether `raw_visible_text` was longer than the sample limit.
    pub fn was_truncated(raw_visible_text: &str) -> bool {
        raw_visible_text.chars().nth(MAX_TEXT_SAMPLE_CHARS).is_some()
    }
}

/// Free-function form of [`PageSignals::extract`].
pub fn extract(raw_url: &str, raw_title: &str, raw_visible_text: &str) -> PageSignals {
    PageSignals::extract(raw_url, raw_title, raw_visible_text)
}

/// Borrow the first `max` characters of `s` without splitting a code point.
fn take_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}
