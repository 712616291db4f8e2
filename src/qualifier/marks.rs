//! Recognized quotation marks.
//!
//! A quoted sentence opens with one of the configured opening marks and must
//! end with one of the configured closing marks. Marks come in pairs so that a
//! re-wrapped sentence (pig latin) closes with the partner of the mark it was
//! opened with.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct QuoteMarkPair {
    pub open: char,
    pub close: char,
}

impl QuoteMarkPair {
    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct QuoteMarks {
    pairs: Vec<QuoteMarkPair>,
}

impl Default for QuoteMarks {
    fn default() -> Self {
        Self {
            pairs: vec![
                QuoteMarkPair::new('"', '"'),
                QuoteMarkPair::new('\u{201C}', '\u{201D}'),
            ],
        }
    }
}

impl QuoteMarks {
    pub fn new(pairs: Vec<QuoteMarkPair>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[QuoteMarkPair] {
        &self.pairs
    }

    pub fn is_opening(&self, c: char) -> bool {
        self.pairs.iter().any(|p| p.open == c)
    }

    pub fn is_closing(&self, c: char) -> bool {
        self.pairs.iter().any(|p| p.close == c)
    }

    /// True when `token` starts with an opening mark.
    pub fn opens(&self, token: &str) -> bool {
        token.chars().next().is_some_and(|c| self.is_opening(c))
    }

    /// True when `token` starts with either an opening or a closing mark.
    pub fn starts_quoted(&self, token: &str) -> bool {
        token
            .chars()
            .next()
            .is_some_and(|c| self.is_opening(c) || self.is_closing(c))
    }

    /// True when `token` ends with a closing mark.
    pub fn closes(&self, token: &str) -> bool {
        token.chars().next_back().is_some_and(|c| self.is_closing(c))
    }

    /// The closing partner of `open`. Unknown marks close with themselves.
    pub fn closing_for(&self, open: char) -> char {
        self.pairs
            .iter()
            .find(|p| p.open == open)
            .map(|p| p.close)
            .unwrap_or(open)
    }
}

/// Drops the first and last character of `s`.
///
/// Strings shorter than two characters strip down to nothing.
pub fn strip_marks(s: &str) -> &str {
    let mut chars = s.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return "";
    }
    chars.as_str()
}
