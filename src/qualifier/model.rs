use crate::error::{QualifierError, Result};
use crate::marks::QuoteMarks;
use crate::variant;
use std::fmt;
use std::str::FromStr;

pub const MAX_QUOTE_LENGTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantMode {
    Normal,
    Uwu,
    PigLatin,
}

impl fmt::Display for VariantMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantMode::Normal => write!(f, "normal"),
            VariantMode::Uwu => write!(f, "uwu"),
            VariantMode::PigLatin => write!(f, "piglatin"),
        }
    }
}

impl FromStr for VariantMode {
    type Err = QualifierError;

    /// Parses a mode name. The command parser accepts only the keywords for
    /// variants; `normal` is implied by a bare quoted sentence.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(VariantMode::Normal),
            "uwu" => Ok(VariantMode::Uwu),
            "piglatin" => Ok(VariantMode::PigLatin),
            other => Err(QualifierError::InvalidCommand(format!(
                "unknown mode: {}",
                other
            ))),
        }
    }
}

/// Limits every quote is checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRules {
    pub max_quote_length: usize,
    pub marks: QuoteMarks,
}

impl Default for QuoteRules {
    fn default() -> Self {
        Self {
            max_quote_length: MAX_QUOTE_LENGTH,
            marks: QuoteMarks::default(),
        }
    }
}

/// A validated quote, ready to be stored.
///
/// The text is final: the variant transformation runs once, in [`Quote::new`],
/// and the result is never touched again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    text: String,
    mode: VariantMode,
    stutter_dropped: bool,
}

impl Quote {
    /// Builds a quote from a raw, still quoted, sentence.
    pub fn new(sentence: &str, mode: VariantMode, rules: &QuoteRules) -> Result<Self> {
        let variant = variant::transform(sentence, mode, rules)?;

        let length = variant.text.chars().count();
        if length > rules.max_quote_length {
            return Err(QualifierError::TooLong {
                length,
                max: rules.max_quote_length,
            });
        }

        Ok(Self {
            text: variant.text,
            mode,
            stutter_dropped: variant.stutter_dropped,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> VariantMode {
        self.mode
    }

    /// Whether the uwu stutter had to be left out to respect the length cap.
    pub fn stutter_dropped(&self) -> bool {
        self.stutter_dropped
    }
}

// The canonical form doubles as the store's uniqueness key.
impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quote {{ quote: {}, mode: {} }}", self.text, self.mode)
    }
}
