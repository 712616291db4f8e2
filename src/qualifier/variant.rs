//! # Variant Transformations
//!
//! A quote is stored in one of three variants:
//!
//! - **normal**: the sentence as typed, without its quotation marks.
//! - **uwu**: `l`/`r` become `w`, and words starting with `u` stutter
//!   (`up` -> `u-up`).
//! - **piglatin**: each word's leading consonant cluster moves to its end
//!   followed by `ay`; words starting with a vowel just get `way`.
//!
//! Transformations either change the sentence or fail with
//! [`QualifierError::NotModified`]. Storing a "variant" identical to its input
//! would only be a normal quote with the wrong label.
//!
//! Quotation marks are stripped for normal and uwu quotes. Pig latin quotes
//! keep them: the translated sentence is re-wrapped in the pair it was typed
//! with.

use crate::error::{QualifierError, Result};
use crate::marks::strip_marks;
use crate::model::{QuoteRules, VariantMode};
use tracing::{debug, info};

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
const TRAILING_PUNCTUATION: [char; 4] = [',', '.', '!', '?'];

/// Output of a transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub text: String,
    /// Set when the uwu stutter was left out because it broke the length cap.
    pub stutter_dropped: bool,
}

impl Variant {
    fn plain(text: String) -> Self {
        Self {
            text,
            stutter_dropped: false,
        }
    }
}

pub fn transform(sentence: &str, mode: VariantMode, rules: &QuoteRules) -> Result<Variant> {
    debug!(%mode, sentence, "transforming quote");
    match mode {
        VariantMode::Normal => Ok(Variant::plain(strip_marks(sentence).to_string())),
        VariantMode::Uwu => uwuify(strip_marks(sentence), rules.max_quote_length),
        VariantMode::PigLatin => piglatinify(sentence, rules).map(Variant::plain),
    }
}

fn uwuify(sentence: &str, max_len: usize) -> Result<Variant> {
    let substituted: String = sentence
        .chars()
        .map(|c| match c {
            'l' | 'r' => 'w',
            'L' | 'R' => 'W',
            other => other,
        })
        .collect();
    let stuttered = stutter(&substituted);

    let variant = if stuttered != substituted && stuttered.chars().count() > max_len {
        info!(
            max_len,
            "uwu stutter exceeds the length cap, keeping substitutions only"
        );
        Variant {
            text: substituted,
            stutter_dropped: true,
        }
    } else {
        Variant::plain(stuttered)
    };

    if variant.text == sentence {
        return Err(QualifierError::NotModified(
            "uwu needs an l, r or a word starting with u".to_string(),
        ));
    }
    Ok(variant)
}

/// Doubles the leading `u` of every word: `up` -> `u-up`, `Up` -> `U-Up`.
fn stutter(sentence: &str) -> String {
    let mut out = String::with_capacity(sentence.len() + 8);
    let mut at_word_start = true;
    for c in sentence.chars() {
        if at_word_start && matches!(c, 'u' | 'U') {
            out.push(c);
            out.push('-');
        }
        out.push(c);
        at_word_start = c.is_whitespace();
    }
    out
}

fn piglatinify(sentence: &str, rules: &QuoteRules) -> Result<String> {
    let Some(open) = sentence.chars().next() else {
        return Err(QualifierError::NotModified(
            "there is nothing to translate".to_string(),
        ));
    };

    let words: Vec<&str> = strip_marks(sentence).split_whitespace().collect();
    let mut translated: Vec<String> = words.iter().filter_map(|w| translate_word(w)).collect();

    if translated.is_empty() {
        return Err(QualifierError::NotModified(
            "there is nothing to translate".to_string(),
        ));
    }
    if translated.len() < words.len() {
        return Err(QualifierError::NotModified(
            "every word needs a vowel to be translated".to_string(),
        ));
    }

    let joined_len = translated.iter().map(|w| w.chars().count()).sum::<usize>()
        + translated.len()
        - 1;
    if joined_len > rules.max_quote_length {
        return Err(QualifierError::NotModified(format!(
            "translation is {} characters, over the {} character cap",
            joined_len, rules.max_quote_length
        )));
    }

    translated[0] = title_case(&translated[0]);
    let close = rules.marks.closing_for(open);
    Ok(format!("{}{}{}", open, translated.join(" "), close))
}

/// Translates a single word, keeping trailing punctuation in place.
///
/// Returns `None` for words without a vowel.
fn translate_word(word: &str) -> Option<String> {
    let (bare, punctuation) = match word.chars().next_back() {
        Some(c) if TRAILING_PUNCTUATION.contains(&c) => {
            (&word[..word.len() - c.len_utf8()], Some(c))
        }
        _ => (word, None),
    };

    let first = bare.chars().next()?;
    let mut out = if is_vowel(first) {
        format!("{}way", bare)
    } else {
        let (i, _) = bare.char_indices().find(|&(_, c)| is_vowel(c))?;
        format!("{}{}ay", &bare[i..], &bare[..i])
    };

    if let Some(p) = punctuation {
        out.push(p);
    }
    Some(out)
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

fn title_case(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
