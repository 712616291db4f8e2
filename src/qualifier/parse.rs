//! Command line parsing.
//!
//! A line is split on whitespace. The first token that opens a quotation
//! swallows the rest of the line, so the sentence always arrives as a single
//! argument:
//!
//! ```text
//! quote uwu "look at you"   ->   ["quote", "uwu", "\"look at you\""]
//! ```
//!
//! [`parse_command`] goes one step further and resolves the arguments into a
//! typed [`Command`] that the API dispatches on.

use crate::error::{QualifierError, Result};
use crate::marks::QuoteMarks;
use crate::model::VariantMode;

pub const COMMAND_NAME: &str = "quote";
const LIST_KEYWORD: &str = "list";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add { sentence: String, mode: VariantMode },
}

/// Splits a raw line into arguments, keeping the quoted sentence whole.
///
/// Case is preserved; comparisons downstream are case-insensitive.
pub fn tokenize(line: &str, marks: &QuoteMarks) -> Result<Vec<String>> {
    let tokens = split_tokens(line, marks);
    let mut arguments = Vec::with_capacity(tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        if marks.opens(token) {
            let span = tokens[i..].join(" ");
            if !marks.closes(&span) {
                return Err(QualifierError::InvalidArguments(format!(
                    "nothing may follow the closing quotation mark: {}",
                    span
                )));
            }
            arguments.push(span);
            break;
        }
        arguments.push(token.to_string());
    }

    match arguments.len() {
        0 => Err(QualifierError::InvalidCommand("empty command".to_string())),
        1 => Err(QualifierError::MissingArguments(format!(
            "{} needs a sentence or `{}`",
            arguments[0], LIST_KEYWORD
        ))),
        _ => Ok(arguments),
    }
}

/// Whitespace split that also breaks `uwu"text` into `uwu` and `"text`,
/// so the space between a mode and its sentence is optional.
fn split_tokens<'a>(line: &'a str, marks: &QuoteMarks) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    let mut words = line.split_whitespace();

    for word in words.by_ref() {
        match word.char_indices().find(|&(_, c)| marks.is_opening(c)) {
            Some((at, _)) if at > 0 => {
                tokens.push(&word[..at]);
                tokens.push(&word[at..]);
                break;
            }
            Some(_) => {
                tokens.push(word);
                break;
            }
            None => tokens.push(word),
        }
    }
    tokens.extend(words);
    tokens
}

/// Picks the raw sentence and the variant mode out of tokenized arguments.
pub fn resolve(arguments: &[String], marks: &QuoteMarks) -> Result<(String, VariantMode)> {
    let second = arguments.get(1).ok_or_else(|| {
        QualifierError::MissingArguments("expected a mode or a quoted sentence".to_string())
    })?;

    if marks.starts_quoted(second) {
        if arguments.len() > 2 {
            return Err(QualifierError::InvalidArguments(format!(
                "unexpected arguments after {}",
                second
            )));
        }
        return Ok((second.clone(), VariantMode::Normal));
    }

    let mode = match second.parse::<VariantMode>()? {
        VariantMode::Normal => {
            return Err(QualifierError::InvalidCommand(format!(
                "unknown mode: {}",
                second
            )))
        }
        mode => mode,
    };

    let sentence = arguments.get(2).ok_or_else(|| {
        QualifierError::MissingArguments(format!("{} needs a quoted sentence", mode))
    })?;
    if !marks.opens(sentence) || arguments.len() > 3 {
        return Err(QualifierError::InvalidArguments(format!(
            "{} expects a single quoted sentence",
            mode
        )));
    }

    Ok((sentence.clone(), mode))
}

/// Parses a full command line.
pub fn parse_command(line: &str, marks: &QuoteMarks) -> Result<Command> {
    let arguments = tokenize(line, marks)?;

    if !arguments[0].eq_ignore_ascii_case(COMMAND_NAME) {
        return Err(QualifierError::InvalidCommand(format!(
            "unknown command: {}",
            arguments[0]
        )));
    }

    if arguments[1].eq_ignore_ascii_case(LIST_KEYWORD) {
        if arguments.len() > 2 {
            return Err(QualifierError::InvalidArguments(format!(
                "`{}` takes no arguments",
                LIST_KEYWORD
            )));
        }
        return Ok(Command::List);
    }

    let (sentence, mode) = resolve(&arguments, marks)?;
    Ok(Command::Add { sentence, mode })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marks() -> QuoteMarks {
        QuoteMarks::default()
    }

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn tokenize_keeps_quoted_sentence_whole() {
        let tokens = tokenize("quote uwu \"hello there\"", &marks()).unwrap();
        assert_eq!(tokens, args(&["quote", "uwu", "\"hello there\""]));
    }

    #[test]
    fn tokenize_collapses_inner_whitespace() {
        let tokens = tokenize("  quote   \"hello    there\"  ", &marks()).unwrap();
        assert_eq!(tokens, args(&["quote", "\"hello there\""]));
    }

    #[test]
    fn tokenize_accepts_curly_quotes() {
        let tokens = tokenize("quote \u{201C}hi there\u{201D}", &marks()).unwrap();
        assert_eq!(tokens, args(&["quote", "\u{201C}hi there\u{201D}"]));
    }

    #[test]
    fn tokenize_preserves_case() {
        let tokens = tokenize("QUOTE UwU \"Hi\"", &marks()).unwrap();
        assert_eq!(tokens, args(&["QUOTE", "UwU", "\"Hi\""]));
    }

    #[test]
    fn tokenize_splits_mode_glued_to_sentence() {
        let tokens = tokenize("quote uwu\"look at you\"", &marks()).unwrap();
        assert_eq!(tokens, args(&["quote", "uwu", "\"look at you\""]));
    }

    #[test]
    fn tokenize_rejects_text_after_closing_mark() {
        let err = tokenize("quote \"hello\" there", &marks()).unwrap_err();
        assert!(matches!(err, QualifierError::InvalidArguments(_)));
    }

    #[test]
    fn tokenize_rejects_unterminated_quote() {
        let err = tokenize("quote \"hello there", &marks()).unwrap_err();
        assert!(matches!(err, QualifierError::InvalidArguments(_)));
    }

    #[test]
    fn tokenize_empty_line_is_invalid_command() {
        assert!(matches!(
            tokenize("   ", &marks()),
            Err(QualifierError::InvalidCommand(_))
        ));
    }

    #[test]
    fn tokenize_single_token_is_missing_arguments() {
        assert!(matches!(
            tokenize("quote", &marks()),
            Err(QualifierError::MissingArguments(_))
        ));
    }

    #[test]
    fn resolve_bare_sentence_is_normal() {
        let (sentence, mode) = resolve(&args(&["quote", "\"hi\""]), &marks()).unwrap();
        assert_eq!(sentence, "\"hi\"");
        assert_eq!(mode, VariantMode::Normal);
    }

    #[test]
    fn resolve_closing_mark_start_is_normal() {
        let (_, mode) = resolve(&args(&["quote", "\u{201D}hi\u{201D}"]), &marks()).unwrap();
        assert_eq!(mode, VariantMode::Normal);
    }

    #[test]
    fn resolve_modes_case_insensitively() {
        let (_, mode) = resolve(&args(&["quote", "UWU", "\"hi\""]), &marks()).unwrap();
        assert_eq!(mode, VariantMode::Uwu);
        let (sentence, mode) =
            resolve(&args(&["quote", "PigLatin", "\"hi\""]), &marks()).unwrap();
        assert_eq!(sentence, "\"hi\"");
        assert_eq!(mode, VariantMode::PigLatin);
    }

    #[test]
    fn resolve_unknown_mode_is_invalid_command() {
        let err = resolve(&args(&["quote", "pirate", "\"hi\""]), &marks()).unwrap_err();
        assert!(matches!(err, QualifierError::InvalidCommand(_)));
    }

    #[test]
    fn resolve_rejects_normal_as_a_keyword() {
        let err = resolve(&args(&["quote", "normal", "\"hi\""]), &marks()).unwrap_err();
        assert!(matches!(err, QualifierError::InvalidCommand(_)));
    }

    #[test]
    fn resolve_mode_without_sentence_is_missing_arguments() {
        let err = resolve(&args(&["quote", "uwu"]), &marks()).unwrap_err();
        assert!(matches!(err, QualifierError::MissingArguments(_)));
    }

    #[test]
    fn resolve_unquoted_sentence_is_invalid_arguments() {
        let err = resolve(&args(&["quote", "uwu", "hello"]), &marks()).unwrap_err();
        assert!(matches!(err, QualifierError::InvalidArguments(_)));
        let err = resolve(&args(&["quote", "uwu", "extra", "\"hi\""]), &marks()).unwrap_err();
        assert!(matches!(err, QualifierError::InvalidArguments(_)));
    }

    #[test]
    fn parse_command_list() {
        assert_eq!(
            parse_command("quote list", &marks()).unwrap(),
            Command::List
        );
        assert_eq!(
            parse_command("Quote LIST", &marks()).unwrap(),
            Command::List
        );
    }

    #[test]
    fn parse_command_list_rejects_extra_arguments() {
        let err = parse_command("quote list all", &marks()).unwrap_err();
        assert!(matches!(err, QualifierError::InvalidArguments(_)));
    }

    #[test]
    fn parse_command_add() {
        assert_eq!(
            parse_command("quote piglatin \"the cat sat\"", &marks()).unwrap(),
            Command::Add {
                sentence: "\"the cat sat\"".to_string(),
                mode: VariantMode::PigLatin,
            }
        );
    }

    #[test]
    fn parse_command_multi_word_sentence_opening_with_closing_mark() {
        // Only opening marks start a span, so the words stay separate.
        let err = parse_command("quote \u{201D}hello there\u{201D}", &marks()).unwrap_err();
        assert!(matches!(err, QualifierError::InvalidArguments(_)));

        assert_eq!(
            parse_command("quote \u{201D}hello\u{201D}", &marks()).unwrap(),
            Command::Add {
                sentence: "\u{201D}hello\u{201D}".to_string(),
                mode: VariantMode::Normal,
            }
        );
    }

    #[test]
    fn parse_command_rejects_other_commands() {
        let err = parse_command("unquote \"hi\"", &marks()).unwrap_err();
        assert!(matches!(err, QualifierError::InvalidCommand(_)));
    }
}
