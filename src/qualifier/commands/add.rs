use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QualifierError, Result};
use crate::model::{Quote, QuoteRules, VariantMode};
use crate::store::QuoteStore;
use tracing::{info, warn};

/// Builds a quote from a raw sentence and stores it.
///
/// Construction errors propagate and leave the store untouched. A duplicate is
/// not an error for the caller: it comes back as a warning message.
pub fn run<S: QuoteStore>(
    store: &mut S,
    rules: &QuoteRules,
    sentence: &str,
    mode: VariantMode,
) -> Result<CmdResult> {
    let quote = Quote::new(sentence, mode, rules)?;

    let mut result = CmdResult::default();
    if quote.stutter_dropped() {
        result.add_message(CmdMessage::warning(format!(
            "Too long to stutter within {} characters, kept the w's only.",
            rules.max_quote_length
        )));
    }

    match store.insert(quote.clone()) {
        Ok(()) => {
            info!(%quote, "quote added");
            Ok(result.with_added_quote(quote))
        }
        Err(QualifierError::Duplicate(existing)) => {
            warn!(quote = %existing, "duplicate quote rejected");
            result.add_message(CmdMessage::warning(format!(
                "Quote already exists: {}",
                existing
            )));
            Ok(result)
        }
        Err(e) => Err(e),
    }
}
