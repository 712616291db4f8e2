use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::QuoteStore;

pub fn run<S: QuoteStore>(store: &S) -> Result<CmdResult> {
    let quotes = store.all()?;

    let mut result = CmdResult::default();
    if quotes.is_empty() {
        result.add_message(CmdMessage::info("No quotes yet."));
    }
    Ok(result.with_listed_quotes(quotes))
}
