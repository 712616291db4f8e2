use crate::model::Quote;

pub mod add;
pub mod list;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Quotes stored by this command.
    pub added_quotes: Vec<Quote>,
    /// Canonical strings returned by a listing.
    pub listed_quotes: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_added_quote(mut self, quote: Quote) -> Self {
        self.added_quotes.push(quote);
        self
    }

    pub fn with_listed_quotes(mut self, quotes: Vec<String>) -> Self {
        self.listed_quotes = quotes;
        self
    }
}
