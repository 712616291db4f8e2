//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for UI clients.
//!
//! It owns the store (injected at construction, never global) and the quote
//! rules, parses raw command lines into a [`Command`](crate::parse::Command),
//! and dispatches to `commands/*.rs`. It performs no I/O: results come back as
//! [`CmdResult`] values for the caller to render.
//!
//! `QualifierApi<S: QuoteStore>` is generic over the storage backend so tests
//! can hand each case its own store.

use crate::commands;
use crate::error::Result;
use crate::model::{QuoteRules, VariantMode};
use crate::parse::{self, Command};
use crate::store::QuoteStore;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

/// The main API facade for qualifier operations.
pub struct QualifierApi<S: QuoteStore> {
    store: S,
    rules: QuoteRules,
}

impl<S: QuoteStore> QualifierApi<S> {
    pub fn new(store: S, rules: QuoteRules) -> Self {
        Self { store, rules }
    }

    /// Parses and executes one line of user input.
    pub fn run_command(&mut self, line: &str) -> Result<CmdResult> {
        match parse::parse_command(line, &self.rules.marks)? {
            Command::List => self.list_quotes(),
            Command::Add { sentence, mode } => self.add_quote(&sentence, mode),
        }
    }

    pub fn add_quote(&mut self, sentence: &str, mode: VariantMode) -> Result<CmdResult> {
        commands::add::run(&mut self.store, &self.rules, sentence, mode)
    }

    pub fn list_quotes(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
