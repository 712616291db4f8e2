//! # Storage Layer
//!
//! Quotes live behind the [`QuoteStore`] trait so the command layer never
//! depends on a concrete container and tests get a fresh store each.
//!
//! ## Uniqueness
//!
//! Two quotes are the same quote when their canonical strings match (see the
//! `Display` impl of [`Quote`]). The same sentence stored as `normal` and as
//! `uwu` is therefore two distinct entries.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: insertion-ordered, lives as long as the
//!   process. This is the only store; quotes are not persisted.

use crate::error::Result;
use crate::model::Quote;

pub mod memory;

/// Abstract interface for quote storage.
pub trait QuoteStore {
    /// Canonical strings of all stored quotes, in insertion order.
    fn all(&self) -> Result<Vec<String>>;

    /// Store a quote, failing with `QualifierError::Duplicate` if an equal
    /// canonical string is already present.
    fn insert(&mut self, quote: Quote) -> Result<()>;
}
