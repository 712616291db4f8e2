use super::QuoteStore;
use crate::error::{QualifierError, Result};
use crate::model::Quote;

/// In-memory storage. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    quotes: Vec<Quote>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl QuoteStore for InMemoryStore {
    fn all(&self) -> Result<Vec<String>> {
        Ok(self.quotes.iter().map(|q| q.to_string()).collect())
    }

    fn insert(&mut self, quote: Quote) -> Result<()> {
        let key = quote.to_string();
        if self.quotes.iter().any(|q| q.to_string() == key) {
            return Err(QualifierError::Duplicate(key));
        }
        self.quotes.push(quote);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{QuoteRules, VariantMode};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_quotes(mut self, count: usize) -> Self {
            for i in 0..count {
                let sentence = format!("\"quote number {}\"", i + 1);
                self = self.with_quote(&sentence, VariantMode::Normal);
            }
            self
        }

        pub fn with_quote(mut self, sentence: &str, mode: VariantMode) -> Self {
            let quote = Quote::new(sentence, mode, &QuoteRules::default()).unwrap();
            self.store.insert(quote).unwrap();
            self
        }
    }
}
