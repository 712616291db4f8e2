//! # Qualifier Architecture
//!
//! Qualifier keeps quotes. A user types a line such as
//!
//! ```text
//! quote uwu "look at you"
//! ```
//!
//! and the quote is transformed (here to `wook at you`), validated and stored.
//! `quote list` prints everything stored so far.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Prompt loop, printing, exit codes                        │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses a line into a typed Command (parse.rs)            │
//! │  - Dispatches to the command layer                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add: build a Quote (model.rs + variant.rs), store it     │
//! │  - list: fetch canonical strings                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - QuoteStore trait, InMemoryStore                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr; results and
//! user-facing notices come back inside a `CmdResult`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: `add` and `list`
//! - [`parse`]: Tokenizer and mode resolution
//! - [`variant`]: uwu and pig latin transformations
//! - [`model`]: `Quote`, `VariantMode`, `QuoteRules`
//! - [`marks`]: Recognized quotation mark pairs
//! - [`store`]: Storage abstraction and the in-memory store
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod marks;
pub mod model;
pub mod parse;
pub mod store;
pub mod variant;
