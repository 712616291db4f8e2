use crate::error::{QualifierError, Result};
use crate::marks::QuoteMarks;
use crate::model::{QuoteRules, MAX_QUOTE_LENGTH};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "> ";

/// How `quote list` prints stored quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    /// One canonical string per line.
    #[default]
    Plain,
    /// A numbered markdown list, ready to paste into a chat.
    Markdown,
}

/// Configuration for qualifier, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct QualifierConfig {
    #[serde(default = "default_max_quote_length")]
    pub max_quote_length: usize,

    /// Quotation mark pairs a sentence may be wrapped in.
    #[serde(default)]
    pub quote_marks: QuoteMarks,

    /// Lines that end the prompt loop. Matched exactly.
    #[serde(default = "default_exit_commands")]
    pub exit_commands: Vec<String>,

    #[serde(default = "default_prompt")]
    pub prompt: String,

    #[serde(default)]
    pub list_format: ListFormat,
}

fn default_max_quote_length() -> usize {
    MAX_QUOTE_LENGTH
}

fn default_exit_commands() -> Vec<String> {
    vec!["quit".to_string(), "q".to_string(), "exit".to_string()]
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for QualifierConfig {
    fn default() -> Self {
        Self {
            max_quote_length: MAX_QUOTE_LENGTH,
            quote_marks: QuoteMarks::default(),
            exit_commands: default_exit_commands(),
            prompt: default_prompt(),
            list_format: ListFormat::default(),
        }
    }
}

impl QualifierConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: QualifierConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_quote_length == 0 {
            return Err(QualifierError::Config(
                "max_quote_length must be at least 1".to_string(),
            ));
        }
        if self.quote_marks.pairs().is_empty() {
            return Err(QualifierError::Config(
                "quote_marks needs at least one pair".to_string(),
            ));
        }
        Ok(())
    }

    pub fn rules(&self) -> QuoteRules {
        QuoteRules {
            max_quote_length: self.max_quote_length,
            marks: self.quote_marks.clone(),
        }
    }

    pub fn is_exit_command(&self, line: &str) -> bool {
        self.exit_commands.iter().any(|c| c == line)
    }
}
