use thiserror::Error;

#[derive(Error, Debug)]
pub enum QualifierError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Missing arguments: {0}")]
    MissingArguments(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Quote was not modified: {0}")]
    NotModified(String),

    #[error("Quote is too long: {length} characters (max {max})")]
    TooLong { length: usize, max: usize },

    #[error("Quote already exists: {0}")]
    Duplicate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QualifierError>;
