use thiserror::Error;

use crate::core::UnknownCode;

/// Main error type for the card engine
#[derive(Error, Debug)]
pub enum CardEngineError {
    /// Reading a card dump failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A card carries a code with no known meaning
    #[error("Card {card_id} has {source}")]
    InvalidCard {
        card_id: i64,
        #[source]
        source: UnknownCode,
    },

    /// Card source errors
    #[error("Source '{name}' error: {message}")]
    Source { name: String, message: String },

    /// No results found
    #[error("No cards found for query: {0}")]
    NoResults(String),

    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for CardEngineError {
    fn from(s: String) -> Self {
        CardEngineError::Other(s)
    }
}

impl From<&str> for CardEngineError {
    fn from(s: &str) -> Self {
        CardEngineError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CardEngineError>;
