use thiserror::Error;

use crate::card_engine::validator::ValidationResult;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A card's numbers cannot fit the grid. Recovered by reshuffling inside
    /// the generator; only seen by callers of `arrange`/`deal_series`.
    #[error("Card {card_number}: column {column} has {count} numbers but a card has only 3 rows")]
    StructuralConflict { card_number: u8, column: usize, count: usize },

    #[error("No arrangeable partition found after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },

    #[error("Validation failed: {0}")]
    ValidationFailure(ValidationResult),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        EngineError::InvalidArgument { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
