use thiserror::Error;

use crate::source::FetchError;

/// Validation errors for domain parsing and construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("day must be an ISO calendar date (YYYY-MM-DD): '{value}'")]
    InvalidDay { value: String },

    #[error("closing price must be finite")]
    NonFiniteClose,
    #[error("closing price must be positive")]
    NonPositiveClose,
}

/// Failures while bringing a game up. Any of these leaves the game `Idle`.
#[derive(Debug, Error)]
pub enum StartError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("an Alpha Vantage API key is required to fetch quotes")]
    MissingApiKey,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no usable closing prices in the provider payload")]
    NoUsableData,

    #[error("not enough recent data to pick a starting day; try another ticker")]
    NoEligibleStart,

    #[error("start index {index} is outside the playable range")]
    InvalidStartIndex { index: usize },

    #[error("fetch result superseded by a newer request; discarded")]
    Superseded,
}

/// Failures of the guess transition.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    #[error("no game is active")]
    NotActive,
}
