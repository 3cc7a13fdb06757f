use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cannot generate a number with {0} unique digits (expected 1 to 10)")]
    InvalidDigitCount(usize),
}

/// The first structural rule a guess breaks, checked in declaration order.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    #[error("Input must contain only digits.")]
    NonDigit,
    #[error("Input must be exactly {expected} digits long.")]
    WrongLength { expected: usize },
    #[error("The number must not start with zero.")]
    LeadingZero,
    #[error("The number must contain {expected} unique digits.")]
    DuplicateDigits { expected: usize },
}

/// Why a line of the statistics file could not be turned into a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordParseError {
    #[error("expected 2 comma-separated fields, found {0}")]
    FieldCount(usize),
    #[error("invalid attempt count {0:?}")]
    Attempts(String),
    #[error("invalid duration {0:?}")]
    Duration(String),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before the secret number was guessed")]
    InputClosed,
}
