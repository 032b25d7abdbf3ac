//! The module contains the errors the engine can throw.
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid description: {0}")]
    InvalidDescription(String),
    #[error("Unknown category: \"{0}\"")]
    UnknownCategory(String),
    #[error("Row {index} not found ({len} rows)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidDescription(a), Self::InvalidDescription(b)) => a == b,
            (Self::UnknownCategory(a), Self::UnknownCategory(b)) => a == b,
            (
                Self::IndexOutOfRange { index: a, len: al },
                Self::IndexOutOfRange { index: b, len: bl },
            ) => a == b && al == bl,
            (Self::Io(a), Self::Io(b)) => a.to_string() == b.to_string(),
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
