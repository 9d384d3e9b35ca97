//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// The time string does not match the `YYYY-MM-DD HH:MM` pattern.
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),

    /// The fields matched the pattern but name no real UTC instant
    /// (month 13, Feb 30, hour 24, ...).
    #[error("Unrepresentable date: {0}")]
    Conversion(String),

    /// A boundary input violated the call contract (e.g., empty candidate time).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
