//! Error types for owo-typer

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Session already finalized")]
    AlreadyFinalized,

    #[error("Invalid duration: {0} (expected a whole number of seconds, at least 1)")]
    InvalidDuration(String),

    #[error("Invalid answer: {0} (expected y/n)")]
    InvalidAnswer(String),

    #[error("Unknown menu choice: {0}")]
    UnknownMenuChoice(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
