//! Shared error types for the weight tracking bot

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid user id: {input}")]
    InvalidUserId { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
