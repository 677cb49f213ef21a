//! Parsing of numeric wizard answers

use thiserror::Error;

use super::texts::KEEP_CURRENT;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("not a whole number: {0:?}")]
    NotWholeNumber(String),

    #[error("not a positive number: {0:?}")]
    NotPositiveNumber(String),
}

/// Answer to a step that offers keeping the current value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldInput<T> {
    Keep,
    Value(T),
}

pub fn parse_age(text: &str) -> Result<u32, InputError> {
    text.trim()
        .parse::<u32>()
        .map_err(|_| InputError::NotWholeNumber(text.to_string()))
}

/// Finite, strictly positive decimal; a decimal comma is accepted
pub fn parse_positive(text: &str) -> Result<f64, InputError> {
    let normalized = text.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(InputError::NotPositiveNumber(text.to_string())),
    }
}

pub fn parse_or_keep<T>(
    text: &str,
    parse: impl FnOnce(&str) -> Result<T, InputError>,
) -> Result<FieldInput<T>, InputError> {
    if text.trim() == KEEP_CURRENT {
        Ok(FieldInput::Keep)
    } else {
        parse(text).map(FieldInput::Value)
    }
}

impl<T> FieldInput<T> {
    pub fn or_current(self, current: T) -> T {
        match self {
            FieldInput::Keep => current,
            FieldInput::Value(value) => value,
        }
    }
}
