use std::fmt;

use thiserror::Error;

/// What was wrong with a rejected argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Symbol is not exactly two letters
    SymbolLength,
    /// Name is shorter than a symbol
    NameTooShort,
    /// Name or symbol contains a non-letter
    NonAlphabetic,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Reason::SymbolLength => "invalid symbol",
            Reason::NameTooShort => "invalid name",
            Reason::NonAlphabetic => "invalid value",
        };
        f.write_str(text)
    }
}

/// The single failure raised by the symbol functions on malformed input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}: {value:?}")]
pub struct InvalidArgument {
    pub reason: Reason,
    pub value: String,
}

impl InvalidArgument {
    pub fn new(reason: Reason, value: impl Into<String>) -> Self {
        Self {
            reason,
            value: value.into(),
        }
    }
}
