//! Element Symbols
//!
//! Validation and enumeration of two-letter element symbols.
//! Pure functions only: no I/O, no shared state.

pub mod enumerate;
pub mod error;
pub mod validate;

pub use enumerate::{all_symbols, first_symbol, symbol_count};
pub use error::{InvalidArgument, Reason};
pub use validate::validate;

/// Number of letters in every symbol
pub const SYMBOL_LEN: usize = 2;

/// Render a letter pair the way symbols are written: "Ab"
pub fn render_symbol(first: char, second: char) -> String {
    [first.to_ascii_uppercase(), second.to_ascii_lowercase()]
        .iter()
        .collect()
}

/// Reject strings containing anything but the letters a-z and A-Z
fn ensure_alphabetic(value: &str) -> Result<(), InvalidArgument> {
    if value.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(InvalidArgument::new(Reason::NonAlphabetic, value))
    }
}

/// Case-fold into a char buffer for index based matching
fn fold(value: &str) -> Vec<char> {
    value.chars().map(|c| c.to_ascii_lowercase()).collect()
}
