//! Symbol Validator
//!
//! A symbol is valid when its first letter occurs in the name and its second
//! letter occurs somewhere after that first occurrence.

use super::{InvalidArgument, Reason, SYMBOL_LEN, ensure_alphabetic, fold};

/// Check whether `symbol` is a valid symbol for the element `name`
///
/// Matching is case-insensitive. Only the first occurrence of the symbol's
/// first letter is considered, so a repeated letter symbol such as "Nn" needs
/// the letter twice in the name.
pub fn validate(name: &str, symbol: &str) -> Result<bool, InvalidArgument> {
    check_arguments(name, symbol)?;

    let name = fold(name);
    let symbol = fold(symbol);
    let (first, second) = (symbol[0], symbol[1]);

    let valid = match name.iter().position(|&c| c == first) {
        Some(start) => name[start + 1..].contains(&second),
        None => false,
    };

    log::trace!("validate({:?}, {:?}) -> {}", name, symbol, valid);
    Ok(valid)
}

fn check_arguments(name: &str, symbol: &str) -> Result<(), InvalidArgument> {
    let symbol_len = symbol.chars().count();
    if symbol_len != SYMBOL_LEN {
        return Err(InvalidArgument::new(Reason::SymbolLength, symbol));
    }
    if name.chars().count() < symbol_len {
        return Err(InvalidArgument::new(Reason::NameTooShort, name));
    }
    ensure_alphabetic(name)?;
    ensure_alphabetic(symbol)
}
