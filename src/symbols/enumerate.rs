//! Symbol Enumerator
//!
//! Generates every symbol derivable from a name, deduplicated and sorted.

use std::collections::BTreeSet;

use super::{InvalidArgument, Reason, SYMBOL_LEN, ensure_alphabetic, fold, render_symbol};

/// All valid symbols for `name`, in alphabetical order
///
/// Each leading letter is paired with every letter to its right. Pairs that
/// render to the same text collapse into one entry.
pub fn all_symbols(name: &str) -> Result<BTreeSet<String>, InvalidArgument> {
    check_name(name)?;

    let letters = fold(name);
    let mut symbols = BTreeSet::new();

    for (i, &lead) in letters.iter().enumerate() {
        for &follow in &letters[i + 1..] {
            symbols.insert(render_symbol(lead, follow));
        }
    }

    log::debug!("{} distinct symbols for {:?}", symbols.len(), name);
    Ok(symbols)
}

/// The alphabetically first valid symbol for `name`
pub fn first_symbol(name: &str) -> Result<String, InvalidArgument> {
    all_symbols(name)?
        .pop_first()
        .ok_or_else(|| InvalidArgument::new(Reason::NameTooShort, name))
}

/// Number of distinct valid symbols for `name`
pub fn symbol_count(name: &str) -> Result<usize, InvalidArgument> {
    Ok(all_symbols(name)?.len())
}

fn check_name(name: &str) -> Result<(), InvalidArgument> {
    if name.chars().count() < SYMBOL_LEN {
        return Err(InvalidArgument::new(Reason::NameTooShort, name));
    }
    ensure_alphabetic(name)
}
