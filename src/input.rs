//! Input Lines
//!
//! Parsing of "Zeddemorium, Zr" style lines, optionally followed by an
//! expected verdict: "Zeddemorium, Zr -> true".

use anyhow::{Result, bail};
use regex::Regex;
use std::sync::OnceLock;

/// One name/symbol pair read from input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckLine {
    pub name: String,
    pub symbol: String,
    pub expected: Option<bool>,
}

fn line_regex() -> &'static Regex {
    static LINE: OnceLock<Regex> = OnceLock::new();
    LINE.get_or_init(|| {
        Regex::new(r"^\s*([^,\s]+)\s*,\s*([^,\s]+?)\s*(?:->\s*(true|false))?\s*$")
            .expect("line pattern is valid")
    })
}

/// Parse one input line; blank lines and `#` comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<CheckLine>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let Some(caps) = line_regex().captures(trimmed) else {
        bail!("expected \"Name, Symbol\" or \"Name, Symbol -> true|false\", got {:?}", trimmed);
    };

    Ok(Some(CheckLine {
        name: caps[1].to_string(),
        symbol: caps[2].to_string(),
        expected: caps.get(3).map(|m| m.as_str() == "true"),
    }))
}
