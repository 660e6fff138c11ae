//! Case File Schema
//!
//! Types for TOML case files, plus loading from disk or from the copy
//! embedded in the binary.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Case file bundled with the binary
pub const EMBEDDED_CASES: &str = include_str!("../../resources/cases.toml");

/// Root case file structure (matches TOML)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CaseFile {
    #[serde(default)]
    pub validate: Vec<ValidateCase>,
    #[serde(default)]
    pub all_symbols: Vec<AllSymbolsCase>,
    #[serde(default)]
    pub first: Vec<FirstCase>,
    #[serde(default)]
    pub rejects: Vec<RejectCase>,
}

/// Expected verdict for one name/symbol pair
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ValidateCase {
    pub name: String,
    pub symbol: String,
    pub expected: bool,
}

/// Expected full symbol set for a name (order in the file is irrelevant)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AllSymbolsCase {
    pub name: String,
    pub expected: Vec<String>,
}

/// Expected first symbol, and optionally the symbol count
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FirstCase {
    pub name: String,
    pub expected: String,
    pub count: Option<usize>,
}

/// Input that must be refused. Without a symbol the name goes through
/// enumeration, with one it goes through validation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RejectCase {
    pub name: String,
    pub symbol: Option<String>,
}

impl CaseFile {
    /// Parse case file content
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("malformed case file")
    }

    /// Load a case file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("could not read case file {}", path.display()))?;
        let cases = Self::parse(&content)
            .with_context(|| format!("in case file {}", path.display()))?;
        log::info!("Loaded {} cases from {}", cases.len(), path.display());
        Ok(cases)
    }

    /// The built-in cases
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_CASES)
    }

    /// Total number of cases across all sections
    pub fn len(&self) -> usize {
        self.validate.len() + self.all_symbols.len() + self.first.len() + self.rejects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
