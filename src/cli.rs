//! Command-line front end
//!
//! Dispatches subcommands to the symbol functions and renders results as
//! text or JSON.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use crate::cases::{self, CaseFile, Report};
use crate::config::{Command, Config, Format};
use crate::input;
use crate::symbols;

#[derive(Debug, Serialize)]
struct Verdict<'a> {
    name: &'a str,
    symbol: &'a str,
    valid: bool,
}

#[derive(Debug, Serialize)]
struct SymbolSet<'a> {
    name: &'a str,
    symbols: &'a BTreeSet<String>,
}

#[derive(Debug, Serialize)]
struct FirstSymbol<'a> {
    name: &'a str,
    first: &'a str,
}

#[derive(Debug, Serialize)]
struct SymbolCount<'a> {
    name: &'a str,
    count: usize,
}

/// One evaluated line of `check` input
#[derive(Debug, Serialize)]
struct CheckResult {
    name: String,
    symbol: String,
    valid: Option<bool>,
    error: Option<String>,
    expected: Option<bool>,
    passed: bool,
}

#[derive(Debug, Serialize)]
struct SelfTestSummary<'a> {
    #[serde(flatten)]
    report: &'a Report,
    failures: usize,
}

/// Entry point of the `element-symbols` binary
pub fn run() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.to_string()),
    )
    .init();
    log::debug!("{:?}", config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let success = execute(&config, stdin.lock(), &mut stdout)?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Run the configured command. Returns `false` when a check or self-test
/// case failed.
pub fn execute(config: &Config, input: impl BufRead, out: &mut impl Write) -> Result<bool> {
    let format = config.format;

    match &config.command {
        Command::Validate { name, symbol } => {
            let valid = symbols::validate(name, symbol)?;
            match format {
                Format::Text => writeln!(out, "{}, {} -> {}", name, symbol, valid)?,
                Format::Json => write_json(out, &Verdict { name, symbol, valid })?,
            }
            Ok(true)
        }
        Command::All { name } => {
            let symbols = symbols::all_symbols(name)?;
            match format {
                Format::Text => {
                    let list: Vec<&str> = symbols.iter().map(String::as_str).collect();
                    writeln!(out, "{}", list.join(" "))?
                }
                Format::Json => write_json(out, &SymbolSet { name, symbols: &symbols })?,
            }
            Ok(true)
        }
        Command::First { name } => {
            let first = symbols::first_symbol(name)?;
            match format {
                Format::Text => writeln!(out, "{}", first)?,
                Format::Json => write_json(out, &FirstSymbol { name, first: &first })?,
            }
            Ok(true)
        }
        Command::Count { name } => {
            let count = symbols::symbol_count(name)?;
            match format {
                Format::Text => writeln!(out, "{}", count)?,
                Format::Json => write_json(out, &SymbolCount { name, count })?,
            }
            Ok(true)
        }
        Command::Check => check(input, out, format),
        Command::SelfTest => self_test(config, out),
    }
}

fn check(input: impl BufRead, out: &mut impl Write, format: Format) -> Result<bool> {
    let mut results = Vec::new();

    for (line_num, line) in input.lines().enumerate() {
        let line = line.context("could not read input")?;
        let parsed = input::parse_line(&line).with_context(|| format!("line {}", line_num + 1))?;
        let Some(parsed) = parsed else {
            continue;
        };

        let result = evaluate(parsed);
        if format == Format::Text {
            writeln!(out, "{}", render_check(&result))?;
        }
        results.push(result);
    }

    if format == Format::Json {
        write_json(out, &results)?;
    }

    Ok(results.iter().all(|r| r.passed))
}

fn evaluate(line: input::CheckLine) -> CheckResult {
    let (valid, error) = match symbols::validate(&line.name, &line.symbol) {
        Ok(valid) => (Some(valid), None),
        Err(e) => {
            log::warn!("{}, {}: {}", line.name, line.symbol, e);
            (None, Some(e.to_string()))
        }
    };
    let passed = match (valid, line.expected) {
        (Some(valid), Some(expected)) => valid == expected,
        (Some(_), None) => true,
        (None, _) => false,
    };

    CheckResult {
        name: line.name,
        symbol: line.symbol,
        valid,
        error,
        expected: line.expected,
        passed,
    }
}

fn render_check(result: &CheckResult) -> String {
    let verdict = match (&result.valid, &result.error) {
        (Some(valid), _) => valid.to_string(),
        (None, Some(error)) => error.clone(),
        (None, None) => String::new(),
    };
    let line = format!("{}, {} -> {}", result.name, result.symbol, verdict);
    match (result.expected, result.passed) {
        (None, true) => line,
        (_, true) => format!("PASS: {}", line),
        (_, false) => format!("FAIL: {}", line),
    }
}

fn self_test(config: &Config, out: &mut impl Write) -> Result<bool> {
    let cases = match config.get_effective_cases() {
        Some(path) => CaseFile::load(&path)?,
        None => CaseFile::embedded()?,
    };
    if cases.is_empty() {
        log::warn!("case file contains no cases");
    }

    let report = cases::run(&cases);
    match config.format {
        Format::Text => writeln!(out, "{}", report)?,
        Format::Json => write_json(
            out,
            &SelfTestSummary {
                report: &report,
                failures: report.failures(),
            },
        )?,
    }
    Ok(report.is_success())
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
