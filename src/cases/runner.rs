//! Case Runner
//!
//! Runs every case of a case file against the symbol functions.

use std::collections::BTreeSet;

use super::report::Report;
use super::schema::{AllSymbolsCase, CaseFile, FirstCase, RejectCase, ValidateCase};
use crate::symbols::{self, InvalidArgument};

/// Run all cases, in file section order
pub fn run(cases: &CaseFile) -> Report {
    let mut report = Report::new();

    for case in &cases.validate {
        run_validate(case, &mut report);
    }
    for case in &cases.all_symbols {
        run_all_symbols(case, &mut report);
    }
    for case in &cases.first {
        run_first(case, &mut report);
    }
    for case in &cases.rejects {
        run_reject(case, &mut report);
    }

    log::info!(
        "{} checks run, {} failed",
        report.outcomes.len(),
        report.failures()
    );
    report
}

fn run_validate(case: &ValidateCase, report: &mut Report) {
    let call = format!("validate({}, {})", case.name, case.symbol);
    match symbols::validate(&case.name, &case.symbol) {
        Ok(valid) => report.record(valid == case.expected, format!("{} -> {}", call, valid)),
        Err(e) => report.record(false, raised(&call, &e)),
    }
}

fn run_all_symbols(case: &AllSymbolsCase, report: &mut Report) {
    let call = format!("all_symbols({})", case.name);
    match symbols::all_symbols(&case.name) {
        Ok(made) => {
            let expected: BTreeSet<String> = case.expected.iter().cloned().collect();
            report.record(made == expected, format!("{} = {}", call, list(&made)));
        }
        Err(e) => report.record(false, raised(&call, &e)),
    }
}

fn run_first(case: &FirstCase, report: &mut Report) {
    let call = format!("first_symbol({})", case.name);
    match symbols::first_symbol(&case.name) {
        Ok(first) => report.record(first == case.expected, format!("{} = {}", call, first)),
        Err(e) => report.record(false, raised(&call, &e)),
    }

    let Some(expected) = case.count else {
        return;
    };
    let call = format!("symbol_count({})", case.name);
    match symbols::symbol_count(&case.name) {
        Ok(count) => report.record(count == expected, format!("{} = {}", call, count)),
        Err(e) => report.record(false, raised(&call, &e)),
    }
}

fn run_reject(case: &RejectCase, report: &mut Report) {
    let (call, result) = match &case.symbol {
        Some(symbol) => (
            format!("validate({}, {})", case.name, symbol),
            symbols::validate(&case.name, symbol).map(|_| ()),
        ),
        None => (
            format!("all_symbols({:?})", case.name),
            symbols::all_symbols(&case.name).map(|_| ()),
        ),
    };

    match result {
        Ok(()) => report.record(false, format!("{} was accepted", call)),
        Err(e) => report.record(true, format!("{} rejected: {}", call, e)),
    }
}

fn raised(call: &str, error: &InvalidArgument) -> String {
    format!("{} raised {}", call, error)
}

fn list(symbols: &BTreeSet<String>) -> String {
    let joined: Vec<&str> = symbols.iter().map(String::as_str).collect();
    format!("[{}]", joined.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_cases_all_pass() {
        let cases = CaseFile::embedded().expect("embedded cases");
        let report = run(&cases);
        for outcome in &report.outcomes {
            assert!(outcome.passed, "{}", outcome);
        }
        // three first cases carry a count, so they produce two outcomes
        assert_eq!(report.outcomes.len(), cases.len() + 3);
    }

    #[test]
    fn test_wrong_expectation_is_reported() {
        let cases = CaseFile {
            validate: vec![ValidateCase {
                name: "Stantzon".to_string(),
                symbol: "Zt".to_string(),
                expected: true,
            }],
            ..CaseFile::default()
        };
        let report = run(&cases);
        assert_eq!(report.failures(), 1);
        assert_eq!(report.outcomes[0].description, "validate(Stantzon, Zt) -> false");
    }

    #[test]
    fn test_accepted_reject_case_fails() {
        let cases = CaseFile {
            rejects: vec![RejectCase {
                name: "Zed".to_string(),
                symbol: None,
            }],
            ..CaseFile::default()
        };
        let report = run(&cases);
        assert!(!report.is_success());
        assert_eq!(report.outcomes[0].description, "all_symbols(\"Zed\") was accepted");
    }

    #[test]
    fn test_first_cases_use_derived_queries() {
        let cases = CaseFile {
            first: vec![
                FirstCase {
                    name: "Zuulon".to_string(),
                    expected: "Ln".to_string(),
                    count: Some(11),
                },
                FirstCase {
                    name: "Zuu".to_string(),
                    expected: "Zu".to_string(),
                    count: Some(3),
                },
            ],
            ..CaseFile::default()
        };
        let report = run(&cases);
        let lines: Vec<String> = report.outcomes.iter().map(|o| o.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "PASS: first_symbol(Zuulon) = Ln",
                "PASS: symbol_count(Zuulon) = 11",
                "FAIL: first_symbol(Zuu) = Uu",
                "FAIL: symbol_count(Zuu) = 2",
            ]
        );
    }

    #[test]
    fn test_invalid_input_in_positive_case_fails() {
        let cases = CaseFile {
            first: vec![FirstCase {
                name: "Z".to_string(),
                expected: "Z".to_string(),
                count: Some(1),
            }],
            ..CaseFile::default()
        };
        let report = run(&cases);
        assert_eq!(report.failures(), 2);
        assert_eq!(
            report.outcomes[0].description,
            "first_symbol(Z) raised invalid name: \"Z\""
        );
        assert_eq!(
            report.outcomes[1].description,
            "symbol_count(Z) raised invalid name: \"Z\""
        );
    }
}
