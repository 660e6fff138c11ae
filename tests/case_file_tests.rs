//! Loading and running self-test case files from disk
use element_symbols::cases::{self, CaseFile};
use element_symbols::cli;
use element_symbols::config::{Command, Config, Format};
use std::fs;
use tempfile::TempDir;

const CUSTOM_CASES: &str = r#"
[[validate]]
name = "Xenon"
symbol = "Nn"
expected = true

[[validate]]
name = "Xenon"
symbol = "Xx"
expected = true

[[first]]
name = "Magnesium"
expected = "Ae"
count = 36

[[rejects]]
name = "Xenon"
symbol = "N"
"#;

fn write_cases(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("cases.toml");
    fs::write(&path, content).expect("write cases");
    (dir, path)
}

fn self_test_config(cases: Option<std::path::PathBuf>, format: Format) -> Config {
    Config {
        command: Command::SelfTest,
        format,
        cli_cases: cases,
        user_cases: None,
        log_level: log::LevelFilter::Warn,
    }
}

#[test]
fn test_load_and_run_custom_cases() {
    let (_dir, path) = write_cases(CUSTOM_CASES);
    let cases = CaseFile::load(&path).expect("load cases");
    assert_eq!(cases.len(), 4);

    let report = cases::run(&cases);
    let verdicts: Vec<bool> = report.outcomes.iter().map(|o| o.passed).collect();
    // the Xx expectation is wrong on purpose
    assert_eq!(verdicts, vec![true, false, true, true, true]);
    assert_eq!(report.failures(), 1);
}

#[test]
fn test_missing_case_file_is_reported() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("absent.toml");
    let err = CaseFile::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_malformed_case_file_is_reported() {
    let (_dir, path) = write_cases("[[validate]]\nname = 3\n");
    let err = CaseFile::load(&path).unwrap_err();
    assert!(err.to_string().contains("cases.toml"));
}

#[test]
fn test_cli_self_test_uses_case_file_from_config() {
    let (_dir, path) = write_cases(CUSTOM_CASES);
    let config = self_test_config(Some(path), Format::Text);

    let mut out = Vec::new();
    let success = cli::execute(&config, &b""[..], &mut out).expect("run self-test");
    let out = String::from_utf8(out).unwrap();

    assert!(!success);
    assert!(out.contains("FAIL: validate(Xenon, Xx) -> false"));
    assert!(out.ends_with("Number of fails: 1\n"));
}

#[test]
fn test_cli_self_test_json_summary() {
    let config = self_test_config(None, Format::Json);

    let mut out = Vec::new();
    let success = cli::execute(&config, &b""[..], &mut out).expect("run self-test");
    let value: serde_json::Value = serde_json::from_slice(&out).expect("json output");

    assert!(success);
    assert_eq!(value["failures"], 0);
    assert!(value["outcomes"].as_array().unwrap().len() > 0);
}
