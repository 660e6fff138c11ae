use anyhow::Result;
use element_symbols::cli;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    cli::run()
}
