use serde::Serialize;
use std::fmt;

/// Result of one check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub passed: bool,
    pub description: String,
}

/// Collected outcomes of a self-test run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, passed: bool, description: String) {
        if !passed {
            log::debug!("check failed: {}", description);
        }
        self.outcomes.push(Outcome {
            passed,
            description,
        });
    }

    pub fn failures(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed).count()
    }

    pub fn is_success(&self) -> bool {
        self.failures() == 0
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "{}: {}", verdict, self.description)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{}", outcome)?;
        }
        write!(f, "Number of fails: {}", self.failures())
    }
}
