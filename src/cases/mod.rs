//! Self-Test Cases
//!
//! Case files describe expected results; running them yields a report
//! instead of touching any shared failure counter.

pub mod report;
pub mod runner;
pub mod schema;

pub use report::{Outcome, Report};
pub use runner::run;
pub use schema::{AllSymbolsCase, CaseFile, FirstCase, RejectCase, ValidateCase};
