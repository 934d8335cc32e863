//! SAMM conformance suite.
//!
//! Validates everything the workspace produces: the shipped sample models
//! (inventory invariants), the Turtle the serializer emits, and the Rust
//! sources the generator writes.
//!
//! # Entry Point
//!
//! ```no_run
//! use samm_conformance::{run_all, ConformancePaths};
//! use std::path::PathBuf;
//!
//! let paths = ConformancePaths {
//!     generated: vec![PathBuf::from("target/generated/movement/src")],
//! };
//! let report = run_all(&paths);
//! assert!(report.all_passed(), "{}", report.summary());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use std::path::PathBuf;

use samm_metamodel::models;
use samm_metamodel::serializer::turtle::to_turtle;

pub use report::{ConformanceReport, Severity, TestResult};

/// Paths required by the conformance runner.
#[derive(Debug, Default)]
pub struct ConformancePaths {
    /// `src/` directories of generated model crates. Directories that do not
    /// exist produce a warning, not a failure.
    pub generated: Vec<PathBuf>,
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators run in this order:
/// 1. Model inventory (URNs, language tags, characteristics, entities, units)
/// 2. Turtle output structure
/// 3. Generated Rust source standards, for each directory in
///    [`ConformancePaths::generated`]
#[must_use]
pub fn run_all(paths: &ConformancePaths) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    for model in models::all() {
        for result in validators::inventory::validate(model) {
            report.add(result);
        }
    }

    for model in models::all() {
        let turtle = to_turtle(model);
        for result in validators::turtle::validate(model.aspect.name(), &turtle) {
            report.add(result);
        }
    }

    for dir in &paths.generated {
        let label = dir.display().to_string();
        for result in validators::rust_source::validate_dir(&label, dir) {
            report.add(result);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_all_passes_on_the_shipped_models() {
        let report = run_all(&ConformancePaths::default());
        assert!(report.all_passed(), "{}", report.summary());
        // Two models × two validators.
        assert_eq!(report.results.len(), 4);
    }
}
