//! `samm-conformance` — Runs the conformance suite and reports the results.
//!
//! Exits non-zero if any check fails.
//!
//! **Usage:**
//! ```
//! samm-conformance [--generated <src dir>]...
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use samm_conformance::{run_all, ConformancePaths, Severity};

/// Run the conformance suite.
#[derive(Parser)]
#[command(name = "samm-conformance", about = "Run the SAMM conformance suite")]
struct Args {
    /// `src/` directories of generated crates to validate. May be repeated.
    #[arg(long = "generated")]
    generated: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let paths = ConformancePaths {
        generated: args.generated,
    };

    let report = run_all(&paths);

    for result in &report.results {
        let marker = match result.severity {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        };
        println!("[{marker}] {}: {}", result.validator, result.message);
        for detail in &result.details {
            println!("         - {detail}");
        }
    }
    println!("{}", report.summary());

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
