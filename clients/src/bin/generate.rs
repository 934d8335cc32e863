//! `samm-generate` — Runs the code generator for a sample model and writes
//! the generated crate.
//!
//! **Usage:**
//! ```
//! samm-generate [--model movement|sensor-catalog] [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use samm_metamodel::models;

/// Generate Rust model classes from a sample aspect model.
#[derive(Parser)]
#[command(name = "samm-generate", about = "Generate Rust model classes")]
struct Args {
    /// Which sample model to generate (`movement` or `sensor-catalog`).
    #[arg(long, default_value = "movement")]
    model: String,

    /// Directory of the generated crate (sources go into `<out>/src`).
    #[arg(long, default_value = "target/generated")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let model = match args.model.as_str() {
        "movement" => models::movement::model(),
        "sensor-catalog" => models::sensor_catalog::model(),
        other => bail!("unknown model `{other}`; expected `movement` or `sensor-catalog`"),
    };

    let crate_dir = args.out.join(&args.model);
    let report = samm_codegen::generate(model, &crate_dir.join("src"))?;

    println!(
        "Generated {} structs, {} enums, {} property descriptors for {}",
        report.struct_count,
        report.enum_count,
        report.const_count,
        model.aspect.name()
    );
    for file in &report.files {
        println!("  Written: {}", crate_dir.join("src").join(file).display());
    }

    Ok(())
}
