//! `samm-build` — Serializes the shipped sample models and writes the
//! artifacts to the output directory.
//!
//! **Outputs, per model:**
//! - `<out>/<aspect>.ttl` — the aspect model in Turtle
//! - `<out>/<aspect>-payload.json` — the example JSON payload
//!
//! **Usage:**
//! ```
//! samm-build [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use samm_metamodel::models;
use samm_metamodel::serializer::{payload, turtle};

/// Build the aspect model artifacts.
#[derive(Parser)]
#[command(name = "samm-build", about = "Build aspect model artifacts")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    for model in models::all() {
        let name = model.aspect.name();
        println!(
            "{name} (urn:samm:{}:{}): {} properties, {} entities, {} characteristics",
            model.namespace.namespace,
            model.namespace.version,
            model.property_count(),
            model.entity_count(),
            model.characteristic_count()
        );

        let stem = name.to_lowercase();

        // Turtle
        let ttl_path = out.join(format!("{stem}.ttl"));
        fs::write(&ttl_path, turtle::to_turtle(model))
            .with_context(|| format!("Failed to write {}", ttl_path.display()))?;
        println!("  Written: {}", ttl_path.display());

        // Example payload
        let json_path = out.join(format!("{stem}-payload.json"));
        let json_value = payload::to_sample_payload(model);
        let json_str = serde_json::to_string_pretty(&json_value)
            .context("Failed to serialize the example payload")?;
        fs::write(&json_path, &json_str)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        println!("  Written: {}", json_path.display());
    }

    Ok(())
}
