//! SAMM code generator.
//!
//! Reads an in-memory [`AspectModel`] and generates a self-contained crate of
//! statically-typed model classes: one struct per aspect and concrete entity,
//! one enum per string-valued enumeration characteristic, and a `Meta*`
//! companion per class implementing the `samm-runtime` typing contracts.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod emit;
pub mod enums;
pub mod mapping;
pub mod meta;
pub mod structs;

use std::fmt::Write as FmtWrite;
use std::path::Path;

use anyhow::Result;
use samm_metamodel::AspectModel;

use emit::RustFile;
use enums::DetectedEnum;
use mapping::to_snake_case;
use structs::GeneratedClass;

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of structs generated.
    pub struct_count: usize,
    /// Number of struct fields generated.
    pub field_count: usize,
    /// Number of enums generated.
    pub enum_count: usize,
    /// Number of typed property constants generated.
    pub const_count: usize,
    /// Files written, relative to the output directory.
    pub files: Vec<String>,
}

/// Generates the complete model crate source into `out_dir` (the `src`
/// directory of the generated crate). The crate manifest and README are
/// written next to it.
///
/// # Errors
///
/// Returns an error if any file cannot be written.
pub fn generate(model: &AspectModel, out_dir: &Path) -> Result<GenerationReport> {
    let mut report = GenerationReport::default();
    let detected = enums::detect_enums(model);
    let classes = structs::classes(model);
    let module_name = to_snake_case(model.aspect.name());

    report.struct_count = classes.len();
    report.enum_count = detected.len();
    report.field_count = classes.iter().map(|c| c.all.len()).sum();
    report.const_count = report.field_count;

    // 1. enums.rs
    if !detected.is_empty() {
        let content = enums::generate_enums_file(model, &detected);
        emit::write_file(&out_dir.join("enums.rs"), &content)?;
        report.files.push("enums.rs".to_string());
    }

    // 2. The aspect module: structs followed by their meta companions.
    let content = generate_model_module(model, &classes, &detected);
    emit::write_file(&out_dir.join(format!("{module_name}.rs")), &content)?;
    report.files.push(format!("{module_name}.rs"));

    // 3. lib.rs
    let lib_content = generate_lib_rs(model, &module_name, !detected.is_empty());
    emit::write_file(&out_dir.join("lib.rs"), &lib_content)?;
    report.files.push("lib.rs".to_string());

    // 4. Crate manifest and README next to src/.
    if let Some(crate_dir) = out_dir.parent() {
        emit::write_file(&crate_dir.join("Cargo.toml"), &generate_manifest(model))?;
        emit::write_file(&crate_dir.join("README.md"), &generate_readme(model, &report))?;
    }

    Ok(report)
}

/// Generates the aspect module content: structs, then meta companions.
#[must_use]
pub fn generate_model_module(
    model: &AspectModel,
    classes: &[GeneratedClass<'_>],
    detected: &[DetectedEnum],
) -> String {
    let enum_names = enums::enum_names(detected);
    let aspect_name = model.aspect.name();

    let mut f = RustFile::new(&format!(
        "Generated model classes for the `{aspect_name}` aspect.\n\
         \n\
         Source model: `{}` (meta-model {}).\n\
         Regenerate with `samm-generate` instead of editing.",
        model.aspect.urn, model.meta_model_version
    ));

    // Body first; imports depend on what the body references.
    let mut body = RustFile {
        buf: String::with_capacity(32 * 1024),
    };
    for class in classes {
        structs::generate_struct(&mut body, model, class, &enum_names);
    }
    for class in classes {
        meta::generate_meta_class(&mut body, model, class, &enum_names);
    }
    let body = body.finish();

    let used_enums: Vec<&str> = enum_names
        .iter()
        .map(|(_, name)| name.as_str())
        .filter(|name| body.contains(name))
        .collect();

    f.line("use serde::{Deserialize, Serialize};");
    f.blank();
    f.line(
        "use samm_runtime::{CharacteristicDesc, LangString, PropertyContainer, PropertyDesc, \
         StaticMetaClass, StaticProperty};",
    );
    if !used_enums.is_empty() {
        f.blank();
        f.line(&format!("use crate::enums::{{{}}};", used_enums.join(", ")));
    }
    f.blank();
    f.buf.push_str(&body);
    f.finish()
}

/// Generates the crate root `lib.rs` of the generated crate.
#[must_use]
pub fn generate_lib_rs(model: &AspectModel, module_name: &str, has_enums: bool) -> String {
    let mut f = RustFile::new(&format!(
        "Generated model classes for the {} aspect model.\n\
         \n\
         Namespace: `urn:samm:{}:{}`\n\
         Meta-model: {}",
        model.aspect.name(),
        model.namespace.namespace,
        model.namespace.version,
        model.meta_model_version
    ));

    f.line("#![deny(missing_docs)]");
    f.blank();
    if has_enums {
        f.doc_comment("Generated enumerations.");
        f.line("pub mod enums;");
    }
    f.doc_comment("Generated model classes and their meta-classes.");
    let _ = writeln!(f.buf, "pub mod {module_name};");
    f.blank();
    if has_enums {
        f.line("pub use enums::*;");
    }
    let _ = writeln!(f.buf, "pub use {module_name}::*;");
    f.finish()
}

/// Generates the manifest of the generated crate.
#[must_use]
pub fn generate_manifest(model: &AspectModel) -> String {
    let package = format!(
        "{}-model",
        to_snake_case(model.aspect.name()).replace('_', "-")
    );
    format!(
        r#"[package]
name = "{package}"
version = "{version}"
edition = "2021"
description = "Generated model classes for the {aspect} aspect model"

[dependencies]
samm-runtime = {{ version = "0.2.0", features = ["serde"] }}
serde = {{ version = "1", features = ["derive"] }}
"#,
        version = model.namespace.version,
        aspect = model.aspect.name(),
    )
}

/// Generates the README of the generated crate.
#[must_use]
pub fn generate_readme(model: &AspectModel, report: &GenerationReport) -> String {
    format!(
        r#"# {aspect} model classes

Generated from `{urn}` (meta-model {meta_version}).

## Contents

- {structs} model structs
- {enums} enumerations
- {consts} typed property descriptors

Regenerate with:

```
samm-generate --model {model_arg} --out <crate dir>
```
"#,
        aspect = model.aspect.name(),
        urn = model.aspect.urn,
        meta_version = model.meta_model_version,
        structs = report.struct_count,
        enums = report.enum_count,
        consts = report.const_count,
        model_arg = to_snake_case(model.aspect.name()).replace('_', "-"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use samm_metamodel::models;

    #[test]
    fn module_imports_only_used_enums() {
        let model = models::movement::model();
        let detected = enums::detect_enums(model);
        let classes = structs::classes(model);
        let out = generate_model_module(model, &classes, &detected);
        assert!(out.contains("use crate::enums::{TrafficLight};"));
    }

    #[test]
    fn lib_rs_exposes_the_modules() {
        let model = models::movement::model();
        let out = generate_lib_rs(model, "movement", true);
        assert!(out.contains("pub mod enums;"));
        assert!(out.contains("pub mod movement;"));
        assert!(out.contains("pub use movement::*;"));
    }

    #[test]
    fn manifest_names_the_generated_crate() {
        let model = models::sensor_catalog::model();
        let manifest = generate_manifest(model);
        assert!(manifest.contains("name = \"sensor-catalog-model\""));
        assert!(manifest.contains("samm-runtime"));
    }
}
