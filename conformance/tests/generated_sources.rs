//! Cross-crate fixture test: generate both sample models, then run the full
//! conformance suite over the generated sources.

use std::fs;

use samm_conformance::{run_all, ConformancePaths, Severity};
use samm_metamodel::models;

#[test]
fn generated_sources_pass_conformance() {
    let root = std::env::temp_dir().join("samm-conformance-test");
    if root.exists() {
        let _ = fs::remove_dir_all(&root);
    }

    let mut paths = ConformancePaths::default();
    for model in models::all() {
        let name = model.aspect.name().to_lowercase();
        let src_dir = root.join(&name).join("src");
        samm_codegen::generate(model, &src_dir).expect("generation failed");
        paths.generated.push(src_dir);
    }

    let report = run_all(&paths);
    for result in &report.results {
        assert_ne!(
            result.severity,
            Severity::Failure,
            "{}: {:?}",
            result.message,
            result.details
        );
    }
    // Inventory + turtle per model, plus one rust-source result per
    // generated directory.
    assert_eq!(report.results.len(), 6);
}
