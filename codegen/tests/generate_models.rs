//! End-to-end generation tests over the shipped sample models.
//!
//! These assert the shape of the generated crates: file layout, struct and
//! meta-class declarations, and determinism of the output.

use std::fs;

use samm_codegen::{generate, generate_model_module};
use samm_metamodel::models;

fn generate_to_temp(name: &str, model: &samm_metamodel::AspectModel) -> (std::path::PathBuf, samm_codegen::GenerationReport) {
    let crate_dir = std::env::temp_dir().join(format!("samm-codegen-test-{name}"));
    let src_dir = crate_dir.join("src");
    if crate_dir.exists() {
        let _ = fs::remove_dir_all(&crate_dir);
    }
    let report = generate(model, &src_dir).expect("generation failed");
    (crate_dir, report)
}

#[test]
fn movement_generation_writes_the_expected_files() {
    let (crate_dir, report) = generate_to_temp("movement", models::movement::model());

    assert_eq!(report.files, vec!["enums.rs", "movement.rs", "lib.rs"]);
    assert_eq!(report.struct_count, 2);
    assert_eq!(report.enum_count, 1);
    assert_eq!(report.field_count, 7);

    for file in ["src/enums.rs", "src/movement.rs", "src/lib.rs", "Cargo.toml", "README.md"] {
        assert!(
            crate_dir.join(file).exists(),
            "missing generated file: {file}"
        );
    }
}

#[test]
fn movement_module_matches_the_expected_shape() {
    let (crate_dir, _) = generate_to_temp("movement-shape", models::movement::model());
    let module = fs::read_to_string(crate_dir.join("src/movement.rs")).expect("read module");

    // Structs with typed fields.
    assert!(module.contains("pub struct Movement {"));
    assert!(module.contains("    pub is_moving: bool,"));
    assert!(module.contains("    pub position: SpatialPosition,"));
    assert!(module.contains("    pub speed_limit_warning: TrafficLight,"));
    assert!(module.contains("pub struct SpatialPosition {"));
    assert!(module.contains("    pub altitude: Option<f32>,"));

    // Meta companions implementing the runtime contracts.
    assert!(module.contains("pub struct MetaMovement;"));
    assert!(module.contains("impl StaticMetaClass for MetaMovement {"));
    assert!(module.contains("impl PropertyContainer for MetaMovement {"));
    assert!(module.contains("pub struct MetaSpatialPosition;"));
    assert!(module.contains(
        "pub const PROPERTY_IS_MOVING: StaticProperty<Movement, bool> ="
    ));
    assert!(module.contains("\"urn:samm:com.example.movement:1.0.0#isMoving\""));

    // Every struct field and pub item carries a doc comment; spot-check one.
    assert!(module.contains("    /// Flag indicating whether the asset is currently moving."));
}

#[test]
fn sensor_catalog_generation_covers_the_characteristic_catalog() {
    let (crate_dir, report) =
        generate_to_temp("sensor-catalog", models::sensor_catalog::model());

    assert_eq!(report.struct_count, 2); // SensorCatalog + Sensor (DeviceBase is abstract)
    assert_eq!(report.enum_count, 2); // SensorStatus + SensorTypeEnumeration

    let module =
        fs::read_to_string(crate_dir.join("src/sensor_catalog.rs")).expect("read module");
    assert!(module.contains("pub sensors: Vec<Sensor>,"));
    assert!(module.contains("pub reading: samm_runtime::Either<f32, String>,"));
    assert!(module.contains("#[serde(rename = \"temp\")]"));
    assert!(module.contains("#[serde(skip)]"));
    // Inherited property flattened into the concrete entity and its meta.
    assert!(module.contains("pub serial_number: String,"));
    assert!(module.contains("const ALL_PROPERTIES: &'static [PropertyDesc]"));

    let enums = fs::read_to_string(crate_dir.join("src/enums.rs")).expect("read enums");
    assert!(enums.contains("pub enum SensorStatus {"));
    assert!(enums.contains("impl Default for SensorStatus {"));

    let manifest = fs::read_to_string(crate_dir.join("Cargo.toml")).expect("read manifest");
    assert!(manifest.contains("name = \"sensor-catalog-model\""));
}

#[test]
fn generation_is_deterministic() {
    let model = models::movement::model();
    let detected = samm_codegen::enums::detect_enums(model);
    let classes = samm_codegen::structs::classes(model);
    let first = generate_model_module(model, &classes, &detected);
    let second = generate_model_module(model, &classes, &detected);
    assert_eq!(first, second);
}
