//! Struct generation: aspect/entity → Rust struct, property → typed field.

use std::fmt::Write as FmtWrite;

use samm_metamodel::model::{Entity, LangText, Property};
use samm_metamodel::AspectModel;

use crate::emit::{normalize_comment, RustFile};
use crate::mapping::{characteristic_rust_type, snake_to_camel, to_pascal_case, to_snake_case};

/// One class to generate: the aspect or a concrete entity.
pub struct GeneratedClass<'a> {
    /// Rust type name.
    pub type_name: String,
    /// Full URN of the source element.
    pub urn: &'static str,
    /// Multi-language preferred names of the source element.
    pub preferred_names: &'a [LangText],
    /// Multi-language descriptions of the source element.
    pub descriptions: &'a [LangText],
    /// Reference URLs of the source element.
    pub see: &'a [&'static str],
    /// Properties declared directly on the element.
    pub declared: Vec<&'a Property>,
    /// All properties, with inherited ones flattened in front.
    pub all: Vec<&'a Property>,
}

/// Collects the classes a model generates: the aspect first, then every
/// concrete entity. Abstract entities generate no class; their properties
/// are flattened into the entities extending them.
#[must_use]
pub fn classes(model: &AspectModel) -> Vec<GeneratedClass<'_>> {
    let mut out = Vec::new();

    let aspect = &model.aspect;
    out.push(GeneratedClass {
        type_name: to_pascal_case(aspect.name()),
        urn: aspect.urn,
        preferred_names: &aspect.preferred_names,
        descriptions: &aspect.descriptions,
        see: &aspect.see,
        declared: aspect.properties.iter().collect(),
        all: aspect.properties.iter().collect(),
    });

    for entity in &model.entities {
        if entity.is_abstract {
            continue;
        }
        let mut all = Vec::new();
        collect_properties(model, entity, &mut all);
        out.push(GeneratedClass {
            type_name: to_pascal_case(entity.name()),
            urn: entity.urn,
            preferred_names: &entity.preferred_names,
            descriptions: &entity.descriptions,
            see: &entity.see,
            declared: entity.properties.iter().collect(),
            all,
        });
    }

    out
}

fn collect_properties<'a>(
    model: &'a AspectModel,
    entity: &'a Entity,
    out: &mut Vec<&'a Property>,
) {
    if let Some(parent_urn) = entity.extends {
        if let Some(parent) = model.find_entity(parent_urn) {
            collect_properties(model, parent, out);
        }
    }
    out.extend(entity.properties.iter());
}

/// Generates the struct for a class.
pub fn generate_struct(
    f: &mut RustFile,
    model: &AspectModel,
    class: &GeneratedClass<'_>,
    enum_names: &[(&'static str, String)],
) {
    f.doc_comment(&class_doc(class));
    f.line("#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]");
    f.line("#[serde(rename_all = \"camelCase\")]");
    let _ = writeln!(f.buf, "pub struct {} {{", class.type_name);

    for prop in &class.all {
        f.indented_doc_comment(&property_doc(prop));

        let field_name = to_snake_case(prop.name());
        let base_type = characteristic_rust_type(model, &prop.characteristic, enum_names);
        let wrapped = prop.optional || prop.not_in_payload;
        let field_type = if wrapped {
            format!("Option<{base_type}>")
        } else {
            base_type
        };

        if prop.not_in_payload {
            f.line("    #[serde(skip)]");
        } else {
            if prop.optional {
                f.line("    #[serde(default, skip_serializing_if = \"Option::is_none\")]");
            }
            let expected_key = snake_to_camel(&field_name);
            let payload_key = prop.effective_payload_name();
            if payload_key != expected_key {
                let _ = writeln!(f.buf, "    #[serde(rename = \"{payload_key}\")]");
            }
        }

        let _ = writeln!(f.buf, "    pub {field_name}: {field_type},");
    }

    f.line("}");
    f.blank();
}

fn class_doc(class: &GeneratedClass<'_>) -> String {
    let mut doc = english_text(class.descriptions).map_or_else(
        || format!("The `{}` model class.", class.type_name),
        normalize_comment,
    );
    let _ = write!(doc, "\n\nGenerated from `{}`.", class.urn);
    doc
}

fn property_doc(prop: &Property) -> String {
    english_text(&prop.descriptions)
        .or_else(|| english_text(&prop.preferred_names))
        .map_or_else(|| format!("The `{}` property.", prop.name()), normalize_comment)
}

/// Returns the English entry of a language-tagged text collection.
#[must_use]
pub fn english_text(texts: &[LangText]) -> Option<&'static str> {
    texts
        .iter()
        .find(|t| t.language_tag == "en")
        .map(|t| t.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use samm_metamodel::models;

    #[test]
    fn movement_generates_aspect_and_entity_classes() {
        let model = models::movement::model();
        let classes = classes(model);
        let names: Vec<&str> = classes.iter().map(|c| c.type_name.as_str()).collect();
        assert_eq!(names, vec!["Movement", "SpatialPosition"]);
    }

    #[test]
    fn abstract_entities_generate_no_class_but_flatten_properties() {
        let model = models::sensor_catalog::model();
        let classes = classes(model);
        assert!(classes.iter().all(|c| c.type_name != "DeviceBase"));
        let sensor = classes
            .iter()
            .find(|c| c.type_name == "Sensor")
            .map(|c| {
                (
                    c.declared.len(),
                    c.all.iter().map(|p| p.name()).collect::<Vec<_>>(),
                )
            });
        let (declared, all) = sensor.unwrap_or((0, vec![]));
        assert_eq!(declared, 3);
        // Inherited serialNumber is flattened in front.
        assert_eq!(
            all,
            vec!["serialNumber", "sensorType", "lastReading", "displayName"]
        );
    }

    #[test]
    fn struct_fields_carry_serde_attributes() {
        let model = models::sensor_catalog::model();
        let enums = crate::enums::detect_enums(model);
        let enum_names = crate::enums::enum_names(&enums);
        let mut f = RustFile::new("test");
        for class in classes(model) {
            generate_struct(&mut f, model, &class, &enum_names);
        }
        let out = f.finish();
        assert!(out.contains("pub struct SensorCatalog {"));
        assert!(out.contains("#[serde(rename_all = \"camelCase\")]"));
        assert!(out.contains("#[serde(rename = \"temp\")]"));
        assert!(out.contains("pub temperature: Option<f64>,"));
        assert!(out.contains("#[serde(skip)]"));
        assert!(out.contains("pub raw_data: Option<String>,"));
        assert!(out.contains("pub sensors: Vec<Sensor>,"));
        assert!(out.contains("pub status: SensorStatus,"));
        assert!(out.contains("pub reading: samm_runtime::Either<f32, String>,"));
        assert!(out.contains("pub display_name: Option<samm_runtime::MultiLanguageText>,"));
    }

    #[test]
    fn movement_struct_field_types() {
        let model = models::movement::model();
        let enums = crate::enums::detect_enums(model);
        let enum_names = crate::enums::enum_names(&enums);
        let mut f = RustFile::new("test");
        for class in classes(model) {
            generate_struct(&mut f, model, &class, &enum_names);
        }
        let out = f.finish();
        assert!(out.contains("pub is_moving: bool,"));
        assert!(out.contains("pub position: SpatialPosition,"));
        assert!(out.contains("pub speed: f32,"));
        assert!(out.contains("pub speed_limit_warning: TrafficLight,"));
        assert!(out.contains("pub altitude: Option<f32>,"));
    }
}
