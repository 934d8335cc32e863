//! Enum detection and generation.
//!
//! Identifies enumeration and state characteristics whose values are closed
//! sets of strings, and generates Rust enums with serde renames, `as_str`,
//! `FromStr`, and (for states) a `Default` impl.

use std::fmt::Write as FmtWrite;

use samm_metamodel::model::{CharacteristicKind, ScalarValue};
use samm_metamodel::AspectModel;

use crate::emit::{escape_str, normalize_comment, RustFile};
use crate::mapping::to_pascal_case;

/// Detected enum type to generate.
pub struct DetectedEnum {
    /// URN of the source characteristic.
    pub urn: &'static str,
    /// Rust enum name.
    pub name: String,
    /// Doc comment.
    pub comment: String,
    /// Variants: (variant_name, model_value).
    pub variants: Vec<(String, &'static str)>,
    /// Model value of the default variant, for `State` characteristics.
    pub default_value: Option<&'static str>,
}

/// Detects all enums in a model: `Enumeration` and `State` characteristics
/// whose values are all strings.
#[must_use]
pub fn detect_enums(model: &AspectModel) -> Vec<DetectedEnum> {
    let mut enums = Vec::new();
    for characteristic in model.characteristics() {
        let (values, default_value) = match &characteristic.kind {
            CharacteristicKind::Enumeration { values } => (values, None),
            CharacteristicKind::State {
                values,
                default_value,
            } => (values, Some(default_value)),
            _ => continue,
        };
        let strings: Option<Vec<&'static str>> = values
            .iter()
            .map(|v| match v {
                ScalarValue::Str(s) => Some(*s),
                _ => None,
            })
            .collect();
        let Some(strings) = strings else {
            // Non-string enumerations stay as their scalar type.
            continue;
        };
        let default_value = default_value.and_then(|v| match v {
            ScalarValue::Str(s) => Some(*s),
            _ => None,
        });
        let comment = characteristic
            .descriptions
            .iter()
            .find(|t| t.language_tag == "en")
            .map_or_else(
                || format!("Values of the `{}` characteristic.", characteristic.name()),
                |t| normalize_comment(t.value),
            );
        enums.push(DetectedEnum {
            urn: characteristic.urn,
            name: to_pascal_case(characteristic.name()),
            comment,
            variants: strings
                .iter()
                .map(|s| (to_pascal_case(s), *s))
                .collect(),
            default_value,
        });
    }
    enums
}

/// Returns `(characteristic URN, enum name)` pairs for type resolution.
#[must_use]
pub fn enum_names(enums: &[DetectedEnum]) -> Vec<(&'static str, String)> {
    enums.iter().map(|e| (e.urn, e.name.clone())).collect()
}

/// Generates the `enums.rs` file content for a model.
#[must_use]
pub fn generate_enums_file(model: &AspectModel, enums: &[DetectedEnum]) -> String {
    let mut f = RustFile::new(&format!(
        "Enumerations of the {} aspect model.",
        model.aspect.name()
    ));

    f.line("use core::str::FromStr;");
    f.blank();
    f.line("use serde::{Deserialize, Serialize};");
    f.blank();

    for detected in enums {
        generate_enum(&mut f, detected);
    }

    f.finish()
}

fn generate_enum(f: &mut RustFile, detected: &DetectedEnum) {
    let name = &detected.name;

    f.doc_comment(&detected.comment);
    f.line("#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]");
    let _ = writeln!(f.buf, "pub enum {name} {{");
    for (variant, value) in &detected.variants {
        let _ = writeln!(f.buf, "    /// `{value}`");
        let _ = writeln!(f.buf, "    #[serde(rename = \"{}\")]", escape_str(value));
        let _ = writeln!(f.buf, "    {variant},");
    }
    f.line("}");
    f.blank();

    let _ = writeln!(f.buf, "impl {name} {{");
    f.indented_doc_comment("Returns the model value of the variant.");
    f.line("    #[must_use]");
    f.line("    pub const fn as_str(self) -> &'static str {");
    f.line("        match self {");
    for (variant, value) in &detected.variants {
        let _ = writeln!(
            f.buf,
            "            {name}::{variant} => \"{}\",",
            escape_str(value)
        );
    }
    f.line("        }");
    f.line("    }");
    f.line("}");
    f.blank();

    let _ = writeln!(f.buf, "impl FromStr for {name} {{");
    f.line("    type Err = samm_runtime::InvalidEnumValue;");
    f.blank();
    f.line("    fn from_str(s: &str) -> Result<Self, Self::Err> {");
    f.line("        match s {");
    for (variant, value) in &detected.variants {
        let _ = writeln!(
            f.buf,
            "            \"{}\" => Ok({name}::{variant}),",
            escape_str(value)
        );
    }
    let _ = writeln!(
        f.buf,
        "            other => Err(samm_runtime::InvalidEnumValue::new(\"{name}\", other)),"
    );
    f.line("        }");
    f.line("    }");
    f.line("}");
    f.blank();

    if let Some(default_value) = detected.default_value {
        if let Some((variant, _)) = detected
            .variants
            .iter()
            .find(|(_, value)| *value == default_value)
        {
            let _ = writeln!(f.buf, "impl Default for {name} {{");
            f.line("    fn default() -> Self {");
            let _ = writeln!(f.buf, "        {name}::{variant}");
            f.line("    }");
            f.line("}");
            f.blank();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::local_name;
    use samm_metamodel::models;

    #[test]
    fn movement_detects_the_traffic_light() {
        let model = models::movement::model();
        let enums = detect_enums(model);
        assert_eq!(enums.len(), 1);
        assert_eq!(enums[0].name, "TrafficLight");
        let variants: Vec<&str> =
            enums[0].variants.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(variants, vec!["Green", "Yellow", "Red"]);
        assert_eq!(enums[0].default_value, None);
    }

    #[test]
    fn sensor_catalog_detects_state_with_default() {
        let model = models::sensor_catalog::model();
        let enums = detect_enums(model);
        let status = enums
            .iter()
            .find(|e| e.name == "SensorStatus")
            .map(|e| e.default_value);
        assert_eq!(status, Some(Some("offline")));
        assert!(enums.iter().any(|e| e.name == "SensorTypeEnumeration"));
    }

    #[test]
    fn generated_enum_has_serde_renames_and_default() {
        let model = models::sensor_catalog::model();
        let enums = detect_enums(model);
        let out = generate_enums_file(model, &enums);
        assert!(out.contains("pub enum SensorStatus {"));
        assert!(out.contains("#[serde(rename = \"offline\")]"));
        assert!(out.contains("impl Default for SensorStatus {"));
        assert!(out.contains("SensorStatus::Offline"));
        assert!(out.contains("type Err = samm_runtime::InvalidEnumValue;"));
    }

    #[test]
    fn enum_name_lookup_pairs() {
        let model = models::movement::model();
        let enums = detect_enums(model);
        let names = enum_names(&enums);
        assert_eq!(names.len(), 1);
        assert_eq!(local_name(names[0].0), "TrafficLight");
    }
}
