//! Static metadata generation: one `Meta*` companion per generated class.
//!
//! The companion is a unit struct implementing `StaticMetaClass` and
//! `PropertyContainer` from `samm-runtime`, with one typed `StaticProperty`
//! constant per property.

use std::fmt::Write as FmtWrite;

use samm_metamodel::model::{DataType, LangText, Property};
use samm_metamodel::AspectModel;

use crate::emit::{escape_str, RustFile};
use crate::mapping::{characteristic_rust_type, to_snake_case};
use crate::structs::GeneratedClass;

/// Generates the `Meta*` companion for a class.
pub fn generate_meta_class(
    f: &mut RustFile,
    model: &AspectModel,
    class: &GeneratedClass<'_>,
    enum_names: &[(&'static str, String)],
) {
    let type_name = &class.type_name;
    let meta_name = format!("Meta{type_name}");

    f.doc_comment(&format!("Static meta-class for [`{type_name}`]."));
    let _ = writeln!(f.buf, "pub struct {meta_name};");
    f.blank();

    // Typed property descriptors and the erased slices.
    let _ = writeln!(f.buf, "impl {meta_name} {{");
    for prop in &class.all {
        generate_property_const(f, model, type_name, prop, enum_names);
    }
    emit_desc_slice(f, "DECLARED_PROPERTIES", &class.declared);
    if class.all.len() != class.declared.len() {
        emit_desc_slice(f, "ALL_PROPERTIES", &class.all);
    }
    f.line("}");
    f.blank();

    // StaticMetaClass impl.
    let _ = writeln!(f.buf, "impl StaticMetaClass for {meta_name} {{");
    f.line("    fn model_urn() -> &'static str {");
    let _ = writeln!(f.buf, "        \"{}\"", class.urn);
    f.line("    }");
    f.blank();
    f.line("    fn meta_model_version() -> &'static str {");
    let _ = writeln!(f.buf, "        \"{}\"", model.meta_model_version);
    f.line("    }");
    f.blank();
    f.line("    fn name() -> &'static str {");
    let _ = writeln!(f.buf, "        \"{type_name}\"");
    f.line("    }");
    if !class.preferred_names.is_empty() {
        f.blank();
        f.line("    fn preferred_names() -> Vec<LangString> {");
        emit_lang_vec(f, class.preferred_names);
        f.line("    }");
    }
    if !class.descriptions.is_empty() {
        f.blank();
        f.line("    fn descriptions() -> Vec<LangString> {");
        emit_lang_vec(f, class.descriptions);
        f.line("    }");
    }
    if !class.see.is_empty() {
        f.blank();
        f.line("    fn see() -> Vec<&'static str> {");
        let urls: Vec<String> = class
            .see
            .iter()
            .map(|url| format!("\"{}\"", escape_str(url)))
            .collect();
        let _ = writeln!(f.buf, "        vec![{}]", urls.join(", "));
        f.line("    }");
    }
    f.line("}");
    f.blank();

    // PropertyContainer impl.
    let _ = writeln!(f.buf, "impl PropertyContainer for {meta_name} {{");
    f.line("    fn declared_properties() -> &'static [PropertyDesc] {");
    f.line("        Self::DECLARED_PROPERTIES");
    f.line("    }");
    if class.all.len() != class.declared.len() {
        f.blank();
        f.line("    fn all_properties() -> &'static [PropertyDesc] {");
        f.line("        Self::ALL_PROPERTIES");
        f.line("    }");
    }
    f.line("}");
    f.blank();
}

fn generate_property_const(
    f: &mut RustFile,
    model: &AspectModel,
    type_name: &str,
    prop: &Property,
    enum_names: &[(&'static str, String)],
) {
    let const_name = format!("PROPERTY_{}", to_snake_case(prop.name()).to_uppercase());
    let value_type = characteristic_rust_type(model, &prop.characteristic, enum_names);

    f.indented_doc_comment(&format!("Typed descriptor for the `{}` property.", prop.name()));
    let _ = writeln!(
        f.buf,
        "    pub const {const_name}: StaticProperty<{type_name}, {value_type}> ="
    );
    f.line("        StaticProperty::new(PropertyDesc {");
    let _ = writeln!(f.buf, "            urn: \"{}\",", prop.urn);
    let _ = writeln!(f.buf, "            name: \"{}\",", prop.name());
    match prop.payload_name {
        Some(name) => {
            let _ = writeln!(
                f.buf,
                "            payload_name: Some(\"{}\"),",
                escape_str(name)
            );
        }
        None => f.line("            payload_name: None,"),
    }
    let _ = writeln!(f.buf, "            optional: {},", prop.optional);
    let _ = writeln!(f.buf, "            not_in_payload: {},", prop.not_in_payload);
    let _ = writeln!(f.buf, "            is_abstract: {},", prop.is_abstract);
    match &prop.example_value {
        Some(example) => {
            let _ = writeln!(
                f.buf,
                "            example_value: Some(\"{}\"),",
                escape_str(&example.lexical())
            );
        }
        None => f.line("            example_value: None,"),
    }
    f.line("            characteristic: CharacteristicDesc {");
    let _ = writeln!(f.buf, "                urn: \"{}\",", prop.characteristic.urn);
    let _ = writeln!(
        f.buf,
        "                name: \"{}\",",
        prop.characteristic.name()
    );
    match prop.characteristic.effective_data_type() {
        Some(DataType::Scalar(t)) => {
            let _ = writeln!(
                f.buf,
                "                data_type_urn: Some(\"{}\"),",
                t.as_iri()
            );
        }
        Some(DataType::Entity(urn)) => {
            let _ = writeln!(f.buf, "                data_type_urn: Some(\"{urn}\"),");
        }
        None => f.line("                data_type_urn: None,"),
    }
    f.line("            },");
    f.line("        });");
    f.blank();
}

fn emit_desc_slice(f: &mut RustFile, const_name: &str, props: &[&Property]) {
    let _ = writeln!(
        f.buf,
        "    const {const_name}: &'static [PropertyDesc] = &["
    );
    for prop in props {
        let prop_const = format!("PROPERTY_{}", to_snake_case(prop.name()).to_uppercase());
        let _ = writeln!(f.buf, "        Self::{prop_const}.desc(),");
    }
    f.line("    ];");
    f.blank();
}

fn emit_lang_vec(f: &mut RustFile, texts: &[LangText]) {
    f.line("        vec![");
    for text in texts {
        let _ = writeln!(
            f.buf,
            "            LangString::new(\"{}\", \"{}\"),",
            escape_str(text.language_tag),
            escape_str(text.value)
        );
    }
    f.line("        ]");
}
