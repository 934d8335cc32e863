//! Turtle serializer for aspect models.
//!
//! Produces a Turtle document in SAMM's surface syntax: a prefix block for
//! the meta-model namespaces and the model namespace, followed by the aspect,
//! its properties, model-defined characteristics, entities, operations, and
//! events. Standard-library characteristics (`samm-c:` URNs) are referenced
//! by prefix and never redefined.

use crate::model::{
    AspectModel, Characteristic, CharacteristicKind, Constraint, DataType, Entity, LangText,
    Property, ScalarValue, XsdType,
};
use crate::vocabulary;

/// Serializes a complete aspect model to a Turtle string.
#[must_use]
pub fn to_turtle(model: &AspectModel) -> String {
    let mut out = String::with_capacity(16 * 1024);
    let ns = model.namespace.urn_prefix();

    // Prefix declarations
    out.push_str(&format!("@prefix samm: <{}> .\n", vocabulary::PREFIX_SAMM));
    out.push_str(&format!(
        "@prefix samm-c: <{}> .\n",
        vocabulary::PREFIX_SAMM_C
    ));
    out.push_str(&format!(
        "@prefix samm-e: <{}> .\n",
        vocabulary::PREFIX_SAMM_E
    ));
    out.push_str(&format!("@prefix unit: <{}> .\n", vocabulary::PREFIX_UNIT));
    out.push_str(&format!("@prefix xsd: <{}> .\n", vocabulary::XSD));
    out.push_str(&format!("@prefix rdf: <{}> .\n", vocabulary::RDF));
    out.push_str(&format!("@prefix : <{ns}> .\n\n"));

    emit_aspect(&mut out, model, &ns);

    for prop in model.all_properties() {
        emit_property(&mut out, prop, &ns);
    }

    for characteristic in model.characteristics() {
        if !characteristic.is_standard_library() {
            emit_characteristic(&mut out, characteristic, &ns);
        }
    }

    for entity in &model.entities {
        emit_entity(&mut out, entity, &ns);
    }

    out
}

fn emit_aspect(out: &mut String, model: &AspectModel, ns: &str) {
    let aspect = &model.aspect;
    out.push_str(&format!("{} a samm:Aspect", name_ref(aspect.urn, ns)));
    emit_descriptive(out, &aspect.preferred_names, &aspect.descriptions, &aspect.see);
    out.push_str(&format!(
        " ;\n  samm:properties {}",
        property_list(&aspect.properties, ns)
    ));
    let op_refs: Vec<String> = aspect
        .operations
        .iter()
        .map(|op| name_ref(op.urn, ns))
        .collect();
    out.push_str(&format!(" ;\n  samm:operations ( {} )", join_spaced(&op_refs)));
    let ev_refs: Vec<String> = aspect
        .events
        .iter()
        .map(|ev| name_ref(ev.urn, ns))
        .collect();
    out.push_str(&format!(" ;\n  samm:events ( {} )", join_spaced(&ev_refs)));
    out.push_str(" .\n\n");

    for op in &aspect.operations {
        out.push_str(&format!("{} a samm:Operation", name_ref(op.urn, ns)));
        emit_descriptive(out, &op.preferred_names, &op.descriptions, &op.see);
        out.push_str(&format!(
            " ;\n  samm:input {}",
            property_list(&op.input, ns)
        ));
        if let Some(output) = &op.output {
            out.push_str(&format!(" ;\n  samm:output {}", name_ref(output.urn, ns)));
        }
        out.push_str(" .\n\n");
    }

    for ev in &aspect.events {
        out.push_str(&format!("{} a samm:Event", name_ref(ev.urn, ns)));
        emit_descriptive(out, &ev.preferred_names, &ev.descriptions, &ev.see);
        out.push_str(&format!(
            " ;\n  samm:parameters {}",
            property_list(&ev.parameters, ns)
        ));
        out.push_str(" .\n\n");
    }
}

fn emit_property(out: &mut String, prop: &Property, ns: &str) {
    out.push_str(&format!("{} a samm:Property", name_ref(prop.urn, ns)));
    emit_descriptive(out, &prop.preferred_names, &prop.descriptions, &prop.see);
    if let Some(example) = &prop.example_value {
        let data_type = prop.characteristic.effective_data_type();
        out.push_str(&format!(
            " ;\n  samm:exampleValue {}",
            typed_literal(example, data_type)
        ));
    }
    out.push_str(&format!(
        " ;\n  samm:characteristic {}",
        name_ref(prop.characteristic.urn, ns)
    ));
    out.push_str(" .\n\n");
}

fn emit_characteristic(out: &mut String, c: &Characteristic, ns: &str) {
    out.push_str(&format!(
        "{} a samm-c:{}",
        name_ref(c.urn, ns),
        c.kind.class_name()
    ));
    emit_descriptive(out, &c.preferred_names, &c.descriptions, &c.see);

    if let Some(data_type) = c.data_type {
        out.push_str(&format!(" ;\n  samm:dataType {}", data_type_ref(data_type, ns)));
    }

    match &c.kind {
        CharacteristicKind::Quantifiable { unit: Some(unit) } => {
            out.push_str(&format!(" ;\n  samm-c:unit {}", name_ref(unit, ns)));
        }
        CharacteristicKind::Measurement { unit } => {
            out.push_str(&format!(" ;\n  samm-c:unit {}", name_ref(unit, ns)));
        }
        CharacteristicKind::Enumeration { values } => {
            out.push_str(&format!(
                " ;\n  samm-c:values ( {} )",
                join_spaced(&literal_list(values, c.data_type))
            ));
        }
        CharacteristicKind::State {
            values,
            default_value,
        } => {
            out.push_str(&format!(
                " ;\n  samm-c:values ( {} )",
                join_spaced(&literal_list(values, c.data_type))
            ));
            out.push_str(&format!(
                " ;\n  samm-c:defaultValue {}",
                typed_literal(default_value, c.data_type)
            ));
        }
        CharacteristicKind::Collection { element, .. } => {
            if let Some(element) = element {
                out.push_str(&format!(
                    " ;\n  samm-c:elementCharacteristic {}",
                    name_ref(element.urn, ns)
                ));
            }
        }
        CharacteristicKind::StructuredValue {
            deconstruction_rule,
            elements,
        } => {
            out.push_str(&format!(
                " ;\n  samm-c:deconstructionRule {}",
                turtle_string(deconstruction_rule)
            ));
            let refs: Vec<String> = elements.iter().map(|e| name_ref(e, ns)).collect();
            out.push_str(&format!(" ;\n  samm-c:elements ( {} )", join_spaced(&refs)));
        }
        CharacteristicKind::Either { left, right } => {
            out.push_str(&format!(" ;\n  samm-c:left {}", name_ref(left.urn, ns)));
            out.push_str(&format!(" ;\n  samm-c:right {}", name_ref(right.urn, ns)));
        }
        CharacteristicKind::Trait { base, constraints } => {
            out.push_str(&format!(
                " ;\n  samm-c:baseCharacteristic {}",
                name_ref(base.urn, ns)
            ));
            for constraint in constraints {
                out.push_str(&format!(
                    " ;\n  samm-c:constraint {}",
                    constraint_node(constraint, base.effective_data_type())
                ));
            }
        }
        _ => {}
    }

    out.push_str(" .\n\n");
}

fn emit_entity(out: &mut String, entity: &Entity, ns: &str) {
    let class = if entity.is_abstract {
        "samm:AbstractEntity"
    } else {
        "samm:Entity"
    };
    out.push_str(&format!("{} a {class}", name_ref(entity.urn, ns)));
    emit_descriptive(
        out,
        &entity.preferred_names,
        &entity.descriptions,
        &entity.see,
    );
    if let Some(parent) = entity.extends {
        out.push_str(&format!(" ;\n  samm:extends {}", name_ref(parent, ns)));
    }
    out.push_str(&format!(
        " ;\n  samm:properties {}",
        property_list(&entity.properties, ns)
    ));
    out.push_str(" .\n\n");
}

/// Renders `samm:preferredName`, `samm:description`, and `samm:see` entries.
fn emit_descriptive(
    out: &mut String,
    preferred_names: &[LangText],
    descriptions: &[LangText],
    see: &[&str],
) {
    for text in preferred_names {
        out.push_str(&format!(
            " ;\n  samm:preferredName {}@{}",
            turtle_string(text.value),
            text.language_tag
        ));
    }
    for text in descriptions {
        out.push_str(&format!(
            " ;\n  samm:description {}@{}",
            turtle_string(text.value),
            text.language_tag
        ));
    }
    for url in see {
        out.push_str(&format!(" ;\n  samm:see <{url}>"));
    }
}

/// Renders a `samm:properties`-style list, wrapping flagged properties in
/// blank nodes.
fn property_list(props: &[Property], ns: &str) -> String {
    let items: Vec<String> = props
        .iter()
        .map(|p| {
            let plain = !p.optional && !p.not_in_payload && p.payload_name.is_none();
            if plain {
                name_ref(p.urn, ns)
            } else {
                let mut node = format!("[ samm:property {}", name_ref(p.urn, ns));
                if p.optional {
                    node.push_str(" ; samm:optional true");
                }
                if p.not_in_payload {
                    node.push_str(" ; samm:notInPayload true");
                }
                if let Some(payload_name) = p.payload_name {
                    node.push_str(&format!(
                        " ; samm:payloadName {}",
                        turtle_string(payload_name)
                    ));
                }
                node.push_str(" ]");
                node
            }
        })
        .collect();
    format!("( {} )", join_spaced(&items))
}

/// Renders a constraint as an anonymous node.
fn constraint_node(constraint: &Constraint, data_type: Option<DataType>) -> String {
    let mut node = format!("[ a samm-c:{}", constraint.class_name());
    match constraint {
        Constraint::Range {
            min,
            max,
            lower,
            upper,
        } => {
            if let Some(min) = min {
                node.push_str(&format!(
                    " ; samm-c:minValue {}",
                    typed_literal(min, data_type)
                ));
                node.push_str(&format!(
                    " ; samm-c:lowerBoundDefinition samm-c:{}",
                    lower.as_str()
                ));
            }
            if let Some(max) = max {
                node.push_str(&format!(
                    " ; samm-c:maxValue {}",
                    typed_literal(max, data_type)
                ));
                node.push_str(&format!(
                    " ; samm-c:upperBoundDefinition samm-c:{}",
                    upper.as_str()
                ));
            }
        }
        Constraint::Length { min, max } => {
            if let Some(min) = min {
                node.push_str(&format!(
                    " ; samm-c:minValue \"{min}\"^^xsd:nonNegativeInteger"
                ));
            }
            if let Some(max) = max {
                node.push_str(&format!(
                    " ; samm-c:maxValue \"{max}\"^^xsd:nonNegativeInteger"
                ));
            }
        }
        Constraint::RegularExpression(pattern) => {
            node.push_str(&format!(" ; samm:value {}", turtle_string(pattern)));
        }
        Constraint::Encoding(encoding) => {
            node.push_str(&format!(" ; samm:value samm:{}", encoding.as_str()));
        }
        Constraint::Language(tag) => {
            node.push_str(&format!(" ; samm-c:languageCode {}", turtle_string(tag)));
        }
        Constraint::Locale(locale) => {
            node.push_str(&format!(" ; samm-c:localeCode {}", turtle_string(locale)));
        }
        Constraint::FixedPoint { scale, integer } => {
            node.push_str(&format!(" ; samm-c:scale \"{scale}\"^^xsd:positiveInteger"));
            node.push_str(&format!(
                " ; samm-c:integer \"{integer}\"^^xsd:positiveInteger"
            ));
        }
    }
    node.push_str(" ]");
    node
}

fn literal_list(values: &[ScalarValue], data_type: Option<DataType>) -> Vec<String> {
    values.iter().map(|v| typed_literal(v, data_type)).collect()
}

/// Renders a scalar value as a Turtle literal, typed when the data type is a
/// non-string scalar.
fn typed_literal(value: &ScalarValue, data_type: Option<DataType>) -> String {
    match data_type {
        Some(DataType::Scalar(t)) if t != XsdType::String => {
            format!("{}^^{}", turtle_string(&value.lexical()), t.as_prefixed())
        }
        _ => turtle_string(&value.lexical()),
    }
}

/// Renders a data type reference: an XSD prefix form or an entity reference.
fn data_type_ref(data_type: DataType, ns: &str) -> String {
    match data_type {
        DataType::Scalar(t) => t.as_prefixed().to_string(),
        DataType::Entity(urn) => name_ref(urn, ns),
    }
}

/// Renders a URN as a prefixed name where a prefix is known, or as a full
/// IRI reference otherwise.
fn name_ref(urn: &str, model_ns: &str) -> String {
    for (prefix, label) in [
        (model_ns, ""),
        (vocabulary::PREFIX_SAMM_C, "samm-c"),
        (vocabulary::PREFIX_SAMM_E, "samm-e"),
        (vocabulary::PREFIX_UNIT, "unit"),
        (vocabulary::PREFIX_SAMM, "samm"),
    ] {
        if let Some(local) = urn.strip_prefix(prefix) {
            return format!("{label}:{local}");
        }
    }
    format!("<{urn}>")
}

fn join_spaced(items: &[String]) -> String {
    items.join(" ")
}

fn turtle_string(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models;

    #[test]
    fn movement_turtle_declares_all_prefixes() {
        let ttl = to_turtle(models::movement::model());
        for prefix in ["samm:", "samm-c:", "samm-e:", "unit:", "xsd:", "rdf:"] {
            assert!(
                ttl.contains(&format!("@prefix {prefix}")),
                "missing prefix declaration: {prefix}"
            );
        }
        assert!(ttl.contains("@prefix : <urn:samm:com.example.movement:1.0.0#>"));
    }

    #[test]
    fn movement_turtle_contains_aspect_and_properties() {
        let ttl = to_turtle(models::movement::model());
        assert!(ttl.contains(":Movement a samm:Aspect"));
        assert!(ttl.contains(":isMoving a samm:Property"));
        assert!(ttl.contains("samm:characteristic samm-c:Boolean"));
        assert!(ttl.contains("samm:preferredName \"Bewegung\"@de"));
        assert!(ttl.contains("samm-c:unit unit:kilometrePerHour"));
        assert!(ttl.contains("samm:exampleValue \"true\"^^xsd:boolean"));
    }

    #[test]
    fn optional_property_is_wrapped_in_blank_node() {
        let ttl = to_turtle(models::movement::model());
        assert!(ttl.contains("[ samm:property :altitude ; samm:optional true ]"));
    }

    #[test]
    fn sensor_catalog_turtle_covers_constraints_and_inheritance() {
        let ttl = to_turtle(models::sensor_catalog::model());
        assert!(ttl.contains(":AccuracyTrait a samm-c:Trait"));
        assert!(ttl.contains("samm-c:baseCharacteristic :AccuracyPercent"));
        assert!(ttl.contains("a samm-c:RangeConstraint"));
        assert!(ttl.contains("samm-c:lowerBoundDefinition samm-c:AT_LEAST"));
        assert!(ttl.contains(":DeviceBase a samm:AbstractEntity"));
        assert!(ttl.contains("samm:extends :DeviceBase"));
        assert!(ttl.contains("samm-c:deconstructionRule \"(\\\\d+)\\\\.(\\\\d+)\\\\.(\\\\d+)\""));
        assert!(ttl.contains(" ; samm:payloadName \"temp\" ]"));
    }

    #[test]
    fn standard_library_characteristics_are_not_redefined() {
        let ttl = to_turtle(models::sensor_catalog::model());
        assert!(!ttl.contains("samm-c:Text a "));
        assert!(ttl.contains("samm-c:baseCharacteristic samm-c:Text"));
    }

    #[test]
    fn serialization_is_deterministic() {
        let first = to_turtle(models::movement::model());
        let second = to_turtle(models::movement::model());
        assert_eq!(first, second);
    }
}
