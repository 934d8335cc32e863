//! Example payload generation.
//!
//! Builds the JSON payload a runtime implementation of an aspect would
//! produce, using declared example values where present and type-derived
//! defaults otherwise. The payload honors payload names, omits optional
//! properties without example values, and never contains `notInPayload`
//! properties.

use serde_json::{json, Map, Value};

use crate::model::{
    AspectModel, Characteristic, CharacteristicKind, DataType, Entity, Property, ScalarValue,
    XsdType,
};

/// Builds the example JSON payload of the model's aspect.
///
/// The returned value can be pretty-printed with
/// [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_sample_payload(model: &AspectModel) -> Value {
    properties_object(model, &model.aspect.properties)
}

fn properties_object(model: &AspectModel, props: &[Property]) -> Value {
    let mut object = Map::new();
    for prop in props {
        if prop.not_in_payload {
            continue;
        }
        if prop.optional && prop.example_value.is_none() {
            continue;
        }
        object.insert(
            prop.effective_payload_name().to_string(),
            property_value(model, prop),
        );
    }
    Value::Object(object)
}

fn property_value(model: &AspectModel, prop: &Property) -> Value {
    match &prop.example_value {
        Some(example) => scalar_to_json(example),
        None => characteristic_value(model, &prop.characteristic),
    }
}

fn characteristic_value(model: &AspectModel, characteristic: &Characteristic) -> Value {
    match &characteristic.kind {
        CharacteristicKind::Trait { base, .. } => characteristic_value(model, base),
        CharacteristicKind::Either { left, .. } => characteristic_value(model, left),
        CharacteristicKind::Collection { element, .. } => {
            let item = match element {
                Some(el) => characteristic_value(model, el),
                None => data_type_default(model, characteristic.data_type),
            };
            json!([item])
        }
        CharacteristicKind::Enumeration { values } => values
            .first()
            .map_or(Value::Null, scalar_to_json),
        CharacteristicKind::State { default_value, .. } => scalar_to_json(default_value),
        _ => data_type_default(model, characteristic.effective_data_type()),
    }
}

fn data_type_default(model: &AspectModel, data_type: Option<DataType>) -> Value {
    match data_type {
        Some(DataType::Entity(urn)) => model
            .find_entity(urn)
            .map_or(Value::Null, |entity| entity_object(model, entity)),
        Some(DataType::Scalar(t)) => scalar_default(t),
        None => Value::Null,
    }
}

/// Builds an entity payload object, flattening properties inherited from
/// extended entities.
fn entity_object(model: &AspectModel, entity: &Entity) -> Value {
    let mut props: Vec<Property> = Vec::new();
    collect_entity_properties(model, entity, &mut props);
    properties_object(model, &props)
}

fn collect_entity_properties(model: &AspectModel, entity: &Entity, out: &mut Vec<Property>) {
    if let Some(parent_urn) = entity.extends {
        if let Some(parent) = model.find_entity(parent_urn) {
            collect_entity_properties(model, parent, out);
        }
    }
    out.extend(entity.properties.iter().cloned());
}

fn scalar_to_json(value: &ScalarValue) -> Value {
    match value {
        ScalarValue::Str(s) => json!(s),
        ScalarValue::Int(n) => json!(n),
        ScalarValue::Float(x) => json!(x),
        ScalarValue::Bool(b) => json!(b),
    }
}

fn scalar_default(t: XsdType) -> Value {
    match t {
        XsdType::Boolean => json!(false),
        XsdType::String
        | XsdType::AnyUri
        | XsdType::Curie
        | XsdType::DateTime
        | XsdType::Date
        | XsdType::Time
        | XsdType::Duration => json!(""),
        XsdType::Float | XsdType::Double | XsdType::Decimal => json!(0.0),
        XsdType::LangString => json!({ "en": "" }),
        _ => json!(0),
    }
}
