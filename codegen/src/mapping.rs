//! Model → Rust mapping tables.
//!
//! Deterministic mappings from aspect model constructs to Rust identifiers
//! and types.

use samm_metamodel::model::{Characteristic, CharacteristicKind, DataType, XsdType};
use samm_metamodel::AspectModel;

/// Converts a camelCase or PascalCase element name into a snake_case Rust
/// identifier.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                // Don't add underscore before consecutive uppercase (e.g., "WGS84")
                let prev = s.as_bytes()[i - 1] as char;
                if prev.is_lowercase() || prev.is_ascii_digit() {
                    result.push('_');
                }
            }
            result.push(ch.to_lowercase().next().unwrap_or(ch));
        } else {
            result.push(ch);
        }
    }
    // Handle Rust keywords
    match result.as_str() {
        "type" | "self" | "super" | "crate" | "mod" | "fn" | "pub" | "use" | "let" | "mut"
        | "ref" | "as" | "in" | "for" | "if" | "else" | "match" | "return" | "struct" | "enum"
        | "trait" | "impl" | "where" | "loop" | "while" | "break" | "continue" | "move" | "box"
        | "dyn" | "true" | "false" => {
            result.push('_');
            result
        }
        _ => result,
    }
}

/// Converts an element name or enumeration value into a PascalCase Rust
/// identifier. Non-alphanumeric characters act as word separators.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = true;
    for ch in s.chars() {
        if ch.is_ascii_alphanumeric() {
            if upper_next {
                result.extend(ch.to_uppercase());
                upper_next = false;
            } else {
                result.push(ch);
            }
        } else {
            upper_next = true;
        }
    }
    result
}

/// Converts a snake_case identifier into the lowerCamelCase payload key it
/// produces under a camelCase rename-all rule.
#[must_use]
pub fn snake_to_camel(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut upper_next = false;
    for ch in s.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}

/// Extracts the local name from a full URN or IRI (after the last `#`).
#[must_use]
pub fn local_name(urn: &str) -> &str {
    urn.rsplit('#').next().unwrap_or(urn)
}

/// Maps an XSD scalar type to the Rust type of a generated field.
#[must_use]
pub fn xsd_rust_type(t: XsdType) -> &'static str {
    match t {
        XsdType::String
        | XsdType::AnyUri
        | XsdType::Curie
        | XsdType::DateTime
        | XsdType::Date
        | XsdType::Time
        | XsdType::Duration => "String",
        XsdType::Boolean => "bool",
        XsdType::Decimal | XsdType::Double => "f64",
        XsdType::Float => "f32",
        XsdType::Integer | XsdType::Long => "i64",
        XsdType::Int => "i32",
        XsdType::Short => "i16",
        XsdType::Byte => "i8",
        XsdType::UnsignedInt => "u32",
        XsdType::UnsignedLong | XsdType::NonNegativeInteger | XsdType::PositiveInteger => "u64",
        XsdType::LangString => "samm_runtime::MultiLanguageText",
    }
}

/// Resolves the Rust type a characteristic produces for a generated field.
///
/// `enum_names` maps characteristic URNs to the names of generated enums;
/// characteristics found there resolve to their enum type.
#[must_use]
pub fn characteristic_rust_type(
    model: &AspectModel,
    characteristic: &Characteristic,
    enum_names: &[(&'static str, String)],
) -> String {
    if let Some((_, name)) = enum_names
        .iter()
        .find(|(urn, _)| *urn == characteristic.urn)
    {
        return name.clone();
    }
    match &characteristic.kind {
        CharacteristicKind::Trait { base, .. } => {
            characteristic_rust_type(model, base, enum_names)
        }
        CharacteristicKind::Either { left, right } => format!(
            "samm_runtime::Either<{}, {}>",
            characteristic_rust_type(model, left, enum_names),
            characteristic_rust_type(model, right, enum_names)
        ),
        CharacteristicKind::Collection { element, .. } => {
            let item = match element {
                Some(el) => characteristic_rust_type(model, el, enum_names),
                None => data_type_rust_type(characteristic.data_type),
            };
            format!("Vec<{item}>")
        }
        _ => data_type_rust_type(characteristic.effective_data_type()),
    }
}

fn data_type_rust_type(data_type: Option<DataType>) -> String {
    match data_type {
        Some(DataType::Scalar(t)) => xsd_rust_type(t).to_string(),
        Some(DataType::Entity(urn)) => to_pascal_case(local_name(urn)),
        // Untyped characteristics fall back to plain text.
        None => "String".to_string(),
    }
}
